//! Per-record aggregation of category violations.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::category::Category;
use crate::evaluator::ContentEvaluator;
use crate::record::Moderable;

/// Terms of one category found in a text or record.
///
/// Never empty: a category without matches has no violation at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryViolation {
    #[serde(rename = "type")]
    category: Category,
    #[serde(rename = "words")]
    matched_terms: Vec<String>,
}

impl CategoryViolation {
    /// Creates a violation, or `None` when no terms were matched.
    ///
    /// Duplicate terms are dropped, keeping first-seen order.
    #[must_use]
    pub fn new<I, S>(category: Category, terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let matched_terms: Vec<String> = terms
            .into_iter()
            .map(Into::into)
            .filter(|term| seen.insert(term.clone()))
            .collect();

        if matched_terms.is_empty() {
            None
        } else {
            Some(Self { category, matched_terms })
        }
    }

    /// Returns the violated category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the unique matched terms.
    #[must_use]
    pub fn matched_terms(&self) -> &[String] {
        &self.matched_terms
    }

    /// Returns true if `term` is among the matched terms.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.matched_terms.iter().any(|t| t == term)
    }
}

/// The verdict for a text or record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ModerationResultRepr")]
pub struct ModerationResult {
    is_clean: bool,
    violations: Vec<CategoryViolation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModerationResultRepr {
    #[serde(default)]
    violations: Vec<CategoryViolation>,
}

impl From<ModerationResultRepr> for ModerationResult {
    fn from(repr: ModerationResultRepr) -> Self {
        // `isClean` is recomputed; a stored flag is never trusted.
        Self::from_violations(repr.violations)
    }
}

impl Default for ModerationResult {
    fn default() -> Self {
        Self::clean()
    }
}

impl ModerationResult {
    /// Creates a clean result.
    #[must_use]
    pub const fn clean() -> Self {
        Self {
            is_clean: true,
            violations: Vec::new(),
        }
    }

    /// Merges violations into a result with at most one entry per
    /// category, ordered by evaluation order.
    #[must_use]
    pub fn from_violations(violations: impl IntoIterator<Item = CategoryViolation>) -> Self {
        let mut accumulator = ViolationAccumulator::new();
        accumulator.extend(violations);
        accumulator.finish()
    }

    /// Returns true if no category was violated.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.is_clean
    }

    /// Returns the violations in evaluation order.
    #[must_use]
    pub fn violations(&self) -> &[CategoryViolation] {
        &self.violations
    }

    /// Returns the violation for a category, if present.
    #[must_use]
    pub fn violation(&self, category: Category) -> Option<&CategoryViolation> {
        self.violations.iter().find(|v| v.category == category)
    }

    /// Returns the violated categories in order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.violations.iter().map(CategoryViolation::category).collect()
    }

    /// Returns the number of distinct matched terms across categories.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.violations.iter().map(|v| v.matched_terms.len()).sum()
    }
}

/// Merges violations from many texts into one [`ModerationResult`].
#[derive(Debug, Default)]
pub struct ViolationAccumulator {
    // Indexed by `Category::index`.
    terms: [Vec<String>; 4],
    seen: [HashSet<String>; 4],
}

impl ViolationAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one violation, merging its terms into the category's union.
    pub fn push(&mut self, violation: CategoryViolation) {
        let idx = violation.category.index();
        for term in violation.matched_terms {
            if self.seen[idx].insert(term.clone()) {
                self.terms[idx].push(term);
            }
        }
    }

    /// Returns true if nothing has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.iter().all(Vec::is_empty)
    }

    /// Produces the merged result.
    #[must_use]
    pub fn finish(self) -> ModerationResult {
        let violations: Vec<CategoryViolation> = Category::ALL
            .into_iter()
            .zip(self.terms)
            .filter(|(_, terms)| !terms.is_empty())
            .map(|(category, matched_terms)| CategoryViolation { category, matched_terms })
            .collect();

        ModerationResult {
            is_clean: violations.is_empty(),
            violations,
        }
    }
}

impl Extend<CategoryViolation> for ViolationAccumulator {
    fn extend<T: IntoIterator<Item = CategoryViolation>>(&mut self, iter: T) {
        for violation in iter {
            self.push(violation);
        }
    }
}

/// Moderates every field of a record against the built-in lexicon.
pub fn evaluate_record<R: Moderable + ?Sized>(record: &R) -> ModerationResult {
    ContentEvaluator::builtin().evaluate_record(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_violation_requires_terms() {
        assert!(CategoryViolation::new(Category::Profanity, Vec::<String>::new()).is_none());
        let violation = CategoryViolation::new(Category::Profanity, ["damn", "damn", "crap"]).unwrap();
        assert_eq!(violation.matched_terms(), &["damn".to_string(), "crap".to_string()]);
        assert!(violation.contains("crap"));
    }

    #[test]
    fn test_accumulator_merges_by_category_in_order() {
        let mut acc = ViolationAccumulator::new();
        assert!(acc.is_empty());
        acc.extend([
            CategoryViolation::new(Category::ExplicitContent, ["nude"]).unwrap(),
            CategoryViolation::new(Category::Profanity, ["damn"]).unwrap(),
            CategoryViolation::new(Category::Profanity, ["fuck", "damn"]).unwrap(),
        ]);
        let result = acc.finish();

        assert!(!result.is_clean());
        assert_eq!(
            result.categories(),
            vec![Category::Profanity, Category::ExplicitContent]
        );
        assert_eq!(
            result.violation(Category::Profanity).unwrap().matched_terms(),
            &["damn".to_string(), "fuck".to_string()]
        );
        assert_eq!(result.term_count(), 3);
    }

    #[test]
    fn test_clean_result() {
        let result = ModerationResult::from_violations(Vec::new());
        assert!(result.is_clean());
        assert!(result.violations().is_empty());
        assert_eq!(result, ModerationResult::default());
    }

    #[test]
    fn test_result_serialization_shape() {
        let result = ModerationResult::from_violations(CategoryViolation::new(
            Category::HateSpeech,
            ["murder"],
        ));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isClean": false,
                "violations": [{"type": "hate_speech", "words": ["murder"]}]
            })
        );
    }

    #[test]
    fn test_deserialize_recomputes_clean_flag() {
        let result: ModerationResult = serde_json::from_value(serde_json::json!({
            "isClean": true,
            "violations": [
                {"type": "profanity", "words": ["damn"]},
                {"type": "profanity", "words": ["damn", "crap"]}
            ]
        }))
        .unwrap();
        assert!(!result.is_clean());
        assert_eq!(result.violations().len(), 1);
        assert_eq!(result.term_count(), 2);

        let empty: ModerationResult = serde_json::from_value(serde_json::json!({
            "isClean": false,
            "violations": [{"type": "nudity", "words": []}]
        }))
        .unwrap();
        assert!(empty.is_clean());
    }
}
