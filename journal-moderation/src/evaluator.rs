//! Evaluation of single texts and whole records against a lexicon.

use tracing::debug;

use crate::aggregator::{CategoryViolation, ModerationResult, ViolationAccumulator};
use crate::category::Category;
use crate::lexicon::Lexicon;
use crate::record::Moderable;

/// Runs every category of a lexicon against text.
#[derive(Debug, Clone, Copy)]
pub struct ContentEvaluator<'a> {
    lexicon: &'a Lexicon,
}

impl ContentEvaluator<'static> {
    /// Creates an evaluator over the built-in lexicon.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl Default for ContentEvaluator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> ContentEvaluator<'a> {
    /// Creates an evaluator over the given lexicon.
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the lexicon in use.
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Returns one violation per category with at least one match, in
    /// evaluation order. Missing or empty text is clean.
    #[must_use]
    pub fn evaluate_text<'t>(&self, text: impl Into<Option<&'t str>>) -> Vec<CategoryViolation> {
        let Some(text) = text.into().filter(|t| !t.is_empty()) else {
            return Vec::new();
        };

        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let found = self.lexicon.term_set(category).find_matches(text);
                let violation = CategoryViolation::new(category, found)?;
                debug!(
                    category = %category,
                    matched = violation.matched_terms().len(),
                    "Category violated"
                );
                Some(violation)
            })
            .collect()
    }

    /// Evaluates every field of a record and merges the findings.
    ///
    /// Absent and empty fields are skipped. Each element of a list field
    /// is evaluated as its own text.
    #[must_use]
    pub fn evaluate_record<R: Moderable + ?Sized>(&self, record: &R) -> ModerationResult {
        let mut accumulator = ViolationAccumulator::new();
        let mut evaluated = 0_usize;

        for (_name, value) in record.fields() {
            for text in value.texts() {
                evaluated += 1;
                accumulator.extend(self.evaluate_text(text));
            }
        }

        let result = accumulator.finish();
        debug!(
            texts = evaluated,
            is_clean = result.is_clean(),
            categories = result.violations().len(),
            "Record moderated"
        );
        result
    }
}

/// Evaluates one text against the built-in lexicon.
#[must_use]
pub fn evaluate_text<'t>(text: impl Into<Option<&'t str>>) -> Vec<CategoryViolation> {
    ContentEvaluator::builtin().evaluate_text(text)
}
