//! Whole-word and phrase matching of lexicon terms against text.
//!
//! A term matches when it appears case-insensitively in the text with a
//! word boundary on both sides. Multi-word terms are literal phrases with
//! single-space separation. Every term is escaped before compilation so
//! regex metacharacters inside a term are matched literally.

use regex::RegexSet;

use crate::errors::Result;

/// Builds the pattern source for a single term.
///
/// ```
/// use journal_moderation::matcher::term_pattern;
///
/// assert_eq!(term_pattern("kill all"), r"(?i)\bkill all\b");
/// assert_eq!(term_pattern("a.b"), r"(?i)\ba\.b\b");
/// ```
#[must_use]
pub fn term_pattern(term: &str) -> String {
    format!(r"(?i)\b{}\b", regex::escape(term))
}

/// An ordered set of terms compiled for matching.
#[derive(Debug, Clone)]
pub struct TermSet {
    terms: Vec<String>,
    patterns: RegexSet,
}

impl TermSet {
    /// Compiles the given terms, preserving their order.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let patterns = RegexSet::new(terms.iter().map(|t| term_pattern(t)))?;
        Ok(Self { terms, patterns })
    }

    /// Creates a set that matches nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            terms: Vec::new(),
            patterns: RegexSet::empty(),
        }
    }

    /// Returns the terms in lexicon order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the set holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms found in `text`, in lexicon order.
    #[must_use]
    pub fn find_matches(&self, text: &str) -> Vec<&str> {
        if text.is_empty() || self.terms.is_empty() {
            return Vec::new();
        }

        // SetMatches iterates indices in ascending order.
        self.patterns
            .matches(text)
            .into_iter()
            .map(|idx| self.terms[idx].as_str())
            .collect()
    }

    /// Returns true if any term is found in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        !text.is_empty() && self.patterns.is_match(text)
    }
}

/// Returns the subset of `entries` found in `text`, in entry order.
///
/// Compiles the entries on every call; use [`TermSet`] when the same
/// entries are matched repeatedly.
pub fn find_matches<S: AsRef<str>>(text: &str, entries: &[S]) -> Result<Vec<String>> {
    let set = TermSet::new(entries.iter().map(AsRef::as_ref))?;
    Ok(set
        .find_matches(text)
        .into_iter()
        .map(str::to_string)
        .collect())
}
