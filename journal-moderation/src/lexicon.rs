//! The lexicon store: categorized word and phrase lists.
//!
//! The built-in lists are compiled into the binary and turned into match
//! patterns once per process. Operators may supply replacement lists as
//! JSON through [`LexiconSource`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use crate::category::Category;
use crate::errors::{ModerationError, Result};
use crate::matcher::TermSet;

/// Built-in profanity terms.
pub const PROFANITY_TERMS: &[&str] = &[
    "fuck", "fucking", "fucked", "fucker", "fck",
    "shit", "shitting", "bullshit", "bs",
    "ass", "asshole", "arse",
    "bitch", "bitches", "bastard",
    "damn", "dammit", "goddamn",
    "crap", "piss", "pissed",
    "dick", "cock", "pussy", "cunt",
    "whore", "slut", "hoe",
    "nigga", "nigger", "negro",
    "fag", "faggot", "retard", "retarded",
];

/// Built-in hate speech terms.
pub const HATE_SPEECH_TERMS: &[&str] = &[
    "kill all", "death to", "murder",
    "genocide", "ethnic cleansing",
    "supremacy", "inferior race",
    "hate all", "burn in hell",
    "terrorist", "extremist",
];

/// Built-in terms disparaging the community's faith.
pub const TARGETED_DISPARAGEMENT_TERMS: &[&str] = &[
    "god is dead", "jesus is fake", "christianity is a lie",
    "bible is false", "church is evil", "christians are stupid",
    "religion is poison", "faith is delusion",
    "curse god", "damn god", "hate jesus",
    "satan worship", "hail satan", "devil worship",
];

/// Built-in explicit content terms.
pub const EXPLICIT_CONTENT_TERMS: &[&str] = &[
    "naked", "nude", "nudity",
    "porn", "pornography", "xxx",
    "sex", "sexual", "erotic",
    "orgasm", "masturbat",
    "genitals", "breasts", "nipple",
];

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_source(&LexiconSource::builtin()).unwrap_or_else(|err| {
        // Unreachable for the literals above; an empty lexicon accepts everything.
        tracing::error!(error = %err, "Failed to compile built-in lexicon, moderation disabled");
        Lexicon::empty()
    })
});

/// Serializable term lists, keyed by category wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconSource {
    /// Profanity terms.
    #[serde(default)]
    pub profanity: Vec<String>,
    /// Hate speech terms.
    #[serde(default)]
    pub hate_speech: Vec<String>,
    /// Targeted disparagement terms.
    #[serde(default)]
    pub anti_christian: Vec<String>,
    /// Explicit content terms.
    #[serde(default)]
    pub nudity: Vec<String>,
}

impl LexiconSource {
    /// Returns the built-in term lists.
    #[must_use]
    pub fn builtin() -> Self {
        let owned = |terms: &[&str]| terms.iter().map(|t| (*t).to_string()).collect();
        Self {
            profanity: owned(PROFANITY_TERMS),
            hate_speech: owned(HATE_SPEECH_TERMS),
            anti_christian: owned(TARGETED_DISPARAGEMENT_TERMS),
            nudity: owned(EXPLICIT_CONTENT_TERMS),
        }
    }

    /// Parses term lists from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads term lists from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Returns the raw terms for a category.
    #[must_use]
    pub fn terms(&self, category: Category) -> &[String] {
        match category {
            Category::Profanity => &self.profanity,
            Category::HateSpeech => &self.hate_speech,
            Category::TargetedDisparagement => &self.anti_christian,
            Category::ExplicitContent => &self.nudity,
        }
    }
}

/// An immutable, compiled lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    // Indexed by `Category::index`.
    sets: [TermSet; 4],
}

impl Lexicon {
    /// Returns the process-wide built-in lexicon.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Creates a lexicon with no terms.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sets: [
                TermSet::empty(),
                TermSet::empty(),
                TermSet::empty(),
                TermSet::empty(),
            ],
        }
    }

    /// Compiles a lexicon from term lists.
    ///
    /// Terms are trimmed and duplicates within a category are dropped,
    /// keeping the first occurrence. Blank terms are rejected.
    pub fn from_source(source: &LexiconSource) -> Result<Self> {
        let mut sets = Self::empty().sets;
        for category in Category::ALL {
            sets[category.index()] = compile_terms(category, source.terms(category))?;
        }
        Ok(Self { sets })
    }

    /// Reads and compiles a lexicon from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_source(&LexiconSource::from_file(path)?)
    }

    /// Returns the compiled term set for a category.
    #[must_use]
    pub fn term_set(&self, category: Category) -> &TermSet {
        &self.sets[category.index()]
    }

    /// Returns the terms for a category, in lexicon order.
    #[must_use]
    pub fn terms(&self, category: Category) -> &[String] {
        self.term_set(category).terms()
    }

    /// Returns the category a term belongs to, if any.
    #[must_use]
    pub fn category_of(&self, term: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| self.terms(*c).iter().any(|t| t.eq_ignore_ascii_case(term)))
    }

    /// Returns the total number of terms across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.iter().map(TermSet::len).sum()
    }

    /// Returns true if no category holds any term.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(TermSet::is_empty)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn compile_terms(category: Category, raw: &[String]) -> Result<TermSet> {
    let mut seen = HashSet::new();
    let mut terms = Vec::with_capacity(raw.len());

    for term in raw {
        let term = term.trim();
        if term.is_empty() {
            return Err(ModerationError::EmptyTerm {
                category: category.to_string(),
            });
        }
        if seen.insert(term.to_lowercase()) {
            terms.push(term.to_string());
        }
    }

    TermSet::new(terms)
}
