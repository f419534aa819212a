//! # Journal Moderation
//!
//! Lexical content moderation for journal post submissions.
//!
//! The crate classifies the text fields of a submission against four
//! fixed categories of disallowed content and describes the outcome for
//! the author:
//!
//! - **Lexicon**: compiled-in (or file-supplied) word and phrase lists
//! - **Matching**: case-insensitive whole-word and phrase matching
//! - **Aggregation**: per-record merging and deduplication of findings
//! - **Messages**: one sentence per violated category
//! - **Submission gate**: length limits, moderation and review events
//!
//! ## Quick Start
//!
//! ```rust
//! use journal_moderation::prelude::*;
//!
//! let post = PostFields::new()
//!     .with_word("I was so damn happy")
//!     .with_prayer_point("pray for my family");
//!
//! let result = evaluate_record(&post);
//! assert!(!result.is_clean());
//! assert_eq!(
//!     describe_violations(&result),
//!     "Your post contains profanity or cursing. \
//!      Please revise your post to maintain a positive, uplifting environment."
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod aggregator;
pub mod category;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod events;
pub mod lexicon;
pub mod matcher;
pub mod message;
pub mod observability;
pub mod record;
pub mod submission;
pub mod testing;

#[cfg(test)]
mod aggregator_tests;

pub use aggregator::{evaluate_record, CategoryViolation, ModerationResult};
pub use category::Category;
pub use errors::{ModerationError, Result};
pub use evaluator::{evaluate_text, ContentEvaluator};
pub use lexicon::Lexicon;
pub use message::describe_violations;
pub use record::{DynamicRecord, FieldValue, Moderable, PostFields};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregator::{evaluate_record, CategoryViolation, ModerationResult};
    pub use crate::category::Category;
    pub use crate::config::ModerationConfig;
    pub use crate::errors::{ModerationError, Result};
    pub use crate::evaluator::{evaluate_text, ContentEvaluator};
    pub use crate::events::{EventSink, LoggingEventSink, ModerationEvent, NoOpEventSink};
    pub use crate::lexicon::{Lexicon, LexiconSource};
    pub use crate::matcher::{find_matches, TermSet};
    pub use crate::message::describe_violations;
    pub use crate::record::{DynamicRecord, FieldValue, Moderable, PostFields};
    pub use crate::submission::{SubmissionGate, Verdict};
}
