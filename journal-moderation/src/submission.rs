//! The pre-persistence gate run on every post submission.
//!
//! Checks run in a fixed order: free-text length limit, blank prayer
//! point removal, then lexical moderation. The caller's record is never
//! modified.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::aggregator::ModerationResult;
use crate::config::ModerationConfig;
use crate::errors::Result;
use crate::evaluator::ContentEvaluator;
use crate::events::{EventSink, ModerationEvent, NoOpEventSink, ReviewOutcome, REVIEW_EVENT_TYPE};
use crate::lexicon::Lexicon;
use crate::message::{describe_violations, length_limit_message};
use crate::record::PostFields;

/// The decision for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The submission may be persisted.
    Accepted,
    /// One or more free-text fields exceed the character limit.
    TooLong {
        /// Names of the oversized fields.
        fields: Vec<String>,
        /// Message for the author.
        message: String,
    },
    /// The submission contains flagged content.
    Rejected {
        /// The moderation result.
        result: ModerationResult,
        /// Message for the author.
        message: String,
    },
}

impl Verdict {
    /// Returns true if the submission may be persisted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns the author-facing message, empty when accepted.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted => "",
            Self::TooLong { message, .. } | Self::Rejected { message, .. } => message,
        }
    }

    /// Returns the outcome tag of this verdict.
    #[must_use]
    pub const fn outcome(&self) -> ReviewOutcome {
        match self {
            Self::Accepted => ReviewOutcome::Accepted,
            Self::TooLong { .. } => ReviewOutcome::TooLong,
            Self::Rejected { .. } => ReviewOutcome::Rejected,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            _ => f.write_str(self.message()),
        }
    }
}

/// Reviews post submissions before they are stored.
pub struct SubmissionGate {
    lexicon: Cow<'static, Lexicon>,
    config: ModerationConfig,
    sink: Arc<dyn EventSink>,
}

impl fmt::Debug for SubmissionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionGate")
            .field("terms", &self.lexicon.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionGate {
    /// Creates a gate with the built-in lexicon and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: Cow::Borrowed(Lexicon::builtin()),
            config: ModerationConfig::default(),
            sink: Arc::new(NoOpEventSink),
        }
    }

    /// Creates a gate from configuration, loading its lexicon.
    pub fn from_config(config: ModerationConfig) -> Result<Self> {
        let lexicon = match config.lexicon_path {
            Some(_) => Cow::Owned(config.load_lexicon()?),
            None => Cow::Borrowed(Lexicon::builtin()),
        };
        Ok(Self { lexicon, config, sink: Arc::new(NoOpEventSink) })
    }

    /// Replaces the lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Cow::Owned(lexicon);
        self
    }

    /// Sets the event sink receiving review events.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the gate configuration.
    #[must_use]
    pub const fn config(&self) -> &ModerationConfig {
        &self.config
    }

    /// Returns the evaluator backing this gate.
    #[must_use]
    pub fn evaluator(&self) -> ContentEvaluator<'_> {
        ContentEvaluator::new(&self.lexicon)
    }

    /// Reviews a submission.
    pub fn review(&self, post: &PostFields) -> Verdict {
        let verdict = self.decide(post);

        let mut event = ModerationEvent::new(verdict.outcome());
        match &verdict {
            Verdict::Accepted => {}
            Verdict::TooLong { fields, .. } => {
                event = event.with_oversized_fields(fields.clone());
            }
            Verdict::Rejected { result, .. } => {
                event = event.with_violations(result.categories(), result.term_count());
            }
        }
        info!(
            review_id = %event.review_id,
            outcome = ?event.outcome,
            categories = event.categories.len(),
            "Submission reviewed"
        );
        self.sink.try_emit(REVIEW_EVENT_TYPE, Some(event.to_payload()));

        verdict
    }

    fn decide(&self, post: &PostFields) -> Verdict {
        let oversized = self.oversized_fields(post);
        if !oversized.is_empty() {
            debug!(fields = ?oversized, limit = self.config.max_field_chars, "Fields over limit");
            return Verdict::TooLong {
                fields: oversized,
                message: length_limit_message(self.config.max_field_chars),
            };
        }

        let post = if self.config.drop_blank_prayer_points {
            Cow::Owned(post.without_blank_prayer_points())
        } else {
            Cow::Borrowed(post)
        };

        let result = self.evaluator().evaluate_record(&*post);
        if result.is_clean() {
            Verdict::Accepted
        } else {
            let message = describe_violations(&result);
            Verdict::Rejected { result, message }
        }
    }

    /// Lengths are Unicode scalar counts, not UTF-16 code units, so
    /// characters outside the BMP count once.
    fn oversized_fields(&self, post: &PostFields) -> Vec<String> {
        let max = self.config.max_field_chars;
        post.body_fields()
            .into_iter()
            .filter(|(_, value)| value.is_some_and(|text| text.chars().count() > max))
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
