//! Wide event describing one submission review.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;

/// Event type used for review events.
pub const REVIEW_EVENT_TYPE: &str = "moderation.review";

/// Outcome of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    /// The submission passed every check.
    Accepted,
    /// A free-text field exceeded the length limit.
    TooLong,
    /// At least one category was violated.
    Rejected,
}

/// Payload emitted after each review.
///
/// Carries categories and counts only. The submitted text and matched
/// terms never leave the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationEvent {
    /// Unique identifier of the review.
    pub review_id: Uuid,
    /// RFC3339 UTC timestamp of the review.
    pub reviewed_at: String,
    /// Review outcome.
    pub outcome: ReviewOutcome,
    /// Violated categories, in evaluation order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Number of distinct matched terms.
    #[serde(default)]
    pub term_count: usize,
    /// Fields that exceeded the length limit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oversized_fields: Vec<String>,
}

impl ModerationEvent {
    /// Creates an event stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(outcome: ReviewOutcome) -> Self {
        Self {
            review_id: Uuid::new_v4(),
            reviewed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            outcome,
            categories: Vec::new(),
            term_count: 0,
            oversized_fields: Vec::new(),
        }
    }

    /// Sets the violated categories and term count.
    #[must_use]
    pub fn with_violations(mut self, categories: Vec<Category>, term_count: usize) -> Self {
        self.categories = categories;
        self.term_count = term_count;
        self
    }

    /// Sets the oversized fields.
    #[must_use]
    pub fn with_oversized_fields(mut self, fields: Vec<String>) -> Self {
        self.oversized_fields = fields;
        self
    }

    /// Converts the event to its JSON payload.
    #[must_use]
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payload() {
        let event = ModerationEvent::new(ReviewOutcome::Rejected)
            .with_violations(vec![Category::Profanity, Category::ExplicitContent], 3);
        let payload = event.to_payload();

        assert_eq!(payload["outcome"], "rejected");
        assert_eq!(payload["categories"], serde_json::json!(["profanity", "nudity"]));
        assert_eq!(payload["term_count"], 3);
        assert!(payload.get("oversized_fields").is_none());
        assert_eq!(payload["review_id"], event.review_id.to_string());
    }

    #[test]
    fn test_event_timestamp_is_utc() {
        let event = ModerationEvent::new(ReviewOutcome::Accepted);
        assert!(event.reviewed_at.contains('T'));
        assert!(event.reviewed_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&event.reviewed_at).is_ok());
    }

    #[test]
    fn test_review_ids_are_unique() {
        let a = ModerationEvent::new(ReviewOutcome::Accepted);
        let b = ModerationEvent::new(ReviewOutcome::Accepted);
        assert_ne!(a.review_id, b.review_id);
        assert_eq!(a.review_id.get_version_num(), 4);
    }

    #[test]
    fn test_oversized_fields_serialized_when_present() {
        let event = ModerationEvent::new(ReviewOutcome::TooLong)
            .with_oversized_fields(vec!["myWord".to_string()]);
        assert_eq!(event.to_payload()["oversized_fields"], serde_json::json!(["myWord"]));
    }
}
