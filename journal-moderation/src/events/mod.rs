//! Event sinks for moderation observability.

mod review;
mod sink;

pub use review::{ModerationEvent, ReviewOutcome, REVIEW_EVENT_TYPE};
pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
