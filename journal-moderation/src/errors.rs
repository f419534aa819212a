//! Error types for the moderation crate.
//!
//! Only contract violations and setup failures are errors. Finding a
//! flagged term or receiving an empty field is a normal outcome encoded
//! in [`ModerationResult`](crate::ModerationResult).

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ModerationError>;

/// The main error type for moderation operations.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// A record field carried a value that is neither text, a list of
    /// text, nor null.
    #[error("Field '{field}' has unsupported value type: expected string, array of strings or null, found {found}")]
    UnsupportedValue {
        /// Name of the offending field.
        field: String,
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A category tag did not name any known category.
    #[error("Unknown moderation category: '{0}'")]
    UnknownCategory(String),

    /// A lexicon source contained a blank term.
    #[error("Lexicon category '{category}' contains an empty term")]
    EmptyTerm {
        /// Wire name of the category holding the blank term.
        category: String,
    },

    /// A lexicon term could not be compiled into a match pattern.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration or lexicon JSON could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The global tracing subscriber could not be installed.
    #[error("Subscriber error: {0}")]
    Subscriber(String),
}

impl ModerationError {
    /// Creates an unsupported value error from the offending JSON value.
    #[must_use]
    pub fn unsupported_value(field: impl Into<String>, value: &serde_json::Value) -> Self {
        Self::UnsupportedValue {
            field: field.into(),
            found: json_type_name(value),
        }
    }

    /// Returns true if this error is a caller contract violation rather
    /// than a setup failure.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::UnsupportedValue { .. })
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
