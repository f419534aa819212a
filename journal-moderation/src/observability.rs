//! Logging setup for hosts embedding the moderation crate.

use tracing_subscriber::{fmt, EnvFilter};

use crate::errors::{ModerationError, Result};

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter` when set. Fails if a
/// global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| ModerationError::Subscriber(e.to_string()))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ModerationError::Subscriber(e.to_string()))
}

/// Installs a global subscriber emitting JSON lines.
pub fn init_json_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| ModerationError::Subscriber(e.to_string()))?;

    fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ModerationError::Subscriber(e.to_string()))
}
