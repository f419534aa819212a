//! Testing utilities for code that consumes moderation results.

mod assertions;

pub use assertions::{assert_clean, assert_flagged, assert_no_category, assert_violation_terms};
