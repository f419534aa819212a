//! Test assertions for moderation results.

use crate::aggregator::ModerationResult;
use crate::category::Category;

/// Asserts that the result is clean.
pub fn assert_clean(result: &ModerationResult) {
    assert!(
        result.is_clean() && result.violations().is_empty(),
        "Expected clean result, got violations: {:?}",
        result.violations()
    );
}

/// Asserts that the result is not clean.
pub fn assert_flagged(result: &ModerationResult) {
    assert!(
        !result.is_clean() && !result.violations().is_empty(),
        "Expected violations, but the result is clean"
    );
}

/// Asserts that a category was violated with exactly the given terms,
/// in any order.
pub fn assert_violation_terms(result: &ModerationResult, category: Category, expected: &[&str]) {
    let violation = result.violation(category).unwrap_or_else(|| {
        panic!(
            "Expected a {category} violation, got categories: {:?}",
            result.categories()
        )
    });

    let mut actual: Vec<&str> = violation.matched_terms().iter().map(String::as_str).collect();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(
        actual, expected,
        "Expected {category} terms {expected:?}, got {actual:?}"
    );
}

/// Asserts that a category was not violated.
pub fn assert_no_category(result: &ModerationResult, category: Category) {
    assert!(
        result.violation(category).is_none(),
        "Expected no {category} violation, got {:?}",
        result.violation(category)
    );
}
