//! Human-readable rejection messages.

use crate::aggregator::ModerationResult;

/// Closing sentence appended to every rejection message.
pub const REVISE_SENTENCE: &str =
    "Please revise your post to maintain a positive, uplifting environment";

/// Message shown when a free-text field exceeds the length limit.
#[must_use]
pub fn length_limit_message(max_chars: usize) -> String {
    format!("One or more fields exceed the {max_chars} character limit")
}

/// Describes a moderation result as a single paragraph.
///
/// Clean results produce an empty string. Otherwise there is one
/// sentence per violated category followed by [`REVISE_SENTENCE`].
///
/// ```
/// use journal_moderation::{describe_violations, evaluate_record, PostFields};
///
/// let result = evaluate_record(&PostFields::new().with_word("so damn tired"));
/// assert_eq!(
///     describe_violations(&result),
///     "Your post contains profanity or cursing. \
///      Please revise your post to maintain a positive, uplifting environment."
/// );
/// ```
#[must_use]
pub fn describe_violations(result: &ModerationResult) -> String {
    if result.is_clean() {
        return String::new();
    }

    let mut sentences: Vec<&str> = result
        .violations()
        .iter()
        .map(|v| v.category().description())
        .collect();
    sentences.push(REVISE_SENTENCE);

    let mut message = sentences.join(". ");
    message.push('.');
    message
}
