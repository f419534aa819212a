//! Moderation categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ModerationError;

/// A class of disallowed content.
///
/// Serialized names match the tags already stored by the journaling
/// application, so results round-trip through its existing records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Cursing and slurs.
    #[serde(rename = "profanity")]
    Profanity,
    /// Violent or discriminatory language.
    #[serde(rename = "hate_speech")]
    HateSpeech,
    /// Content disparaging the community's faith.
    #[serde(rename = "anti_christian")]
    TargetedDisparagement,
    /// Nudity and sexually explicit terms.
    #[serde(rename = "nudity")]
    ExplicitContent,
}

impl Category {
    /// Every category, in evaluation order.
    pub const ALL: [Self; 4] = [
        Self::Profanity,
        Self::HateSpeech,
        Self::TargetedDisparagement,
        Self::ExplicitContent,
    ];

    /// Returns the wire name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Profanity => "profanity",
            Self::HateSpeech => "hate_speech",
            Self::TargetedDisparagement => "anti_christian",
            Self::ExplicitContent => "nudity",
        }
    }

    /// Returns the rejection sentence for this category, without a
    /// trailing period.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Profanity => "Your post contains profanity or cursing",
            Self::HateSpeech => "Your post contains hate speech or violent language",
            Self::TargetedDisparagement => {
                "Your post contains content that goes against Christian values"
            }
            Self::ExplicitContent => "Your post contains inappropriate or explicit content",
        }
    }

    /// Position of the category in evaluation order.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Profanity => 0,
            Self::HateSpeech => 1,
            Self::TargetedDisparagement => 2,
            Self::ExplicitContent => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModerationError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Profanity.to_string(), "profanity");
        assert_eq!(Category::HateSpeech.to_string(), "hate_speech");
        assert_eq!(Category::TargetedDisparagement.to_string(), "anti_christian");
        assert_eq!(Category::ExplicitContent.to_string(), "nudity");
    }

    #[test]
    fn test_category_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert!(Category::Profanity < Category::ExplicitContent);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("nudity".parse::<Category>().unwrap(), Category::ExplicitContent);
        assert!(matches!(
            "spam".parse::<Category>(),
            Err(ModerationError::UnknownCategory(tag)) if tag == "spam"
        ));
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&Category::HateSpeech).unwrap();
        assert_eq!(json, r#""hate_speech""#);

        let deserialized: Category = serde_json::from_str(r#""anti_christian""#).unwrap();
        assert_eq!(deserialized, Category::TargetedDisparagement);
    }
}
