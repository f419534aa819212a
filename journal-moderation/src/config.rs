//! Configuration for the submission gate.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::lexicon::Lexicon;

/// Moderation settings, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Maximum characters per free-text field.
    #[serde(default = "default_max_field_chars")]
    pub max_field_chars: usize,
    /// Optional JSON file replacing the built-in lexicon.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Whether blank prayer points are dropped before moderation.
    #[serde(default = "default_drop_blank_prayer_points")]
    pub drop_blank_prayer_points: bool,
}

fn default_max_field_chars() -> usize {
    400
}

fn default_drop_blank_prayer_points() -> bool {
    true
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            max_field_chars: default_max_field_chars(),
            lexicon_path: None,
            drop_blank_prayer_points: default_drop_blank_prayer_points(),
        }
    }
}

impl ModerationConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-field character limit.
    #[must_use]
    pub fn with_max_field_chars(mut self, max: usize) -> Self {
        self.max_field_chars = max;
        self
    }

    /// Sets the lexicon file.
    #[must_use]
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    /// Sets whether blank prayer points are dropped.
    #[must_use]
    pub fn with_drop_blank_prayer_points(mut self, drop: bool) -> Self {
        self.drop_blank_prayer_points = drop;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Loads the configured lexicon, or a copy of the built-in one.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon_path {
            Some(path) => {
                let lexicon = Lexicon::from_file(path)?;
                tracing::info!(path = %path.display(), terms = lexicon.len(), "Loaded lexicon file");
                Ok(lexicon)
            }
            None => Ok(Lexicon::builtin().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::errors::ModerationError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ModerationConfig::default();
        assert_eq!(config.max_field_chars, 400);
        assert_eq!(config.lexicon_path, None);
        assert!(config.drop_blank_prayer_points);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ModerationConfig::from_json_str(r#"{"max_field_chars": 280}"#).unwrap();
        assert_eq!(config, ModerationConfig::new().with_max_field_chars(280));
    }

    #[test]
    fn test_invalid_json() {
        let err = ModerationConfig::from_json_str("max_field_chars = 5").unwrap_err();
        assert!(matches!(err, ModerationError::Config(_)));
    }

    #[test]
    fn test_from_file_with_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon_path = dir.path().join("terms.json");
        std::fs::write(&lexicon_path, r#"{"profanity": ["heck"]}"#).unwrap();

        let config_path = dir.path().join("moderation.json");
        let config = ModerationConfig::new()
            .with_lexicon_path(&lexicon_path)
            .with_drop_blank_prayer_points(false);
        std::fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = ModerationConfig::from_file(&config_path).unwrap();
        assert_eq!(loaded, config);

        let lexicon = loaded.load_lexicon().unwrap();
        assert_eq!(lexicon.terms(Category::Profanity), &["heck".to_string()]);
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_builtin_lexicon_when_unset() {
        let lexicon = ModerationConfig::default().load_lexicon().unwrap();
        assert_eq!(lexicon.len(), Lexicon::builtin().len());
    }
}
