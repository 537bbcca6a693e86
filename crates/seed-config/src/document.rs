//! Seed script presentation settings.

use seed_core::enums::CleanupMode;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_title() -> String {
    "VIBES LMS - Seed Data Script".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentConfig {
    /// Title line of the header comment block.
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub cleanup: CleanupMode,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            cleanup: CleanupMode::default(),
        }
    }
}

impl DocumentConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.title.contains(['\n', '\r']) {
            return Err(ConfigError::InvalidValue {
                field: "document.title".to_string(),
                reason: "must be a single line (it is rendered inside a SQL comment)".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DocumentConfig::default();
        assert_eq!(config.title, "VIBES LMS - Seed Data Script");
        assert_eq!(config.cleanup, CleanupMode::Comment);
    }

    #[test]
    fn multiline_title_is_invalid() {
        let config = DocumentConfig {
            title: "line one\nDROP TABLE lessons;".to_string(),
            cleanup: CleanupMode::Comment,
        };
        assert!(config.validate().is_err());
    }
}
