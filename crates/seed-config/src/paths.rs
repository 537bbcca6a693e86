//! Input and output locations.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::error::ConfigError;

fn default_output() -> PathBuf {
    PathBuf::from("database/seed_from_data.sql")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// TOML dataset to render. `None` renders the built-in dataset.
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Where the seed script is written. Overwritten on every run.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: default_output(),
        }
    }
}

impl PathsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "paths.output".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if let Some(input) = &self.input {
            if input.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "paths.input".to_string(),
                    reason: "must not be empty; omit it to use the built-in dataset".to_string(),
                });
            }
            if lexical(input) == lexical(&self.output) {
                return Err(ConfigError::InvalidValue {
                    field: "paths.output".to_string(),
                    reason: "must differ from paths.input".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Drop `.` components so `./seed.toml` and `seed.toml` compare equal.
/// Symlinks and `..` are not resolved.
fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_output_equal_to_input() {
        let config = PathsConfig {
            input: Some(PathBuf::from("seed.toml")),
            output: PathBuf::from("seed.toml"),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("paths.output"));
    }

    #[test]
    fn rejects_output_equal_to_input_after_dot_prefix() {
        let config = PathsConfig {
            input: Some(PathBuf::from("./data/./seed.toml")),
            output: PathBuf::from("data/seed.toml"),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_output() {
        let config = PathsConfig {
            input: None,
            output: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
