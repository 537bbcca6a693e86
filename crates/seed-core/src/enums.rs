//! Enums shared between configuration and rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// How the seed script treats rows that already exist in the target tables.
///
/// ```text
/// comment  → "-- TRUNCATE TABLE ... CASCADE;" in the preamble (opt-in by hand)
/// truncate → live "TRUNCATE TABLE ... CASCADE;" as the first statement after BEGIN
/// skip     → no cleanup line at all
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CleanupMode {
    #[default]
    Comment,
    Truncate,
    Skip,
}

impl CleanupMode {
    pub const ALL: [Self; 3] = [Self::Comment, Self::Truncate, Self::Skip];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Truncate => "truncate",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for CleanupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CleanupMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown cleanup mode '{s}' (expected comment, truncate or skip)"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("comment", CleanupMode::Comment)]
    #[case("TRUNCATE", CleanupMode::Truncate)]
    #[case(" skip ", CleanupMode::Skip)]
    fn parses_known_modes(#[case] input: &str, #[case] expected: CleanupMode) {
        assert_eq!(input.parse::<CleanupMode>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "drop".parse::<CleanupMode>().unwrap_err();
        assert!(err.to_string().contains("unknown cleanup mode 'drop'"));
    }

    #[test]
    fn default_is_comment() {
        assert_eq!(CleanupMode::default(), CleanupMode::Comment);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&CleanupMode::Truncate).unwrap();
        assert_eq!(json, "\"truncate\"");
    }
}
