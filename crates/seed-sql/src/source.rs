//! Where the dataset comes from.

use std::fs;
use std::path::{Path, PathBuf};

use seed_core::{SeedDataset, builtin};

use crate::error::SqlError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// The content compiled into the binary.
    Builtin,
    /// A TOML dataset file.
    File(PathBuf),
}

impl DatasetSource {
    #[must_use]
    pub fn from_input(input: Option<&Path>) -> Self {
        input.map_or(Self::Builtin, |path| Self::File(path.to_path_buf()))
    }

    /// Human-readable origin for the script header.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Builtin => "built-in dataset".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the dataset. A file source is read once, in full.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InputMissing`] if the file cannot be read, or
    /// [`SqlError::Core`] if it is not a valid dataset.
    pub fn load(&self) -> Result<SeedDataset, SqlError> {
        match self {
            Self::Builtin => Ok(builtin::dataset()),
            Self::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| SqlError::InputMissing {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), bytes = text.len(), "read dataset file");
                Ok(SeedDataset::from_toml_str(&text)?)
            }
        }
    }
}
