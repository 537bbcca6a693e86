//! Cross-cutting error types for vseed.
//!
//! SQL rendering and I/O errors live in `seed-sql`; a unified error is left to
//! `seed-cli`, where everything converges into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The dataset file is not valid TOML or does not match the record shapes.
    #[error("Failed to parse dataset: {0}")]
    DatasetParse(#[from] toml::de::Error),

    /// The dataset could not be encoded back to TOML.
    #[error("Failed to encode dataset: {0}")]
    DatasetEncode(#[from] toml::ser::Error),

    /// A value failed validation (unknown enum variant, bad shape).
    #[error("Validation error: {0}")]
    Validation(String),
}
