//! # seed-config
//!
//! Layered configuration loading for vseed using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VSEED_*` prefix, `__` as separator)
//! 2. An explicit config file, or `./vseed.toml` when present
//! 3. User-level `~/.config/vseed/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags sit above all of these; `seed-cli` applies them on the
//! extracted [`SeedConfig`].
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VSEED_PATHS__OUTPUT` -> `paths.output`,
//! `VSEED_DOCUMENT__CLEANUP` -> `document.cleanup`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use seed_config::SeedConfig;
//!
//! let config = SeedConfig::load_with_dotenv(None).expect("config");
//! println!("writing to {}", config.paths.output.display());
//! ```

mod document;
mod error;
mod paths;

pub use document::DocumentConfig;
pub use error::ConfigError;
pub use paths::PathsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local config file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "vseed.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

impl SeedConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `config_file` is given but absent,
    /// or another [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_file.filter(|p| !p.is_file()) {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let config: Self = Self::figment(config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load(config_file)
    }

    /// Build the figment provider chain.
    ///
    /// An explicit `config_file` replaces the `./vseed.toml` lookup.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        match config_file {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        figment.merge(Env::prefixed("VSEED_").split("__"))
    }

    /// Reject values that would only fail later, mid-render.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.paths.validate()?;
        self.document.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vseed").join("config.toml"))
    }
}
