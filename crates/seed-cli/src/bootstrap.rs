use anyhow::Context;
use seed_config::SeedConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SeedConfig> {
    SeedConfig::load_with_dotenv(flags.config.as_deref()).with_context(|| match &flags.config {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to load configuration".to_string(),
    })
}
