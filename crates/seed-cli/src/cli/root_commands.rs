use std::path::PathBuf;

use clap::{Args, Subcommand};
use seed_core::enums::CleanupMode;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the dataset into a seed script (the default command)
    Generate(GenerateArgs),
    /// Print the built-in dataset as TOML, or the dataset file JSON Schema
    Dataset(DatasetArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate(GenerateArgs::default())
    }
}

/// Overrides for the `[paths]` and `[document]` config sections.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// TOML dataset to render instead of the built-in content
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination of the seed script
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// What to do with existing rows: comment, truncate, skip
    #[arg(long)]
    pub cleanup: Option<CleanupMode>,

    /// Title line in the script header
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct DatasetArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Emit the JSON Schema of the dataset file format instead of data
    #[arg(long)]
    pub schema: bool,
}
