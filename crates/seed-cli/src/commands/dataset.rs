use std::path::Path;

use anyhow::Context;
use seed_core::{SeedDataset, builtin};

use crate::cli::root_commands::DatasetArgs;

/// Handle `vseed dataset`.
pub fn handle(args: &DatasetArgs) -> anyhow::Result<()> {
    let rendered = render(args.schema)?;
    match &args.out {
        Some(path) => write(path, &rendered),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn render(schema: bool) -> anyhow::Result<String> {
    if schema {
        let schema = schemars::schema_for!(SeedDataset);
        let mut text = serde_json::to_string_pretty(&schema)?;
        text.push('\n');
        return Ok(text);
    }
    builtin::dataset()
        .to_toml_string()
        .context("failed to encode built-in dataset")
}

fn write(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote dataset");
    Ok(())
}
