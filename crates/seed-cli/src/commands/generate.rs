use anyhow::Context;
use chrono::Local;
use seed_config::SeedConfig;
use seed_core::ids::UuidIds;
use seed_sql::{DatasetSource, DocumentHeader, SeedDocument, WriteSummary};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::output;

/// Handle `vseed generate`.
pub fn handle(args: &GenerateArgs, config: SeedConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = apply_overrides(config, args)?;
    let summary = run(&config)?;
    output::output_summary(&summary, flags.format)
}

/// Command-line flags win over every config layer.
fn apply_overrides(mut config: SeedConfig, args: &GenerateArgs) -> anyhow::Result<SeedConfig> {
    if let Some(input) = &args.input {
        config.paths.input = Some(input.clone());
    }
    if let Some(output) = &args.output {
        config.paths.output.clone_from(output);
    }
    if let Some(cleanup) = args.cleanup {
        config.document.cleanup = cleanup;
    }
    if let Some(title) = &args.title {
        config.document.title.clone_from(title);
    }
    config.validate()?;
    Ok(config)
}

fn run(config: &SeedConfig) -> anyhow::Result<WriteSummary> {
    let source = DatasetSource::from_input(config.paths.input.as_deref());
    let dataset = source.load().context("failed to load dataset")?;
    if dataset.is_empty() {
        tracing::warn!(source = %source.label(), "dataset has no records; script will only open and commit a transaction");
    }

    let header = DocumentHeader {
        title: config.document.title.clone(),
        source: source.label(),
        generated_at: Local::now().naive_local(),
        cleanup: config.document.cleanup,
    };
    let document =
        SeedDocument::build(&dataset, header, &UuidIds).context("failed to build seed statements")?;

    document
        .render()
        .write_to(&config.paths.output)
        .context("failed to write seed script")
}
