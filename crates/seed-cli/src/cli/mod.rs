use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vseed` binary.
#[derive(Debug, Parser)]
#[command(
    name = "vseed",
    version,
    about = "vseed - render LMS content into a PostgreSQL seed script"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ./vseed.toml
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use seed_core::enums::CleanupMode;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_generate() {
        let cli = Cli::try_parse_from(["vseed"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Commands::Generate(_)));
    }

    #[test]
    fn generate_overrides_parse() {
        let cli = Cli::try_parse_from([
            "vseed",
            "generate",
            "--input",
            "data/content.toml",
            "--output",
            "out.sql",
            "--cleanup",
            "truncate",
        ])
        .expect("cli should parse");

        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.input, Some(PathBuf::from("data/content.toml")));
        assert_eq!(args.output, Some(PathBuf::from("out.sql")));
        assert_eq!(args.cleanup, Some(CleanupMode::Truncate));
    }

    #[test]
    fn unknown_cleanup_is_rejected() {
        let parsed = Cli::try_parse_from(["vseed", "generate", "--cleanup", "drop"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["vseed", "dataset", "--format", "json", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Dataset(_))));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["vseed", "--config", "ci.toml", "generate"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.config, Some(PathBuf::from("ci.toml")));
        assert_eq!(flags.format, OutputFormat::Text);
    }
}
