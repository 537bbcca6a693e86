use std::fmt::Write as _;

use seed_sql::WriteSummary;

use crate::cli::OutputFormat;

/// Render a run summary in the requested format.
pub fn render_summary(summary: &WriteSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => {
            let mut text = String::new();
            writeln!(
                text,
                "SQL seed script generated: {}",
                summary.output_path.display()
            )?;
            write!(
                text,
                "Generated {} lines of SQL ({} INSERT statements)",
                summary.line_count,
                summary.total_statements()
            )?;
            Ok(text)
        }
    }
}

/// Print a run summary on stdout.
pub fn output_summary(summary: &WriteSummary, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_summary(summary, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn summary() -> WriteSummary {
        WriteSummary {
            output_path: PathBuf::from("database/seed_from_data.sql"),
            line_count: 96,
            statements: BTreeMap::from([("lessons", 2), ("style_cards", 5)]),
        }
    }

    #[test]
    fn text_summary_names_path_and_lines() {
        let text = render_summary(&summary(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "SQL seed script generated: database/seed_from_data.sql\n\
             Generated 96 lines of SQL (7 INSERT statements)"
        );
    }

    #[test]
    fn json_summary_is_structured() {
        let text = render_summary(&summary(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["line_count"], 96);
        assert_eq!(value["statements"]["style_cards"], 5);
        assert_eq!(value["output_path"], "database/seed_from_data.sql");
    }
}
