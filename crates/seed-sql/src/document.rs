//! Seed script assembly.
//!
//! ```text
//! SeedDocument::build   collecting: every INSERT built, ids assigned
//!   → render            rendering:  header, BEGIN, sections, COMMIT, footer
//!   → write_to          done:       one full write of the output file
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use seed_core::SeedDataset;
use seed_core::enums::CleanupMode;
use seed_core::ids::IdGenerator;
use serde::Serialize;

use crate::emit::Emitter;
use crate::error::SqlError;
use crate::statement::InsertStatement;
use crate::tables;

const RULE: &str = "-- ===================================";

/// Everything in the script that is not a record.
#[derive(Debug, Clone)]
pub struct DocumentHeader {
    pub title: String,
    /// Where the records came from, e.g. a file path or `built-in dataset`.
    pub source: String,
    pub generated_at: NaiveDateTime,
    pub cleanup: CleanupMode,
}

/// A titled group of statements. Each block is followed by a blank line.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: &'static str,
    pub blocks: Vec<Vec<InsertStatement>>,
}

#[derive(Debug, Clone)]
pub struct SeedDocument {
    header: DocumentHeader,
    sections: Vec<Section>,
}

impl SeedDocument {
    /// Build every statement for `dataset`, drawing ids from `ids`.
    ///
    /// # Errors
    ///
    /// Returns the first [`SqlError`] raised by a row builder; nothing is
    /// rendered in that case.
    pub fn build(
        dataset: &SeedDataset,
        header: DocumentHeader,
        ids: &dyn IdGenerator,
    ) -> Result<Self, SqlError> {
        let emitter = Emitter::new(ids);
        let sections = vec![
            Section {
                title: "STYLE CARDS",
                blocks: vec![emitter.styles(&dataset.styles)?],
            },
            Section {
                title: "GLOSSARY TERMS",
                blocks: vec![emitter.glossary(&dataset.glossary)?],
            },
            Section {
                title: "DASHBOARD STAGES",
                blocks: emitter.stages(&dataset.stages)?,
            },
            Section {
                title: "PROMPTS",
                blocks: vec![emitter.prompts(&dataset.prompts)?],
            },
            Section {
                title: "COURSE MODULES & LESSONS",
                blocks: emitter.modules(&dataset.modules)?,
            },
        ];

        for section in &sections {
            tracing::debug!(
                section = section.title,
                statements = section.blocks.iter().map(Vec::len).sum::<usize>(),
                "emitted section"
            );
        }

        Ok(Self { header, sections })
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All statements in emission order.
    pub fn statements(&self) -> impl Iterator<Item = &InsertStatement> {
        self.sections
            .iter()
            .flat_map(|section| section.blocks.iter().flatten())
    }

    /// Number of `INSERT`s per table name.
    #[must_use]
    pub fn statement_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for stmt in self.statements() {
            *counts.entry(stmt.table().name).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn render(&self) -> RenderedSeed {
        let mut lines = Vec::new();
        let header = &self.header;

        lines.push(RULE.to_string());
        lines.push(format!("-- {}", header.title));
        lines.push(format!("-- Generated from {}", header.source));
        lines.push(format!(
            "-- Date: {}",
            header.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        lines.push(RULE.to_string());
        lines.push(String::new());

        if header.cleanup == CleanupMode::Comment {
            lines.push("-- Clear existing data (optional)".to_string());
            lines.push(format!("-- {}", truncate_statement()));
            lines.push(String::new());
        }

        lines.push("BEGIN;".to_string());
        lines.push(String::new());

        if header.cleanup == CleanupMode::Truncate {
            lines.push(truncate_statement());
            lines.push(String::new());
        }

        for section in &self.sections {
            lines.push(RULE.to_string());
            lines.push(format!("-- {}", section.title));
            lines.push(RULE.to_string());
            lines.push(String::new());
            for block in &section.blocks {
                for stmt in block {
                    lines.extend(stmt.lines());
                }
                lines.push(String::new());
            }
        }

        lines.push("COMMIT;".to_string());
        lines.push(String::new());
        lines.push(RULE.to_string());
        lines.push("-- Seed script complete!".to_string());
        lines.push(RULE.to_string());

        RenderedSeed {
            lines,
            statements: self.statement_counts(),
        }
    }
}

fn truncate_statement() -> String {
    let names: Vec<&str> = tables::ALL.iter().map(|t| t.name).collect();
    format!("TRUNCATE TABLE {} CASCADE;", names.join(", "))
}

/// The finished script text, ready to write.
#[derive(Debug, Clone)]
pub struct RenderedSeed {
    lines: Vec<String>,
    statements: BTreeMap<&'static str, usize>,
}

impl RenderedSeed {
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines in the written file. Text values with embedded newlines span
    /// several lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text().lines().count()
    }

    /// The script with a trailing newline.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Write the whole script to `path` in one call, creating parent
    /// directories. An existing file is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::OutputUnwritable`] if the directory or file cannot
    /// be created or written.
    pub fn write_to(&self, path: &Path) -> Result<WriteSummary, SqlError> {
        let unwritable = |source| SqlError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(unwritable)?;
        }
        fs::write(path, self.text()).map_err(unwritable)?;

        let summary = WriteSummary {
            output_path: path.to_path_buf(),
            line_count: self.line_count(),
            statements: self.statements.clone(),
        };
        tracing::info!(
            path = %path.display(),
            lines = summary.line_count,
            "wrote seed script"
        );
        Ok(summary)
    }
}

/// What a successful run reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    pub output_path: PathBuf,
    pub line_count: usize,
    pub statements: BTreeMap<&'static str, usize>,
}

impl WriteSummary {
    #[must_use]
    pub fn total_statements(&self) -> usize {
        self.statements.values().sum()
    }
}
