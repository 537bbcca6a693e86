//! The full set of records rendered into one seed script.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CourseModule, DashboardStage, GlossaryTerm, Prompt, StyleCard};
use crate::errors::CoreError;

/// Every record family in emission order.
///
/// Dataset files use one array of tables per family (`[[styles]]`,
/// `[[glossary]]`, `[[stages]]`, `[[prompts]]`, `[[modules]]`). Missing
/// families are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedDataset {
    #[serde(default)]
    pub styles: Vec<StyleCard>,
    #[serde(default)]
    pub glossary: Vec<GlossaryTerm>,
    #[serde(default)]
    pub stages: Vec<DashboardStage>,
    #[serde(default)]
    pub prompts: Vec<Prompt>,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
}

/// Row counts per record type, children included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub styles: usize,
    pub glossary: usize,
    pub stages: usize,
    pub stage_tasks: usize,
    pub prompts: usize,
    pub modules: usize,
    pub lessons: usize,
}

impl RecordCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.styles
            + self.glossary
            + self.stages
            + self.stage_tasks
            + self.prompts
            + self.modules
            + self.lessons
    }
}

impl SeedDataset {
    /// Parse a dataset from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DatasetParse`] if the text is not valid TOML or a
    /// record is missing a required field.
    pub fn from_toml_str(text: &str) -> Result<Self, CoreError> {
        let dataset: Self = toml::from_str(text)?;
        tracing::debug!(rows = dataset.counts().total(), "parsed dataset");
        Ok(dataset)
    }

    /// Encode the dataset as TOML, the same shape [`Self::from_toml_str`] reads.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DatasetEncode`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, CoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn counts(&self) -> RecordCounts {
        RecordCounts {
            styles: self.styles.len(),
            glossary: self.glossary.len(),
            stages: self.stages.len(),
            stage_tasks: self.stages.iter().map(|s| s.tasks.len()).sum(),
            prompts: self.prompts.len(),
            modules: self.modules.len(),
            lessons: self.modules.iter().map(|m| m.lessons.len()).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
[[glossary]]
term = "Верстка"
definition = "Создание HTML/CSS структуры сайта."
category = "Код"

[[stages]]
title = "Подготовка"
subtitle = "Настрой свой рабочий процесс"
tasks = ["Установить VS Code", "Создать аккаунт на GitHub"]

[[modules]]
title = "Записанные уроки"
subtitle = "Основы вайб-кодинга"

[[modules.lessons]]
title = "Введение"
description = "Знакомство"
duration_minutes = 15
"#;

    #[test]
    fn parses_partial_dataset() {
        let dataset = SeedDataset::from_toml_str(SAMPLE).unwrap();

        assert!(dataset.styles.is_empty());
        assert_eq!(dataset.glossary[0].slang, None);
        assert_eq!(dataset.stages[0].tasks[1].title, "Создать аккаунт на GitHub");
        assert_eq!(dataset.modules[0].lessons[0].duration_minutes, 15);
        assert_eq!(dataset.modules[0].lessons[0].video_url, None);
    }

    #[test]
    fn counts_include_children() {
        let dataset = SeedDataset::from_toml_str(SAMPLE).unwrap();
        let counts = dataset.counts();

        assert_eq!(counts.stages, 1);
        assert_eq!(counts.stage_tasks, 2);
        assert_eq!(counts.modules, 1);
        assert_eq!(counts.lessons, 1);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn missing_required_field_is_parse_error() {
        let err = SeedDataset::from_toml_str("[[glossary]]\nterm = \"API\"\n").unwrap_err();
        assert!(matches!(err, CoreError::DatasetParse(_)));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let text = r#"
[[modules]]
title = "m"
subtitle = "s"

[[modules.lessons]]
title = "l"
description = "d"
duration_minutes = -5
"#;
        assert!(SeedDataset::from_toml_str(text).is_err());
    }

    #[test]
    fn empty_text_is_empty_dataset() {
        let dataset = SeedDataset::from_toml_str("").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset, SeedDataset::default());
    }
}
