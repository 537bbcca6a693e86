use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reusable prompt template from the prompt library.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Hint shown to the student on how to fill in the template.
    pub usage: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
