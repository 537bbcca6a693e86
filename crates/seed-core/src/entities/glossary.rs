use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A glossary entry. `slang` is the colloquial synonym, when there is one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GlossaryTerm {
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slang: Option<String>,
    pub definition: String,
    pub category: String,
}
