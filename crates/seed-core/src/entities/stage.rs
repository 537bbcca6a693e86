use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An onboarding stage on the student dashboard. Task order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStage {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub tasks: Vec<StageTask>,
}

/// A checklist item inside a [`DashboardStage`].
///
/// Stored as a bare string in dataset files: `tasks = ["Install VS Code", ...]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct StageTask {
    pub title: String,
}

impl From<&str> for StageTask {
    fn from(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}
