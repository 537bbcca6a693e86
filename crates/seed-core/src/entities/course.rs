use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A course module grouping an ordered list of lessons.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseModule {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// A recorded lesson inside a [`CourseModule`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lesson {
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}
