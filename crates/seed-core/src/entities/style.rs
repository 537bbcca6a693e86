use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A visual style preset from the style gallery.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StyleCard {
    pub name: String,
    /// Tailwind gradient classes, used as a background fallback.
    pub gradient: String,
    pub image_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub prompt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
}
