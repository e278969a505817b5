use serde::{Deserialize, Serialize};

/// A project directory from the projects tree.
///
/// Serialized with the field names the gallery expects (`primarie`, `secondarie`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(rename = "primarie")]
    pub primary_images: Vec<String>,
    #[serde(rename = "secondarie")]
    pub secondary_images: Vec<String>,
}

impl Project {
    pub fn has_images(&self) -> bool {
        !self.primary_images.is_empty() || !self.secondary_images.is_empty()
    }
}
