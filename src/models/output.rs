//! Persisted shapes of the two index documents.
//!
//! Field order matters: serde serializes struct fields in declaration order, and the
//! gallery diffs are easier to read when it stays fixed.

use serde::{Deserialize, Serialize};

use crate::models::{ArchiveEntry, ArchiveIndex, Project};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub src: String,
    pub folder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtRecord {
    pub src: String,
    pub content: String,
    pub folder: String,
}

/// Contents of `photo-index.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoIndex {
    pub photos: Vec<PhotoRecord>,
    pub polaroids: Vec<PhotoRecord>,
    pub thoughts: Vec<ThoughtRecord>,
}

/// Contents of `projects-index.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsIndex {
    pub projects: Vec<Project>,
}

impl From<&ArchiveEntry> for PhotoRecord {
    fn from(entry: &ArchiveEntry) -> Self {
        Self { src: entry.path.clone(), folder: entry.folder_label.clone() }
    }
}

impl From<&ArchiveEntry> for ThoughtRecord {
    fn from(entry: &ArchiveEntry) -> Self {
        Self {
            src: entry.path.clone(),
            content: entry.content.clone().unwrap_or_default(),
            folder: entry.folder_label.clone(),
        }
    }
}

impl ArchiveIndex {
    /// Strip internal fields, keeping each collection's current order
    pub fn to_photo_index(&self) -> PhotoIndex {
        PhotoIndex {
            photos: self.photos.iter().map(PhotoRecord::from).collect(),
            polaroids: self.polaroids.iter().map(PhotoRecord::from).collect(),
            thoughts: self.thoughts.iter().map(ThoughtRecord::from).collect(),
        }
    }
}

impl From<Vec<Project>> for ProjectsIndex {
    fn from(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}
