//! Index persistence: pretty-printed JSON written in place

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::models::{PhotoIndex, ProjectsIndex};

/// Write `photo-index.json`
pub fn write_photo_index(path: &Path, index: &PhotoIndex) -> Result<()> {
    write_json(path, index)
}

/// Write `projects-index.json`
pub fn write_projects_index(path: &Path, index: &ProjectsIndex) -> Result<()> {
    write_json(path, index)
}

/// Serialize with 2-space indentation and overwrite `path`
///
/// Non-ASCII text is written as-is (UTF-8), not escaped. The write is not atomic: a
/// crash mid-write can leave a truncated file, which the next run overwrites.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), "index written");
    Ok(())
}
