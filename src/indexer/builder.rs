//! Archive scanner for the photo archive tree.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Missing root**: a missing archive directory is logged as a warning and produces an
//!   empty index, so the gallery still gets a valid (empty) document
//! - **File-level errors**: unreadable text files and directory entries are logged and
//!   skipped; a missing modification time defaults to 0.0
//! - **Name parsing**: folder and file names never fail, they fall back to defaults
//!
//! Warnings go through `tracing`; nothing is printed directly from here.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::IndexConfig;
use crate::indexer::ordering::sort_index;
use crate::models::{ArchiveEntry, ArchiveIndex, EntryKind};
use crate::parsers::{extract_file_number, parent_folder_name, parse_folder_label};
use crate::utils::{
    file_name_lossy, lowercase_extension, modified_secs, path_components, relative_to,
    to_slash_path,
};

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "tiff"];
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Folder whose contents are always labelled as extras
const EXTRA_FOLDER: &str = "EXTRA";
const POLAROID_PREFIX: &str = "POLAROID";

/// Scan the archive directory and build the sorted photo/polaroid/thought index
///
/// Walks `config.archive_dir` depth-first in file-name order, classifies each file by
/// extension and derives its folder label and ordering numbers from its path relative to
/// `config.base_dir`.
///
/// # Returns
///
/// Returns an [`ArchiveIndex`] whose collections are each sorted by folder order
/// (descending) and file order (ascending). A missing archive directory yields an empty
/// index.
///
/// # Examples
///
/// ```no_run
/// use photo_archive_index::{IndexConfig, scan_archive};
///
/// let index = scan_archive(&IndexConfig::default())?;
/// for photo in &index.photos {
///     println!("{}: {}", photo.folder_label, photo.path);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn scan_archive(config: &IndexConfig) -> Result<ArchiveIndex> {
    let mut index = ArchiveIndex::default();
    let archive_dir = &config.archive_dir;

    if !archive_dir.is_dir() {
        warn!(path = %archive_dir.display(), "archive directory not found");
        return Ok(index);
    }

    let mut skipped = 0usize;
    for dir_entry in WalkDir::new(archive_dir).sort_by_file_name() {
        let dir_entry = match dir_entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable archive entry");
                continue;
            }
        };

        if dir_entry.file_type().is_dir() {
            continue;
        }

        let Some(kind) = classify(dir_entry.path()) else {
            continue;
        };

        match build_entry(config, dir_entry.path(), kind) {
            Some(entry) => index.push(entry),
            None => skipped += 1,
        }
    }

    sort_index(&mut index);

    info!(
        photos = index.photos.len(),
        polaroids = index.polaroids.len(),
        thoughts = index.thoughts.len(),
        skipped,
        "archive scanned"
    );

    Ok(index)
}

/// Classify a file by extension and name, `None` for files the index ignores
pub fn classify(path: &Path) -> Option<EntryKind> {
    let extension = lowercase_extension(path)?;

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        let is_polaroid = file_name_lossy(path).to_uppercase().starts_with(POLAROID_PREFIX);
        Some(if is_polaroid { EntryKind::Polaroid } else { EntryKind::Photo })
    } else if TEXT_EXTENSIONS.contains(&extension.as_str()) {
        Some(EntryKind::Thought)
    } else {
        None
    }
}

/// Build the entry for one accepted file, `None` when a thought has no usable content
fn build_entry(config: &IndexConfig, path: &Path, kind: EntryKind) -> Option<ArchiveEntry> {
    let content = match kind {
        EntryKind::Thought => Some(read_thought(path)?),
        EntryKind::Photo | EntryKind::Polaroid => None,
    };

    let relative = relative_to(path, &config.base_dir);
    let components = path_components(relative);

    let mut folder = parse_folder_label(components.as_slice(), config.strip_tokens.as_slice());
    if parent_folder_name(components.as_slice()) == EXTRA_FOLDER {
        folder.label = EXTRA_FOLDER.to_string();
        folder.folder_order = 0;
    }

    Some(ArchiveEntry {
        kind,
        path: to_slash_path(relative),
        folder_label: folder.label,
        year: folder.year,
        month: folder.month,
        folder_order: folder.folder_order,
        file_order: extract_file_number(&file_name_lossy(path)),
        mtime: modified_secs(path),
        content,
    })
}

/// Read a thought file, trimmed and with `\n` line endings
///
/// Returns `None` (after logging) when the file is unreadable or blank.
fn read_thought(path: &Path) -> Option<String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read text file");
            return None;
        }
    };

    let content = normalize_newlines(&raw).trim().to_string();
    if content.is_empty() {
        debug!(path = %path.display(), "skipping empty text file");
        return None;
    }
    Some(content)
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
