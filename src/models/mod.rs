//! Data models for the photo archive index.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`ArchiveEntry`] - A photo, polaroid or thought with its ordering metadata
//! - [`ArchiveIndex`] - The three collections produced by one archive scan
//! - [`Project`] - A project directory with its primary/secondary images
//! - [`PhotoIndex`] / [`ProjectsIndex`] - The persisted JSON documents
//!
//! Internal fields (year, month, ordering numbers, mtime) only live on [`ArchiveEntry`];
//! the output records in `output` carry exactly what the gallery reads.

pub mod entry;
pub mod output;
pub mod project;

pub use entry::{ArchiveEntry, ArchiveIndex, EntryKind};
pub use output::{PhotoIndex, PhotoRecord, ProjectsIndex, ThoughtRecord};
pub use project::Project;
