//! Index building for the photo archive and the projects tree
//!
//! # Error Handling Strategy
//!
//! A single bad file never stops a run:
//!
//! - **Missing roots**: a missing archive or projects directory is logged and yields empty
//!   collections.
//!
//! - **File-level failures**: unreadable text files and unreadable directory entries are
//!   logged as warnings and skipped; unreadable modification times become 0.0.
//!
//! - **Name parsing**: delegated to [`crate::parsers`], which never fails.
//!
//! Only errors that make the whole index meaningless (e.g. the projects root exists but
//! cannot be listed) are propagated via `anyhow::Result`.

pub mod builder;
pub mod ordering;
pub mod project_discovery;

pub use builder::scan_archive;
pub use ordering::{sort_entries, sort_index};
pub use project_discovery::discover_projects;
