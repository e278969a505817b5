//! Photo Archive Index - static JSON index for a personal photo/text archive
//!
//! This library walks an archive tree laid out as `YEAR/NUMBER-MONTHNAME/` folders and
//! produces the JSON documents consumed by the gallery front-end. It supports:
//!
//! - Classifying files into photos, polaroids and text "thoughts"
//! - Inferring year, month and a folder label from loosely named folders (IT/EN months)
//! - Ordering entries by folder number (newest first) and file number
//! - Indexing a separate projects tree with primary/secondary image lists
//!
//! # Example
//!
//! ```no_run
//! use photo_archive_index::{IndexConfig, scan_archive};
//!
//! let config = IndexConfig::default();
//! let index = scan_archive(&config)?;
//! println!("Indexed {} photos", index.photos.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::IndexConfig;
pub use indexer::builder::scan_archive;
pub use indexer::ordering::sort_entries;
pub use indexer::project_discovery::discover_projects;
pub use models::{ArchiveEntry, ArchiveIndex, EntryKind, PhotoIndex, Project, ProjectsIndex};
pub use parsers::{extract_file_number, month_number, parse_folder_label};
