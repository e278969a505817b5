//! Heuristic parsers for archive folder and file names
//!
//! # Error Handling Strategy
//!
//! Folder and file names are written by hand, so every parser here is total:
//!
//! - **No errors**: each parse step returns an `Option`, and the caller picks the default
//!   (`None` for year/month, 0 for ordering numbers).
//!
//! - **No panics on odd input**: overflowing numbers, empty fragments and non-ASCII names
//!   fall back to the defaults instead of aborting the scan.

pub mod file_number;
pub mod folder;
pub mod month;

pub use file_number::extract_file_number;
pub use folder::{FolderInfo, parse_folder_label, parent_folder_name};
pub use month::month_number;
