//! Persisted index documents
//!
//! Writes the two JSON files consumed by the gallery front-end:
//! - `photo-index.json`: photos, polaroids and thoughts, each already ordered
//! - `projects-index.json`: projects with their primary/secondary images
//!
//! Both files are fully rewritten on every run; nothing is merged with a previous output.

pub mod persistence;

pub use persistence::{write_photo_index, write_projects_index};
