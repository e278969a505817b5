//! Run configuration: where the archive lives and where the index files go.
//!
//! Values resolve in three layers: built-in defaults, then `PHOTO_INDEX_*` environment
//! variables, then CLI flags (applied by the caller).

use std::path::PathBuf;

use crate::parsers::folder::DEFAULT_STRIP_TOKENS;
use crate::utils::{env_csv, env_path};

pub const PHOTO_INDEX_FILENAME: &str = "photo-index.json";
pub const PROJECTS_INDEX_FILENAME: &str = "projects-index.json";

const DEFAULT_ARCHIVE_DIR: &str = "src/archivio/";
const DEFAULT_PROJECTS_DIR: &str = "src/PROGETTI_WORK";

const ENV_BASE_DIR: &str = "PHOTO_INDEX_BASE_DIR";
const ENV_ARCHIVE_DIR: &str = "PHOTO_INDEX_ARCHIVE_DIR";
const ENV_PROJECTS_DIR: &str = "PHOTO_INDEX_PROJECTS_DIR";
const ENV_OUTPUT_DIR: &str = "PHOTO_INDEX_OUTPUT_DIR";
const ENV_STRIP_TOKENS: &str = "PHOTO_INDEX_STRIP_TOKENS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory that emitted `src` paths are made relative to
    pub base_dir: PathBuf,
    pub archive_dir: PathBuf,
    pub projects_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Literal substrings removed from month folder names before month lookup
    pub strip_tokens: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            archive_dir: PathBuf::from(DEFAULT_ARCHIVE_DIR),
            projects_dir: PathBuf::from(DEFAULT_PROJECTS_DIR),
            output_dir: PathBuf::from("."),
            strip_tokens: DEFAULT_STRIP_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl IndexConfig {
    /// Defaults overridden by any `PHOTO_INDEX_*` variables that are set and non-empty
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_dir: env_path(ENV_BASE_DIR).unwrap_or(defaults.base_dir),
            archive_dir: env_path(ENV_ARCHIVE_DIR).unwrap_or(defaults.archive_dir),
            projects_dir: env_path(ENV_PROJECTS_DIR).unwrap_or(defaults.projects_dir),
            output_dir: env_path(ENV_OUTPUT_DIR).unwrap_or(defaults.output_dir),
            strip_tokens: env_csv(ENV_STRIP_TOKENS).unwrap_or(defaults.strip_tokens),
        }
    }

    /// Config rooted at `base_dir`, with every default path resolved under it
    pub fn rooted_at(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            archive_dir: base_dir.join(DEFAULT_ARCHIVE_DIR),
            projects_dir: base_dir.join(DEFAULT_PROJECTS_DIR),
            output_dir: base_dir.clone(),
            base_dir,
            ..Self::default()
        }
    }

    pub fn photo_index_path(&self) -> PathBuf {
        self.output_dir.join(PHOTO_INDEX_FILENAME)
    }

    pub fn projects_index_path(&self) -> PathBuf {
        self.output_dir.join(PROJECTS_INDEX_FILENAME)
    }
}
