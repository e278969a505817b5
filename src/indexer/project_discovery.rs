use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::IndexConfig;
use crate::models::Project;
use crate::utils::{file_name_lossy, has_extension, relative_to, to_slash_path};

/// Image extensions collected for projects (no TIFF, unlike the archive)
pub const PROJECT_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

const PRIMARY_DIR: &str = "primarie";
const SECONDARY_DIR: &str = "secondarie";

/// Discover all projects in the projects directory and collect their images
///
/// Each immediate subdirectory (sorted by name) is a project. Primary images come from
/// its `primarie` folder, or from the project folder itself when `primarie` is missing or
/// has no images. Secondary images come from `secondarie`.
///
/// # Returns
///
/// Returns a Vec of [`Project`] with slash-normalized image paths relative to
/// `config.base_dir`. Projects without any image are left out. Returns an empty Vec if
/// the projects directory doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if the projects directory exists but cannot be read. Unreadable
/// project folders are logged as warnings and treated as empty.
pub fn discover_projects(config: &IndexConfig) -> Result<Vec<Project>> {
    let projects_dir = &config.projects_dir;

    // Return empty vec if projects directory doesn't exist
    if !projects_dir.is_dir() {
        debug!(path = %projects_dir.display(), "projects directory not found");
        return Ok(Vec::new());
    }

    let mut project_dirs: Vec<PathBuf> = fs::read_dir(projects_dir)
        .with_context(|| {
            format!("Failed to read projects directory: {}", projects_dir.display())
        })?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .context("Failed to read directory entry")?;
    project_dirs.retain(|path| path.is_dir());
    project_dirs.sort();

    let mut projects = Vec::new();
    for project_dir in project_dirs {
        let primary_images = match list_images(&project_dir.join(PRIMARY_DIR), config) {
            images if images.is_empty() => list_images(&project_dir, config),
            images => images,
        };
        let secondary_images = list_images(&project_dir.join(SECONDARY_DIR), config);

        let project = Project {
            name: file_name_lossy(&project_dir).into_owned(),
            primary_images,
            secondary_images,
        };

        if project.has_images() {
            projects.push(project);
        } else {
            debug!(project = %project.name, "skipping project without images");
        }
    }

    info!(projects = projects.len(), "projects indexed");
    Ok(projects)
}

/// Images directly inside `dir`, sorted by file name
///
/// A missing directory yields an empty list; an unreadable one is logged and also empty.
fn list_images(dir: &Path, config: &IndexConfig) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "failed to read project directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, PROJECT_IMAGE_EXTENSIONS))
        .collect();
    files.sort();

    files.iter().map(|path| to_slash_path(relative_to(path, &config.base_dir))).collect()
}
