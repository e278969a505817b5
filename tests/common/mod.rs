//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use photo_archive_index::IndexConfig;
use tempfile::TempDir;

pub const ARCHIVE: &str = "src/archivio";
pub const PROJECTS: &str = "src/PROGETTI_WORK";

/// Builder for creating test site directories (archive + projects tree)
pub struct ArchiveDirBuilder {
    temp_dir: TempDir,
}

impl ArchiveDirBuilder {
    /// Create a new builder with an empty site directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the site directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Config with every default path rooted at the site directory
    pub fn config(&self) -> IndexConfig {
        IndexConfig::rooted_at(self.temp_dir.path())
    }

    /// Add a file at a path relative to the site directory
    pub fn with_file(self, relative: &str, content: &[u8]) -> Self {
        let path = self.temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent dirs");
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Add an image under the archive directory
    pub fn with_photo(self, relative: &str) -> Self {
        self.with_file(&format!("{}/{}", ARCHIVE, relative), b"\xff\xd8\xff")
    }

    /// Add a text file under the archive directory
    pub fn with_thought(self, relative: &str, content: &str) -> Self {
        self.with_file(&format!("{}/{}", ARCHIVE, relative), content.as_bytes())
    }

    /// Add an image under a project directory
    pub fn with_project_image(self, project: &str, relative: &str) -> Self {
        self.with_file(&format!("{}/{}/{}", PROJECTS, project, relative), b"\x89PNG")
    }

    /// Add an empty directory relative to the site directory
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(relative)).expect("Failed to create dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ArchiveDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A site laid out the way the real archive is: two years, mixed folder styles,
/// polaroids, thoughts, an EXTRA folder and two projects
pub fn realistic_archive() -> ArchiveDirBuilder {
    ArchiveDirBuilder::new()
        .with_photo("2024/11 - NOVEMBRE/01-Milano.jpg")
        .with_photo("2024/11 - NOVEMBRE/02-Duomo.jpg")
        .with_photo("2025/01-SETTEMBRE/01-Barceloneta, Barcellona.jpg")
        .with_photo("2025/01-SETTEMBRE/Barceloneta, Barcellona 2.jpg")
        .with_photo("2025/12 - DICEMBRE 25/03-neve.png")
        .with_photo("2025/12 - DICEMBRE 25/POLAROID 1.jpg")
        .with_thought("2025/12 - DICEMBRE 25/pensiero.txt", "Natale a casa.\n")
        .with_thought("2025/01-SETTEMBRE/vuoto.md", "   \n")
        .with_photo("EXTRA/05-backstage.webp")
        .with_file("src/archivio/2025/01-SETTEMBRE/clip.mov", b"mov")
        .with_project_image("Alpha", "primarie/01.jpg")
        .with_project_image("Alpha", "secondarie/s1.png")
        .with_project_image("Beta", "cover.webp")
        .with_dir("src/PROGETTI_WORK/Beta/primarie")
        .with_dir("src/PROGETTI_WORK/Gamma")
}
