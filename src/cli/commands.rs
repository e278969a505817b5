use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::{Level, subscriber::set_global_default, warn};
use tracing_subscriber::EnvFilter;

use crate::config::IndexConfig;
use crate::index_storage::{write_photo_index, write_projects_index};
use crate::indexer::{discover_projects, scan_archive};
use crate::models::ProjectsIndex;

#[derive(Parser)]
#[command(name = "photo-index")]
#[command(version)]
#[command(about = "Generate the photo and projects index for the archive gallery", long_about = None)]
pub struct Cli {
    /// Directory that `src` paths in the output are relative to
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Root of the photo archive
    #[arg(long, value_name = "DIR")]
    pub archive_dir: Option<PathBuf>,

    /// Root of the projects tree
    #[arg(long, value_name = "DIR")]
    pub projects_dir: Option<PathBuf>,

    /// Where photo-index.json and projects-index.json are written
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Substring removed from month folder names (repeatable, replaces the defaults)
    #[arg(long = "strip-token", value_name = "TOKEN", allow_hyphen_values = true)]
    pub strip_tokens: Vec<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (-q warnings only, -qq errors only)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    /// Environment-derived config with any flags given on the command line applied on top
    pub fn config(&self) -> IndexConfig {
        let mut config = IndexConfig::from_env();
        if let Some(dir) = &self.base_dir {
            config.base_dir = dir.clone();
        }
        if let Some(dir) = &self.archive_dir {
            config.archive_dir = dir.clone();
        }
        if let Some(dir) = &self.projects_dir {
            config.projects_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if !self.strip_tokens.is_empty() {
            config.strip_tokens = self.strip_tokens.clone();
        }
        config
    }
}

/// Counts and output locations of one indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub photos: usize,
    pub polaroids: usize,
    pub thoughts: usize,
    pub projects: usize,
    pub photo_index_path: PathBuf,
    pub projects_index_path: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = cli.config();
    let summary = generate_indexes(&config)?;
    print_summary(&summary);

    Ok(())
}

/// Scan the archive and projects tree, then write both index files
///
/// Both files are written even when nothing was found, so the gallery always sees the
/// current (possibly empty) state.
pub fn generate_indexes(config: &IndexConfig) -> Result<IndexSummary> {
    let index = scan_archive(config)?;
    if index.is_empty() {
        warn!("no content found in the archive");
    }

    let photo_index_path = config.photo_index_path();
    write_photo_index(&photo_index_path, &index.to_photo_index())?;

    let projects = discover_projects(config)?;
    let project_count = projects.len();
    let projects_index_path = config.projects_index_path();
    write_projects_index(&projects_index_path, &ProjectsIndex::from(projects))?;

    Ok(IndexSummary {
        photos: index.photos.len(),
        polaroids: index.polaroids.len(),
        thoughts: index.thoughts.len(),
        projects: project_count,
        photo_index_path,
        projects_index_path,
    })
}

fn print_summary(summary: &IndexSummary) {
    println!("Photo Archive Index");
    println!("===================");
    println!("Photos: {}", summary.photos);
    println!("Polaroids: {}", summary.polaroids);
    println!("Thoughts: {}", summary.thoughts);
    println!("Projects: {}", summary.projects);
    println!();
    println!("Written: {}", summary.photo_index_path.display());
    println!("Written: {}", summary.projects_index_path.display());
}

/// Install a stderr fmt subscriber; `RUST_LOG`, when set, overrides the -v/-q level
fn init_tracing(verbose: u8, quiet: u8) {
    let level = match 1 + i16::from(verbose) - i16::from(quiet) {
        i16::MIN..=-1 => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .finish();

    // Ignore error if already set in tests
    let _ = set_global_default(subscriber);
}

/// `RUST_LOG` directives when set and valid, otherwise the -v/-q level
fn env_filter(rust_log: Option<&str>, level: Level) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.to_string()))
}
