//! Wrapper that re-runs the indexer and reports what it printed.
//!
//! The indexer binary is expected next to the wrapper's own executable, which is where
//! cargo and installers put sibling binaries.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Output};

use anyhow::{Context, Result, bail};
use clap::Parser;

pub const INDEXER_BIN: &str = "photo-index";

#[derive(Parser)]
#[command(name = "update-archive")]
#[command(version)]
#[command(about = "Regenerate the archive index by running photo-index", long_about = None)]
pub struct UpdateCli {
    /// Arguments passed through to photo-index
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub indexer_args: Vec<String>,
}

pub fn run() -> ExitCode {
    let cli = UpdateCli::parse();
    println!("Updating photo archive index...");

    let indexer = match locate_indexer() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run_indexer(&indexer, &cli.indexer_args) {
        Ok(output) if output.status.success() => {
            println!("Index updated successfully!");
            println!();
            println!("Output:");
            print!("{}", String::from_utf8_lossy(&output.stdout));
            if !output.stderr.is_empty() {
                println!();
                println!("Warnings:");
                print!("{}", String::from_utf8_lossy(&output.stderr));
            }
            ExitCode::SUCCESS
        }
        Ok(output) => {
            eprintln!("Error: {} exited with {}", INDEXER_BIN, output.status);
            report_captured(&output);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Path of the indexer binary that sits next to the current executable
pub fn locate_indexer() -> Result<PathBuf> {
    let current = env::current_exe().context("Failed to locate current executable")?;
    let dir = current.parent().context("Current executable has no parent directory")?;
    indexer_in(dir)
}

/// Path of the indexer binary inside `dir`, if present
pub fn indexer_in(dir: &Path) -> Result<PathBuf> {
    let candidate = dir.join(format!("{}{}", INDEXER_BIN, env::consts::EXE_SUFFIX));
    if !candidate.is_file() {
        bail!("{} not found in {}", INDEXER_BIN, dir.display());
    }
    Ok(candidate)
}

/// Run the indexer in the current directory and capture its output
pub fn run_indexer(indexer: &Path, args: &[String]) -> Result<Output> {
    Command::new(indexer)
        .arg("--quiet")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {}", indexer.display()))
}

fn report_captured(output: &Output) {
    eprintln!("Output: {}", String::from_utf8_lossy(&output.stdout));
    eprintln!("Errors: {}", String::from_utf8_lossy(&output.stderr));
}
