//! CLI argument parsing, file discovery and logging setup

use crate::{Error, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// queryfmt - Reformat SQL queries for reading
#[derive(Parser, Debug)]
#[command(name = "queryfmt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log filter directive, overrides -v and RUST_LOG (e.g. "queryfmt=debug")
    #[arg(long, env = "QUERYFMT_LOG", global = true)]
    pub log: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format SQL files
    Fmt {
        /// Write formatted output back to files
        #[arg(short, long)]
        write: bool,

        /// Files, directories or glob patterns to format (use - for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check if files are formatted (exit code 1 if not)
    Check {
        /// Files, directories or glob patterns to check (use - for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Default log level for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber
///
/// An explicit directive wins, then `RUST_LOG`, then the `-v` count.
pub fn init_tracing(verbose: u8, directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose))),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Discover SQL files from a path (file, directory or glob pattern)
///
/// Directories are walked recursively and only `.sql` files are kept. An
/// explicitly named file is taken whatever its extension.
pub fn discover_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        let files: Vec<PathBuf> = walkdir::WalkDir::new(path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| is_sql_file(p))
            .collect();
        debug!(dir = %path.display(), count = files.len(), "discovered sql files");
        return Ok(files);
    }

    let pattern = path.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Err(Error::MissingPath {
            path: path.to_path_buf(),
        });
    }

    let paths = glob::glob(&pattern).map_err(|source| Error::GlobError {
        pattern: pattern.to_string(),
        source,
    })?;
    let files: Vec<PathBuf> = paths
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file() && is_sql_file(p))
        .collect();

    if files.is_empty() {
        warn!(pattern = %pattern, "no SQL files matched");
    }

    Ok(files)
}

fn is_sql_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "sql")
}

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
