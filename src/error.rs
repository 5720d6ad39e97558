//! Error types for queryfmt
//!
//! Formatting itself cannot fail; these cover reading and writing the
//! inputs the CLI is pointed at.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for queryfmt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for queryfmt
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    #[diagnostic(code(queryfmt::io_error))]
    IoError(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(queryfmt::read_error))]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    #[diagnostic(code(queryfmt::write_error))]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No such file or directory: {}", path.display())]
    #[diagnostic(
        code(queryfmt::missing_path),
        help("pass a .sql file, a directory, a glob pattern, or - for stdin")
    )]
    MissingPath { path: PathBuf },

    #[error("Invalid glob pattern `{pattern}`: {source}")]
    #[diagnostic(code(queryfmt::glob_error))]
    GlobError {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
