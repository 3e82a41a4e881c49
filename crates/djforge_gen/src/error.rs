//! Error types for the generators.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while generating output files.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No INSTALLED_APPS marker in settings file: {0}")]
    MarkerNotFound(PathBuf),
}
