//! Error types for the scaffolding driver.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can occur while driving project generation.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Project directory already exists: {0}")]
    OutputExists(PathBuf),

    #[error("Failed to run {tool}: {source}")]
    ToolSpawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("{tool} failed: {stderr}")]
    ToolFailed { tool: String, stderr: String },

    #[error("Generator error: {0}")]
    Gen(#[from] djforge_gen::GenError),

    #[error("Report serialization error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
