//! Error types for project description parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for parsing operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while reading a project description.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Project description not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid XML document: {0}")]
    Parse(#[from] quick_xml::DeError),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("No entities found in project description")]
    NoEntities,

    #[error("Unsupported field type '{kind}' on field '{field}'")]
    UnsupportedFieldType { field: String, kind: String },

    #[error("Field '{field}' is missing required element <{element}>")]
    MissingFieldAttribute { field: String, element: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
