//! Shared file helpers for generators.

use std::fs;
use std::path::Path;

use crate::error::{GenError, GenResult};

/// Write generated source text, trimming surrounding whitespace first.
///
/// IO failures are wrapped with the target path. Writes are not atomic; a
/// crash mid-write can leave a truncated file.
pub fn write_stripped(path: &Path, content: &str) -> GenResult<()> {
    fs::write(path, content.trim()).map_err(|source| GenError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an existing generated file, wrapping failures with the path.
pub fn read_source(path: &Path) -> GenResult<String> {
    fs::read_to_string(path).map_err(|source| GenError::Read {
        path: path.to_path_buf(),
        source,
    })
}
