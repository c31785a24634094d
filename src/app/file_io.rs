//! Whole-file read/write for the document text.
//!
//! Both operations are synchronous and overwrite in full; there is no
//! backup of prior contents. Failures are classified so the caller can
//! show the user something better than an errno.

use std::fs;
use std::path::Path;

use super::error::{AppError, Result};
use super::text_ops::normalize_line_endings;

/// Read an entire file as the new document text, normalizing line endings.
pub fn read_document_text(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|e| AppError::from_io(e, path))?;
    Ok(normalize_line_endings(&raw))
}

/// Write the full document text to `path`, replacing whatever was there.
pub fn write_document_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| AppError::from_io(e, path))
}
