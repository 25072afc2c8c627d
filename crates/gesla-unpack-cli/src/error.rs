//! Error conversion utilities for CLI.
//!
//! Converts gesla-unpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use gesla_unpack_core::ExtractionError;
use std::path::Path;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::NotFound { path } if path == archive => {
            anyhow!(
                "Archive not found: '{}'\n\
                 HINT: Place the downloaded GESLA4_ALL.zip there or pass --archive <PATH>.",
                path.display()
            )
        }
        ExtractionError::CorruptArchive { path, reason } => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or incompletely downloaded.",
                path.display(),
                reason
            )
        }
        ExtractionError::PermissionDenied { path, source } => {
            anyhow!(
                "Permission denied: '{}' ({})\n\
                 HINT: The archive must be readable and the output directory writable.",
                path.display(),
                source
            )
        }
        ExtractionError::InsufficientSpace { path, source } => {
            anyhow!(
                "Out of disk space while writing '{}' ({})\n\
                 HINT: Files extracted so far were left in place. Free space and run again.",
                path.display(),
                source
            )
        }
        ExtractionError::NotADirectory { path } => {
            anyhow!(
                "Output path '{}' exists and is not a directory\n\
                 HINT: Remove it or choose another location with --output-dir.",
                path.display()
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error extracting archive '{}'", archive.display())),
    }
}

/// Adds context to an extraction result
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}
