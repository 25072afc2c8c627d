//! High-level public API for archive extraction.

use std::path::Path;

use crate::ExtractConfig;
use crate::ExtractionReport;
use crate::Extractor;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;

/// Extracts a zip archive into the specified output directory.
///
/// The output directory (and any missing parents) is created first.
/// Entries are then written at their relative paths, overwriting colliding
/// files. Unrelated files already in the directory are not touched.
///
/// # Arguments
///
/// * `archive_path` - Path to the zip file
/// * `output_dir` - Directory where files will be extracted
///
/// # Errors
///
/// Returns an error whose [`kind`](crate::ExtractionError::kind) is:
/// - `NotFound` if the archive does not exist
/// - `CorruptArchive` if it cannot be parsed as zip or its data is damaged
/// - `PermissionDenied` if the archive is unreadable or the output unwritable
/// - `InsufficientSpace` if storage runs out mid-extraction
///
/// Files written before a failure remain on disk.
///
/// # Examples
///
/// ```no_run
/// use gesla_unpack_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_archive("data/GESLA4_ALL.zip", "data/GESLA4_ALL")?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
) -> Result<ExtractionReport> {
    extract_archive_with_progress(archive_path, output_dir, &mut NoopProgress)
}

/// Extracts a zip archive, reporting progress through `progress`.
///
/// Same semantics as [`extract_archive`].
///
/// # Errors
///
/// See [`extract_archive`].
pub fn extract_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let config = ExtractConfig::new(archive_path.as_ref(), output_dir.as_ref());
    Extractor::new(config).extract(progress)
}
