//! ZIP archive extraction.
//!
//! Entries are written in archive order. Directory entries become
//! directories; every other entry (including entries flagged as symlinks by
//! Unix attributes) is written as a regular file with its stored bytes.
//! Existing files at colliding paths are truncated and overwritten. Nothing
//! is rolled back on failure.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use ::zip::ZipArchive;

use crate::ExtractionError;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_buffer;
use crate::types::DestDir;
use crate::types::EntryPath;

/// Zip archive opened for extraction.
///
/// Owns the underlying reader; dropping the extractor releases the archive
/// handle, whether extraction succeeded or not.
///
/// # Examples
///
/// ```no_run
/// use gesla_unpack_core::DestDir;
/// use gesla_unpack_core::NoopProgress;
/// use gesla_unpack_core::formats::ZipExtractor;
///
/// # fn main() -> Result<(), gesla_unpack_core::ExtractionError> {
/// let dest = DestDir::ensure("data/GESLA4_ALL")?;
/// let mut archive = ZipExtractor::open("data/GESLA4_ALL.zip")?;
/// let report = archive.extract(&dest, &mut NoopProgress)?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ZipExtractor<R: Read + Seek> {
    archive: ZipArchive<R>,
    archive_path: PathBuf,
}

impl ZipExtractor<File> {
    /// Opens the zip file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `PermissionDenied` if the file cannot be
    /// opened, and `CorruptArchive` if it is not a zip archive.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ExtractionError::from_io(e, path))?;
        Self::new(file, path)
    }
}

impl<R: Read + Seek> ZipExtractor<R> {
    /// Reads the central directory from `reader`.
    ///
    /// `archive_path` is used for error messages only.
    ///
    /// # Errors
    ///
    /// Returns `CorruptArchive` if the data is not a zip archive.
    pub fn new(reader: R, archive_path: impl Into<PathBuf>) -> Result<Self> {
        let archive_path = archive_path.into();
        let archive =
            ZipArchive::new(reader).map_err(|e| ExtractionError::from_zip(e, &archive_path))?;
        Ok(Self {
            archive,
            archive_path,
        })
    }

    /// Returns the number of entries in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Path the archive was opened from.
    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Writes every entry under `dest`.
    ///
    /// # Errors
    ///
    /// Stops at the first failing entry. Files written before the failure
    /// stay on disk.
    pub fn extract(
        &mut self,
        dest: &DestDir,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        let mut report = ExtractionReport::new();
        let mut buffer = CopyBuffer::new();
        let total = self.archive.len();

        for index in 0..total {
            let mut entry = self
                .archive
                .by_index(index)
                .map_err(|e| ExtractionError::from_zip(e, &self.archive_path))?;

            let Some(entry_path) = EntryPath::sanitize(entry.name()) else {
                progress.on_entry_skipped(entry.name(), total, index + 1);
                report.entries_skipped += 1;
                report.add_warning(format!(
                    "skipped entry with no usable path: {:?}",
                    entry.name()
                ));
                continue;
            };

            progress.on_entry_start(entry_path.as_path(), total, index + 1);

            let target = dest.join(&entry_path);
            if entry.is_dir() {
                create_dir_all(&target).map_err(|e| ExtractionError::from_io(e, &target))?;
                report.directories_created += 1;
            } else {
                let written = write_file(
                    &mut entry,
                    &target,
                    &self.archive_path,
                    &mut buffer,
                    progress,
                )?;
                report.files_extracted += 1;
                report.bytes_written = report.bytes_written.saturating_add(written);
            }

            progress.on_entry_complete(entry_path.as_path());
        }

        progress.on_complete();

        Ok(report)
    }
}

/// Writes one entry's data to `target`, replacing any existing file.
fn write_file<R: Read + ?Sized>(
    reader: &mut R,
    target: &Path,
    archive_path: &Path,
    buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> Result<u64> {
    if let Some(parent) = target.parent() {
        create_dir_all(parent).map_err(|e| ExtractionError::from_io(e, parent))?;
    }

    let mut file = File::create(target).map_err(|e| ExtractionError::from_io(e, target))?;

    copy_with_buffer(reader, &mut file, buffer, |n| progress.on_bytes_written(n)).map_err(
        |e| match e {
            CopyError::Read(e) => ExtractionError::from_archive_read(e, archive_path),
            CopyError::Write(e) => ExtractionError::from_io(e, target),
        },
    )
}
