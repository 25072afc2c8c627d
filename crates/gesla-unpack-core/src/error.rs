//! Error types for archive extraction operations.

use std::fmt;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Coarse classification of an extraction failure.
///
/// Every [`ExtractionError`] maps onto exactly one kind via
/// [`ExtractionError::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The archive (or another required path) does not exist.
    NotFound,
    /// The archive could not be parsed or its entry data failed to decode.
    CorruptArchive,
    /// The archive could not be read or the destination could not be written.
    PermissionDenied,
    /// Storage ran out while writing extracted data.
    InsufficientSpace,
    /// Any other I/O failure.
    Other,
}

impl ErrorKind {
    /// Returns a stable lowercase name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::CorruptArchive => "corrupt_archive",
            Self::PermissionDenied => "permission_denied",
            Self::InsufficientSpace => "insufficient_space",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during archive extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A required path does not exist.
    #[error("no such file or directory: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Archive is not a readable zip file or entry data is damaged.
    #[error("corrupt archive {path}: {reason}")]
    CorruptArchive {
        /// The archive path.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// Access to a path was refused by the filesystem.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The filesystem ran out of space.
    #[error("insufficient space while writing {path}")]
    InsufficientSpace {
        /// The file being written when space ran out.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The destination exists but is not a directory.
    #[error("destination is not a directory: {path}")]
    NotADirectory {
        /// The offending destination path.
        path: PathBuf,
    },

    /// I/O operation failed for another reason.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ExtractionError {
    /// Classifies an I/O error raised while touching `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gesla_unpack_core::ErrorKind;
    /// use gesla_unpack_core::ExtractionError;
    /// use std::io;
    ///
    /// let err = io::Error::from(io::ErrorKind::PermissionDenied);
    /// let err = ExtractionError::from_io(err, "out/a.txt");
    /// assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    /// ```
    pub fn from_io(source: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                Self::PermissionDenied { path, source }
            }
            io::ErrorKind::StorageFull => Self::InsufficientSpace { path, source },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// Classifies an I/O error raised while reading from the archive.
    ///
    /// Checksum mismatches surface as `InvalidData`, a damaged deflate stream
    /// as `InvalidInput` and truncated entry data as `UnexpectedEof`. All three
    /// mean the archive is corrupt.
    pub fn from_archive_read(source: io::Error, archive: &Path) -> Self {
        match source.kind() {
            io::ErrorKind::InvalidData
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::UnexpectedEof => Self::CorruptArchive {
                path: archive.to_path_buf(),
                reason: source.to_string(),
            },
            _ => Self::from_io(source, archive),
        }
    }

    /// Converts an error from the zip reader.
    pub fn from_zip(err: ZipError, archive: &Path) -> Self {
        match err {
            ZipError::Io(source) => Self::from_archive_read(source, archive),
            other => Self::CorruptArchive {
                path: archive.to_path_buf(),
                reason: other.to_string(),
            },
        }
    }

    /// Returns the coarse kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use gesla_unpack_core::ErrorKind;
    /// use gesla_unpack_core::ExtractionError;
    ///
    /// let err = ExtractionError::NotFound {
    ///     path: "data/GESLA4_ALL.zip".into(),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::CorruptArchive { .. } => ErrorKind::CorruptArchive,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::InsufficientSpace { .. } => ErrorKind::InsufficientSpace,
            Self::NotADirectory { .. } | Self::Io { .. } => ErrorKind::Other,
        }
    }

    /// Returns the path this error concerns.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::CorruptArchive { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::InsufficientSpace { path, .. }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => path,
        }
    }
}
