//! Extraction configuration.

use std::path::PathBuf;

/// Archive unpacked when no other path is configured.
pub const DEFAULT_ARCHIVE_PATH: &str = "data/GESLA4_ALL.zip";

/// Directory the archive is unpacked into when no other path is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "data/GESLA4_ALL";

/// Paths for a single extraction run.
///
/// Relative paths are resolved against the process working directory.
///
/// # Examples
///
/// ```
/// use gesla_unpack_core::ExtractConfig;
///
/// // Fixed dataset paths
/// let config = ExtractConfig::default();
/// assert_eq!(config.archive_path.to_str(), Some("data/GESLA4_ALL.zip"));
///
/// // Override for another archive
/// let custom = ExtractConfig::default()
///     .with_archive_path("downloads/GESLA3.zip")
///     .with_output_dir("data/GESLA3");
/// assert_eq!(custom.output_dir.to_str(), Some("data/GESLA3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Zip archive to read.
    pub archive_path: PathBuf,

    /// Directory that receives the extracted tree.
    pub output_dir: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ExtractConfig {
    /// Creates a configuration for the given archive and destination.
    #[must_use]
    pub fn new(archive_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Sets the archive path.
    #[must_use]
    pub fn with_archive_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = path.into();
        self
    }

    /// Sets the destination directory.
    #[must_use]
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }
}
