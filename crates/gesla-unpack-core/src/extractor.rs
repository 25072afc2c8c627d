//! Directory-then-archive extraction sequence.

use std::time::Instant;

use crate::ExtractConfig;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::formats::ZipExtractor;
use crate::types::DestDir;

/// Runs one extraction described by an [`ExtractConfig`].
///
/// The destination directory is created before the archive is opened, so a
/// missing archive still leaves an (empty) destination behind.
///
/// # Examples
///
/// ```no_run
/// use gesla_unpack_core::ExtractConfig;
/// use gesla_unpack_core::Extractor;
/// use gesla_unpack_core::NoopProgress;
///
/// # fn main() -> Result<(), gesla_unpack_core::ExtractionError> {
/// let extractor = Extractor::new(ExtractConfig::default());
/// let report = extractor.extract(&mut NoopProgress)?;
/// println!("{} entries in {:?}", report.total_items(), report.duration);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Creates a new extractor with the given configuration.
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Ensures the destination exists, then unpacks the archive into it.
    ///
    /// # Errors
    ///
    /// Returns the first failure; no retries, no rollback.
    pub fn extract(&self, progress: &mut dyn ProgressCallback) -> Result<ExtractionReport> {
        let start = Instant::now();

        let dest = DestDir::ensure(&self.config.output_dir)?;

        // Archive handle lives until the end of this scope.
        let mut archive = ZipExtractor::open(&self.config.archive_path)?;
        let mut report = archive.extract(&dest, progress)?;

        report.duration = start.elapsed();
        Ok(report)
    }
}
