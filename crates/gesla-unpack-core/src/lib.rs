//! Zip extraction library for the GESLA dataset unpacker.
//!
//! `gesla-unpack-core` makes sure a destination directory exists and then
//! unpacks every entry of a zip archive into it, keeping the archive's
//! relative paths and overwriting files that collide.
//!
//! # Examples
//!
//! ```no_run
//! use gesla_unpack_core::extract_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = extract_archive("data/GESLA4_ALL.zip", "data/GESLA4_ALL")?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod extractor;
pub mod formats;
pub mod report;
#[doc(hidden)]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::extract_archive;
pub use api::extract_archive_with_progress;
pub use config::DEFAULT_ARCHIVE_PATH;
pub use config::DEFAULT_OUTPUT_DIR;
pub use config::ExtractConfig;
pub use error::ErrorKind;
pub use error::ExtractionError;
pub use error::Result;
pub use extractor::Extractor;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;

pub use types::DestDir;
pub use types::EntryPath;
