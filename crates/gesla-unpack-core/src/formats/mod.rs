//! Archive format implementations.

pub mod zip;

pub use self::zip::ZipExtractor;
