//! CLI argument parsing using clap.
//!
//! Every argument is optional; a bare `gesla-unpack` extracts
//! `data/GESLA4_ALL.zip` into `data/GESLA4_ALL`.

use clap::Parser;
use gesla_unpack_core::DEFAULT_ARCHIVE_PATH;
use gesla_unpack_core::DEFAULT_OUTPUT_DIR;
use gesla_unpack_core::ExtractConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gesla-unpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Zip archive to extract
    #[arg(short, long, value_name = "ARCHIVE", default_value = DEFAULT_ARCHIVE_PATH)]
    pub archive: PathBuf,

    /// Directory to extract into (created if missing)
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// Builds the extraction configuration from the parsed arguments.
    pub fn config(&self) -> ExtractConfig {
        ExtractConfig::new(&self.archive, &self.output_dir)
    }
}
