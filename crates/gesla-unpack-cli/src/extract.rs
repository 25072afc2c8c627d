//! Extraction run.

use crate::cli::Cli;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use gesla_unpack_core::Extractor;
use gesla_unpack_core::NoopProgress;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let extractor = Extractor::new(cli.config());
    let config = extractor.config();

    // Progress bar only on an interactive terminal with human output
    let report = if !cli.quiet && !cli.json && CliProgress::should_show() {
        let mut progress = CliProgress::new("Extracting");
        add_archive_context(extractor.extract(&mut progress), &config.archive_path)?
    } else {
        add_archive_context(extractor.extract(&mut NoopProgress), &config.archive_path)?
    };

    for warning in &report.warnings {
        formatter.format_warning(warning);
    }

    formatter.format_extraction_result(&config.output_dir, &report)
}
