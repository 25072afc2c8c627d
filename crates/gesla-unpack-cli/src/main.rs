//! gesla-unpack - extracts the GESLA-4 zip archive into the data directory.

mod cli;
mod error;
mod extract;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    extract::execute(&cli, &*formatter)
}
