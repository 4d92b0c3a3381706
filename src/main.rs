//! Entry point for the ncgen application.
//! Parses the CLI and writes one fixture file with default settings and the chosen time resolution.

use clap::Parser;
use ncgen::cli::Args;
use ncgen::generator::{generate, FixtureConfig};
use ncgen::logging::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing("warn");

    let config = FixtureConfig::default().with_timescale(args.tres);
    generate(&args.outfile, &config)?;

    Ok(())
}
