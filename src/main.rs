//! CLI entry point for shape-mosaic pixelation

use clap::Parser;
use pixeltile::io::cli::{Cli, FileProcessor};
use pixeltile::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> pixeltile::Result<()> {
    let cli = Cli::parse();

    let fallback = if cli.quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut processor = FileProcessor::new(cli)?;
    let processed = processor.process()?;
    tracing::debug!(processed, "batch complete");
    Ok(())
}
