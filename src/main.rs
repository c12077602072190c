//! codenet-extract - CodeNet problem statement extractor
//!
//! Batch-converts Project CodeNet HTML problem pages into a single JSON file
//! of structured problem records.

use anyhow::Result;
use codenet_extract::cli::{configure, extract_corpus, inspect, print_summary, Cli, Commands};
use codenet_extract::corpus::ExtractorConfig;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Extract(args) => {
            let config = ExtractorConfig::load_or_default(&cli.config)?;
            let output = args
                .output
                .unwrap_or_else(|| PathBuf::from(&config.output_file));

            let summary = extract_corpus(&args.input, &output, args.pretty, &config)?;
            print_summary(&summary);
        }

        Commands::Inspect(args) => {
            let config = ExtractorConfig::load_or_default(&cli.config)?;
            inspect(&args.file, args.sections, &config)?;
        }

        Commands::Config(args) => {
            configure(&cli.config, args.show, args.init, args.force)?;
        }
    }

    Ok(())
}
