//! CLI interface using clap
//!
//! Provides the command-line interface for codenet-extract

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// codenet-extract - structured metadata from CodeNet problem statements
#[derive(Parser, Debug)]
#[command(name = "codenet-extract")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = crate::corpus::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract every problem in a corpus directory
    Extract(ExtractArgs),

    /// Extract a single document and print the result
    Inspect(InspectArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Directory holding the problem HTML files
    #[arg(short, long, default_value = "doc/problem_descriptions")]
    pub input: PathBuf,

    /// Output JSON file (defaults to the configured output file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// HTML file to extract
    pub file: PathBuf,

    /// Also print the section map
    #[arg(short, long)]
    pub sections: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Write the default configuration file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file with --init
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::parse_from(["codenet-extract", "extract"]);
        assert_eq!(cli.config, PathBuf::from("codenet-extract.toml"));
        assert!(!cli.verbose);

        let Commands::Extract(args) = cli.command else {
            panic!("expected extract command");
        };
        assert_eq!(args.input, PathBuf::from("doc/problem_descriptions"));
        assert!(args.output.is_none());
        assert!(!args.pretty);
    }

    #[test]
    fn test_extract_arguments() {
        let cli = Cli::parse_from([
            "codenet-extract",
            "extract",
            "--input",
            "corpus",
            "--output",
            "out.json",
            "--pretty",
            "-v",
        ]);
        assert!(cli.verbose);
        if let Commands::Extract(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("corpus"));
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
            assert!(args.pretty);
        }
    }

    #[test]
    fn test_inspect_command() {
        let cli = Cli::parse_from(["codenet-extract", "inspect", "p00001.html", "--sections"]);
        if let Commands::Inspect(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("p00001.html"));
            assert!(args.sections);
        } else {
            panic!("expected inspect command");
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["codenet-extract", "config", "--init", "--config", "my.toml"]);
        assert_eq!(cli.config, PathBuf::from("my.toml"));
        assert!(matches!(cli.command, Commands::Config(ConfigArgs { init: true, .. })));
    }
}
