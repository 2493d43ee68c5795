//! # pkgsort CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pkgsort_cli::classify::{run_classify, ClassifyArgs};
use pkgsort_cli::thresholds::{run_thresholds, ThresholdsArgs};

/// Package sorter: route packages to STANDARD, SPECIAL, or REJECTED.
///
/// A package is bulky when its volume or any side reaches the limit, and
/// heavy when its mass reaches the limit. Bulky and heavy is REJECTED,
/// either one is SPECIAL, neither is STANDARD.
#[derive(Parser, Debug)]
#[command(name = "pkgsort", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML thresholds file.
    #[arg(long, alias = "thresholds", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify one package by its dimensions and mass.
    Classify(ClassifyArgs),

    /// Print the effective thresholds.
    Thresholds(ThresholdsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Classify(args) => run_classify(args, config),
        Commands::Thresholds(args) => run_thresholds(args, config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
