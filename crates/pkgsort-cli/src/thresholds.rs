//! # Thresholds Subcommand
//!
//! Prints the thresholds a `classify` run would use with the same
//! `--config` file.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use pkgsort_core::Thresholds;

use crate::config::load_thresholds;
use crate::output::OutputFormat;

/// Arguments for the thresholds subcommand.
#[derive(Args, Debug)]
pub struct ThresholdsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the thresholds subcommand.
pub fn run_thresholds(args: &ThresholdsArgs, config: Option<&Path>) -> Result<u8> {
    let thresholds = load_thresholds(config)?;
    println!("{}", render(&thresholds, args.format)?);
    Ok(0)
}

/// Format thresholds without printing them.
pub fn render(thresholds: &Thresholds, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "max_volume:    {} cm3\nmax_dimension: {} cm\nmax_mass:      {} kg",
            thresholds.max_volume(),
            thresholds.max_dimension(),
            thresholds.max_mass()
        ),
        OutputFormat::Json => serde_json::to_string_pretty(thresholds)?,
    })
}
