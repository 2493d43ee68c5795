//! # Classify Subcommand
//!
//! Routes a single package to a handling stack.
//!
//! ```bash
//! pkgsort classify --width 149 --height 10 --length 10 --mass 19
//! STANDARD
//!
//! pkgsort classify --width 150 --height 10 --length 10 --mass 5 --explain --format json
//! ```
//!
//! Exit code 0 on success, 2 when the measurements are rejected.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde_json::json;

use pkgsort_core::{Classification, PackageSorter, SorterError};

use crate::config::load_thresholds;
use crate::output::OutputFormat;

/// Exit code for measurements that fail validation.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Arguments for the classify subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Width in centimetres.
    #[arg(long, allow_negative_numbers = true)]
    pub width: f64,

    /// Height in centimetres.
    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,

    /// Length in centimetres.
    #[arg(long, allow_negative_numbers = true)]
    pub length: f64,

    /// Mass in kilograms.
    #[arg(long, allow_negative_numbers = true)]
    pub mass: f64,

    /// Show the volume and which thresholds were hit.
    #[arg(long)]
    pub explain: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs, config: Option<&Path>) -> Result<u8> {
    let sorter = PackageSorter::with_thresholds(load_thresholds(config)?);

    match render(&sorter, args) {
        Ok(out) => {
            println!("{out}");
            Ok(0)
        }
        Err(e) => match e.downcast_ref::<SorterError>() {
            Some(SorterError::InvalidInput { .. }) => {
                tracing::error!("{e}");
                Ok(EXIT_INVALID_INPUT)
            }
            _ => Err(e),
        },
    }
}

/// Classify and format the result without printing it.
///
/// Validation failures come back as a [`SorterError`] inside the
/// `anyhow::Error`.
pub fn render(sorter: &PackageSorter, args: &ClassifyArgs) -> Result<String> {
    let c = sorter.explain(args.width, args.height, args.length, args.mass)?;
    tracing::debug!(
        volume = c.volume,
        bulky = c.bulky,
        heavy = c.heavy,
        stack = %c.stack,
        "classified package"
    );

    let out = match (args.format, args.explain) {
        (OutputFormat::Text, false) => c.stack.to_string(),
        (OutputFormat::Text, true) => explain_text(&c),
        (OutputFormat::Json, false) => {
            serde_json::to_string_pretty(&json!({ "stack": c.stack }))?
        }
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&c)?,
    };
    Ok(out)
}

fn explain_text(c: &Classification) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let t = &c.thresholds;
    format!(
        "stack:          {}\n\
         volume:         {} cm3 (limit {})\n\
         over volume:    {}\n\
         over dimension: {} (limit {} cm)\n\
         bulky:          {}\n\
         heavy:          {} (mass {} kg, limit {})",
        c.stack,
        c.volume,
        t.max_volume(),
        yes_no(c.exceeds_max_volume),
        yes_no(c.exceeds_max_dimension),
        t.max_dimension(),
        yes_no(c.bulky),
        yes_no(c.heavy),
        c.measurement.mass(),
        t.max_mass(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ClassifyArgs,
    }

    fn parse(argv: &[&str]) -> Result<ClassifyArgs, clap::Error> {
        let mut full = vec!["classify"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).map(|c| c.args)
    }

    fn dims(w: &str, h: &str, l: &str, m: &str) -> Vec<String> {
        ["--width", w, "--height", h, "--length", l, "--mass", m]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn parse_dims(w: &str, h: &str, l: &str, m: &str, extra: &[&str]) -> ClassifyArgs {
        let owned = dims(w, h, l, m);
        let mut argv: Vec<&str> = owned.iter().map(String::as_str).collect();
        argv.extend_from_slice(extra);
        parse(&argv).unwrap()
    }

    #[test]
    fn non_numeric_argument_rejected_by_parser() {
        let owned = dims("A", "2", "3", "4");
        let argv: Vec<&str> = owned.iter().map(String::as_str).collect();
        assert!(parse(&argv).is_err());
    }

    #[test]
    fn negative_argument_reaches_validation() {
        let args = parse_dims("1", "2", "3", "-4", &[]);
        assert_eq!(args.mass, -4.0);
        let err = render(&PackageSorter::new(), &args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SorterError>(),
            Some(SorterError::InvalidInput { field: "mass", .. })
        ));
    }

    #[test]
    fn nan_argument_reaches_validation() {
        let args = parse_dims("NaN", "2", "3", "4", &[]);
        assert!(render(&PackageSorter::new(), &args).is_err());
    }

    #[test]
    fn text_output_is_label() {
        let args = parse_dims("149", "10", "10", "19", &[]);
        assert_eq!(render(&PackageSorter::new(), &args).unwrap(), "STANDARD");
    }

    #[test]
    fn json_output_has_stack() {
        let args = parse_dims("150", "10", "10", "5", &["--format", "json"]);
        let out = render(&PackageSorter::new(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["stack"], "SPECIAL");
    }

    #[test]
    fn explain_json_has_predicates() {
        let args = parse_dims("100", "100", "100", "20", &["--format", "json", "--explain"]);
        let out = render(&PackageSorter::new(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["stack"], "REJECTED");
        assert_eq!(value["bulky"], true);
        assert_eq!(value["heavy"], true);
        assert_eq!(value["exceeds_max_volume"], true);
    }

    #[test]
    fn explain_json_overflowing_volume_is_null() {
        let args = parse_dims("1e200", "1e200", "1e200", "1", &["--format", "json", "--explain"]);
        let out = render(&PackageSorter::new(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["volume"].is_null());
        assert_eq!(value["exceeds_max_volume"], true);
        assert_eq!(value["stack"], "SPECIAL");
    }

    #[test]
    fn explain_text_lists_stack_first() {
        let args = parse_dims("150", "10", "10", "5", &["--explain"]);
        let out = render(&PackageSorter::new(), &args).unwrap();
        assert!(out.starts_with("stack:          SPECIAL"));
        assert!(out.contains("over dimension: yes"));
    }
}
