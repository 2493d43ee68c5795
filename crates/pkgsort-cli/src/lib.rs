//! # pkgsort-cli: Package Sorter Command-Line Interface
//!
//! Classifies one package per invocation from the shell.
//!
//! ## Subcommands
//!
//! - `classify`: Route a package to STANDARD, SPECIAL, or REJECTED
//! - `thresholds`: Print the effective thresholds
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `pkgsort-core`; no classification logic here.
//! - Handlers return an exit code; `main` owns tracing setup and error reporting.

pub mod classify;
pub mod config;
pub mod output;
pub mod thresholds;
