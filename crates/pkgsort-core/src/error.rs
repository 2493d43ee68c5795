//! # Error Types
//!
//! Errors raised by the classifier. All use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! Classification itself is total. The only failure paths are rejected
//! measurements, rejected custom thresholds, and unknown stack labels.

use thiserror::Error;

/// Top-level error type for the package sorter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SorterError {
    /// A measurement was NaN, infinite, zero, or negative.
    #[error("invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        /// Name of the offending measurement (`width`, `height`, `length`, `mass`).
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: InvalidReason,
    },

    /// A custom threshold was NaN, infinite, zero, or negative.
    #[error("invalid threshold: {name} = {value} ({reason})")]
    InvalidThreshold {
        /// Name of the offending threshold.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: InvalidReason,
    },

    /// A stack label did not match any known stack.
    #[error("unknown stack label: {0:?}")]
    UnknownStack(String),
}

/// Why a numeric value failed the positivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// NaN or infinite.
    NotFinite,
    /// Zero or negative.
    NotPositive,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite => f.write_str("must be a finite number"),
            Self::NotPositive => f.write_str("must be greater than zero"),
        }
    }
}

/// Check that `value` is finite and strictly positive.
pub(crate) fn check_positive(value: f64) -> Result<(), InvalidReason> {
    if !value.is_finite() {
        return Err(InvalidReason::NotFinite);
    }
    if value <= 0.0 {
        return Err(InvalidReason::NotPositive);
    }
    Ok(())
}
