//! # Stack: Handling Outcome
//!
//! The closed set of handling stacks a package can be routed to. Every
//! consumer matches exhaustively, so adding a stack forces each call
//! site to handle it at compile time.
//!
//! ## Decision Table
//!
//! | bulky | heavy | Stack    |
//! |-------|-------|----------|
//! | yes   | yes   | REJECTED |
//! | yes   | no    | SPECIAL  |
//! | no    | yes   | SPECIAL  |
//! | no    | no    | STANDARD |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SorterError;

/// Handling stack assigned to a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stack {
    /// Neither bulky nor heavy. Normal handling.
    Standard,
    /// Bulky or heavy, but not both. Manual handling.
    Special,
    /// Bulky and heavy. Not accepted.
    Rejected,
}

impl Stack {
    /// Returns all stacks in canonical order.
    pub fn all() -> &'static [Stack] {
        &[Self::Standard, Self::Special, Self::Rejected]
    }

    /// Apply the decision table.
    pub fn from_predicates(bulky: bool, heavy: bool) -> Self {
        match (bulky, heavy) {
            (true, true) => Self::Rejected,
            (true, false) | (false, true) => Self::Special,
            (false, false) => Self::Standard,
        }
    }

    /// Label used in output and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Special => "SPECIAL",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stack {
    type Err = SorterError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|stack| stack.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SorterError::UnknownStack(s.to_string()))
    }
}
