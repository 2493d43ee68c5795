//! # pkgsort-core: Package Handling Classifier
//!
//! Decides which handling stack a package goes to from its width, height,
//! length (cm) and mass (kg).
//!
//! ## Key Design Principles
//!
//! 1. **Validated measurements.** `PackageMeasurement` can only be built from
//!    finite, strictly positive values. Validation runs before any predicate.
//!
//! 2. **Single `Stack` enum.** `STANDARD`, `SPECIAL`, `REJECTED` are a closed
//!    enum with one decision table (`Stack::from_predicates`). Every `match`
//!    on `Stack` is exhaustive.
//!
//! 3. **Immutable thresholds.** `Thresholds` is fixed at construction and
//!    checked for positivity, whether built in code or read from a file.
//!
//! 4. **Pure classification.** `PackageSorter::classify` depends only on its
//!    arguments and the sorter's thresholds.
//!
//! ## Crate Policy
//!
//! - No internal dependencies (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No logging; errors are returned to the caller.

pub mod error;
pub mod measurement;
pub mod sorter;
pub mod stack;
pub mod thresholds;

// Re-export primary types for ergonomic imports.
pub use error::{InvalidReason, SorterError};
pub use measurement::PackageMeasurement;
pub use sorter::{volume, Classification, PackageSorter};
pub use stack::Stack;
pub use thresholds::{
    RawThresholds, Thresholds, BULKY_MAX_DIMENSION_CM, BULKY_MAX_VOLUME_CM3, HEAVY_MAX_MASS_KG,
};
