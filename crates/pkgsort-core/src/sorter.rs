//! # Package Sorter
//!
//! Routes a package to a [`Stack`] from its dimensions and mass.
//!
//! A package is **bulky** when its volume reaches `max_volume` or any
//! single side reaches `max_dimension`. It is **heavy** when its mass
//! reaches `max_mass`. All comparisons are inclusive: a value exactly at
//! a threshold counts as exceeding it.
//!
//! Input validation always runs before any predicate is evaluated, and
//! the result depends on nothing but the four inputs and the thresholds
//! held by the sorter. A `PackageSorter` is `Copy` and holds no interior
//! state, so one instance can be shared freely between threads.

use serde::Serialize;

use crate::error::SorterError;
use crate::measurement::PackageMeasurement;
use crate::stack::Stack;
use crate::thresholds::Thresholds;

/// width × height × length.
pub fn volume(width: f64, height: f64, length: f64) -> f64 {
    width * height * length
}

/// Full record of a single classification decision.
///
/// `volume` is the raw product of the three sides. Finite sides can still
/// overflow it to `+inf` (e.g. three sides of `1e200`); the package is then
/// bulky as expected, and `serde_json` renders the volume as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub measurement: PackageMeasurement,
    pub thresholds: Thresholds,
    pub volume: f64,
    pub exceeds_max_volume: bool,
    pub exceeds_max_dimension: bool,
    pub bulky: bool,
    pub heavy: bool,
    pub stack: Stack,
}

/// Classifier holding an immutable set of thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PackageSorter {
    thresholds: Thresholds,
}

impl PackageSorter {
    /// Sorter using the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorter using custom thresholds.
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn max_volume(&self) -> f64 {
        self.thresholds.max_volume()
    }

    pub fn max_dimension(&self) -> f64 {
        self.thresholds.max_dimension()
    }

    pub fn max_mass(&self) -> f64 {
        self.thresholds.max_mass()
    }

    /// Check that all four inputs are finite and strictly positive.
    ///
    /// # Errors
    ///
    /// [`SorterError::InvalidInput`] naming the first bad field.
    pub fn validate(
        &self,
        width: f64,
        height: f64,
        length: f64,
        mass: f64,
    ) -> Result<PackageMeasurement, SorterError> {
        PackageMeasurement::new(width, height, length, mass)
    }

    pub fn exceeds_max_volume(&self, width: f64, height: f64, length: f64) -> bool {
        volume(width, height, length) >= self.thresholds.max_volume()
    }

    pub fn exceeds_max_dimension(&self, width: f64, height: f64, length: f64) -> bool {
        [width, height, length]
            .iter()
            .any(|&side| side >= self.thresholds.max_dimension())
    }

    /// Volume or any single side at or above its threshold.
    pub fn is_bulky(&self, width: f64, height: f64, length: f64) -> bool {
        self.exceeds_max_volume(width, height, length)
            || self.exceeds_max_dimension(width, height, length)
    }

    /// Mass at or above the mass threshold.
    pub fn is_heavy(&self, mass: f64) -> bool {
        mass >= self.thresholds.max_mass()
    }

    /// Classify a package.
    ///
    /// # Errors
    ///
    /// [`SorterError::InvalidInput`] if any input is NaN, infinite, zero,
    /// or negative. No other failure is possible.
    pub fn classify(
        &self,
        width: f64,
        height: f64,
        length: f64,
        mass: f64,
    ) -> Result<Stack, SorterError> {
        let measurement = self.validate(width, height, length, mass)?;
        Ok(self.classify_measurement(&measurement))
    }

    /// Classify an already-validated measurement. Total.
    pub fn classify_measurement(&self, m: &PackageMeasurement) -> Stack {
        let bulky = self.is_bulky(m.width(), m.height(), m.length());
        let heavy = self.is_heavy(m.mass());
        Stack::from_predicates(bulky, heavy)
    }

    /// Classify and report every intermediate predicate.
    pub fn explain(
        &self,
        width: f64,
        height: f64,
        length: f64,
        mass: f64,
    ) -> Result<Classification, SorterError> {
        let measurement = self.validate(width, height, length, mass)?;
        let exceeds_max_volume = self.exceeds_max_volume(width, height, length);
        let exceeds_max_dimension = self.exceeds_max_dimension(width, height, length);
        let bulky = exceeds_max_volume || exceeds_max_dimension;
        let heavy = self.is_heavy(mass);

        Ok(Classification {
            measurement,
            thresholds: self.thresholds,
            volume: measurement.volume(),
            exceeds_max_volume,
            exceeds_max_dimension,
            bulky,
            heavy,
            stack: Stack::from_predicates(bulky, heavy),
        })
    }
}
