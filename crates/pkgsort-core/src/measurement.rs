//! # Package Measurement
//!
//! Validated width, height, length (cm) and mass (kg) of one package.
//! A `PackageMeasurement` can only be built through [`PackageMeasurement::new()`],
//! so every value that reaches the decision table is finite and positive.

use serde::Serialize;

use crate::error::{check_positive, SorterError};

/// Dimensions and mass of a single package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackageMeasurement {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl PackageMeasurement {
    /// Validate and wrap the four measurements.
    ///
    /// Fields are checked in the order width, height, length, mass.
    ///
    /// # Errors
    ///
    /// Returns [`SorterError::InvalidInput`] for the first value that is
    /// NaN, infinite, zero, or negative.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self, SorterError> {
        for (field, value) in [
            ("width", width),
            ("height", height),
            ("length", length),
            ("mass", mass),
        ] {
            check_positive(value)
                .map_err(|reason| SorterError::InvalidInput { field, value, reason })?;
        }
        Ok(Self {
            width,
            height,
            length,
            mass,
        })
    }

    /// Width in cm.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in cm.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Length in cm.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Mass in kg.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The three side lengths.
    pub fn dimensions(&self) -> [f64; 3] {
        [self.width, self.height, self.length]
    }

    /// width × height × length, in cm³.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }
}
