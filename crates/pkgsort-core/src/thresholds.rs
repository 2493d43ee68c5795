//! # Thresholds
//!
//! The three limits that decide whether a package is bulky or heavy.
//! Defaults are the published constants; custom values are accepted
//! only if they are finite and strictly positive, and are never
//! mutated after construction.
//!
//! A thresholds file deserializes through [`RawThresholds`] so that
//! values read from YAML or JSON pass the same checks as
//! [`Thresholds::new()`].

use serde::{Deserialize, Serialize};

use crate::error::{check_positive, SorterError};

/// Volume (cm³) at or above which a package is bulky.
pub const BULKY_MAX_VOLUME_CM3: f64 = 1_000_000.0;

/// Single-side length (cm) at or above which a package is bulky.
pub const BULKY_MAX_DIMENSION_CM: f64 = 150.0;

/// Mass (kg) at or above which a package is heavy.
pub const HEAVY_MAX_MASS_KG: f64 = 20.0;

/// Immutable set of classification limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    max_volume: f64,
    max_dimension: f64,
    max_mass: f64,
}

impl Thresholds {
    /// Build custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`SorterError::InvalidThreshold`] naming the first value
    /// that is NaN, infinite, zero, or negative.
    pub fn new(max_volume: f64, max_dimension: f64, max_mass: f64) -> Result<Self, SorterError> {
        for (name, value) in [
            ("max_volume", max_volume),
            ("max_dimension", max_dimension),
            ("max_mass", max_mass),
        ] {
            check_positive(value)
                .map_err(|reason| SorterError::InvalidThreshold { name, value, reason })?;
        }
        Ok(Self {
            max_volume,
            max_dimension,
            max_mass,
        })
    }

    /// Volume limit in cm³.
    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Single-dimension limit in cm.
    pub fn max_dimension(&self) -> f64 {
        self.max_dimension
    }

    /// Mass limit in kg.
    pub fn max_mass(&self) -> f64 {
        self.max_mass
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_volume: BULKY_MAX_VOLUME_CM3,
            max_dimension: BULKY_MAX_DIMENSION_CM,
            max_mass: HEAVY_MAX_MASS_KG,
        }
    }
}

impl std::fmt::Display for Thresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "max_volume={} cm3, max_dimension={} cm, max_mass={} kg",
            self.max_volume, self.max_dimension, self.max_mass
        )
    }
}

/// Unvalidated thresholds as they appear in a config file.
///
/// Missing keys fall back to the default constants.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawThresholds {
    pub max_volume: f64,
    pub max_dimension: f64,
    pub max_mass: f64,
}

impl Default for RawThresholds {
    fn default() -> Self {
        Self {
            max_volume: BULKY_MAX_VOLUME_CM3,
            max_dimension: BULKY_MAX_DIMENSION_CM,
            max_mass: HEAVY_MAX_MASS_KG,
        }
    }
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = SorterError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.max_volume, raw.max_dimension, raw.max_mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;

    #[test]
    fn default_matches_constants() {
        let t = Thresholds::default();
        assert_eq!(t.max_volume(), 1_000_000.0);
        assert_eq!(t.max_dimension(), 150.0);
        assert_eq!(t.max_mass(), 20.0);
    }

    #[test]
    fn new_accepts_positive_values() {
        let t = Thresholds::new(8.0, 2.5, 0.5).unwrap();
        assert_eq!(t.max_volume(), 8.0);
        assert_eq!(t.max_dimension(), 2.5);
        assert_eq!(t.max_mass(), 0.5);
    }

    #[test]
    fn new_rejects_first_bad_value() {
        let err = Thresholds::new(1.0, 0.0, -1.0).unwrap_err();
        assert_eq!(
            err,
            SorterError::InvalidThreshold {
                name: "max_dimension",
                value: 0.0,
                reason: InvalidReason::NotPositive,
            }
        );
    }

    #[test]
    fn new_rejects_nan() {
        let err = Thresholds::new(f64::NAN, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            SorterError::InvalidThreshold {
                name: "max_volume",
                reason: InvalidReason::NotFinite,
                ..
            }
        ));
    }

    #[test]
    fn yaml_partial_file_uses_defaults() {
        let t: Thresholds = serde_yaml::from_str("max_mass: 30\n").unwrap();
        assert_eq!(t.max_mass(), 30.0);
        assert_eq!(t.max_volume(), BULKY_MAX_VOLUME_CM3);
        assert_eq!(t.max_dimension(), BULKY_MAX_DIMENSION_CM);
    }

    #[test]
    fn yaml_negative_value_rejected() {
        let result: Result<Thresholds, _> = serde_yaml::from_str("max_volume: -5\n");
        assert!(result.is_err());
    }

    #[test]
    fn yaml_unknown_key_rejected() {
        let result: Result<Thresholds, _> = serde_yaml::from_str("max_weight: 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn json_serializes_field_names() {
        let json = serde_json::to_value(Thresholds::default()).unwrap();
        assert_eq!(json["max_volume"], 1_000_000.0);
        assert_eq!(json["max_dimension"], 150.0);
        assert_eq!(json["max_mass"], 20.0);
    }
}
