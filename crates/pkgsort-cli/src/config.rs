//! # Thresholds Configuration
//!
//! Loads classification thresholds from an optional YAML file. Without a
//! file the published constants are used. Keys absent from the file keep
//! their defaults; present keys must be finite and strictly positive.
//!
//! ```yaml
//! max_volume: 1000000   # cm3
//! max_dimension: 150    # cm
//! max_mass: 20          # kg
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use pkgsort_core::Thresholds;

/// Resolve the thresholds for this invocation.
pub fn load_thresholds(path: Option<&Path>) -> Result<Thresholds> {
    let Some(path) = path else {
        tracing::debug!("no config file given; using default thresholds");
        return Ok(Thresholds::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read thresholds file {}", path.display()))?;
    let thresholds = parse_thresholds(&content)
        .with_context(|| format!("invalid thresholds file {}", path.display()))?;

    tracing::info!(path = %path.display(), %thresholds, "loaded thresholds");
    Ok(thresholds)
}

/// Parse thresholds from YAML text. An empty document yields the defaults.
pub fn parse_thresholds(content: &str) -> Result<Thresholds> {
    if content.trim().is_empty() {
        return Ok(Thresholds::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_thresholds(None).unwrap(), Thresholds::default());
    }

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse_thresholds("\n").unwrap(), Thresholds::default());
    }

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_dimension: 120.5").unwrap();
        let t = load_thresholds(Some(file.path())).unwrap();
        assert_eq!(t.max_dimension(), 120.5);
        assert_eq!(t.max_mass(), 20.0);
    }

    #[test]
    fn zero_threshold_rejected() {
        assert!(parse_thresholds("max_mass: 0\n").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let err = load_thresholds(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }
}
