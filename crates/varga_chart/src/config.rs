//! Chart configuration.
//!
//! ```toml
//! divisions = [1, 9, 10]
//!
//! [calibration]
//! source = "file"
//! path = "calibration.json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use varga_base::{CalibrationTable, Division, SHODASHAVARGA};

use crate::error::ChartError;

/// Where the calibration table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CalibrationSource {
    /// Table bundled with `varga_base`.
    #[default]
    Embedded,
    /// No table: calibrated divisions report every body as unavailable.
    Disabled,
    File { path: PathBuf },
}

impl CalibrationSource {
    pub fn load(&self) -> Result<CalibrationTable, ChartError> {
        let table = match self {
            Self::Embedded => CalibrationTable::embedded()?,
            Self::Disabled => CalibrationTable::default(),
            Self::File { path } => CalibrationTable::load(path)?,
        };
        Ok(table)
    }
}

/// Configuration for a [`crate::VargaEngine`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// D-number codes computed by default, in output order.
    pub divisions: Vec<u16>,
    pub calibration: CalibrationSource,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            divisions: SHODASHAVARGA.iter().map(|d| d.code()).collect(),
            calibration: CalibrationSource::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        Ok(toml::from_str(s)?)
    }

    /// Read a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Validate the configured codes.
    pub fn resolved_divisions(&self) -> Result<Vec<Division>, ChartError> {
        self.divisions
            .iter()
            .map(|&code| Division::from_code(code).map_err(ChartError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varga_base::VargaError;

    #[test]
    fn default_is_shodashavarga_embedded() {
        let config = ChartConfig::default();
        assert_eq!(config.divisions.len(), 16);
        assert_eq!(config.calibration, CalibrationSource::Embedded);
        assert_eq!(config.resolved_divisions().unwrap(), SHODASHAVARGA.to_vec());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn parses_file_source() {
        let config = ChartConfig::from_toml_str(
            r#"
            divisions = [1, 9, 10]

            [calibration]
            source = "file"
            path = "/etc/varga/calibration.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.divisions, vec![1, 9, 10]);
        assert_eq!(
            config.calibration,
            CalibrationSource::File {
                path: PathBuf::from("/etc/varga/calibration.json")
            }
        );
    }

    #[test]
    fn parses_disabled_source() {
        let config = ChartConfig::from_toml_str("[calibration]\nsource = \"disabled\"\n").unwrap();
        assert_eq!(config.calibration, CalibrationSource::Disabled);
        assert!(config.calibration.load().unwrap().divisions().next().is_none());
    }

    #[test]
    fn rejects_unknown_key() {
        assert!(matches!(
            ChartConfig::from_toml_str("ayanamsha = 24.0\n"),
            Err(ChartError::Config(_))
        ));
    }

    #[test]
    fn unsupported_code_surfaces_on_resolve() {
        let config = ChartConfig::from_toml_str("divisions = [9, 5]\n").unwrap();
        assert_eq!(
            config.resolved_divisions(),
            Err(ChartError::Varga(VargaError::UnsupportedDivision(5)))
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            ChartConfig::load("/nonexistent/varga.toml"),
            Err(ChartError::Io(_))
        ));
    }
}
