//! Error types for chart assembly and configuration.

use thiserror::Error;
use varga_base::VargaError;

/// Request-level failures. Body-level failures stay inside the chart.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the varga rule engine or calibration loader.
    #[error("varga error: {0}")]
    Varga(#[from] VargaError),
    /// Configuration file could not be read.
    #[error("cannot read config: {0}")]
    Io(String),
    /// Configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ChartError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
