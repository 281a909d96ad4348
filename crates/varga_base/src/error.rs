//! Error types for varga calculations.

use thiserror::Error;

/// Errors from the varga rule engine and calibration loader.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VargaError {
    /// Division count outside the supported traditional set.
    #[error("unsupported division: D{0}")]
    UnsupportedDivision(u16),
    /// Calibrated-lookup division has no table entry for this position.
    #[error("calibration unavailable: D{division} sign {sign} slot {slot}")]
    CalibrationUnavailable { division: u16, sign: u8, slot: u16 },
    /// Calibration resource failed validation; nothing from it is trusted.
    #[error("malformed calibration table: {0}")]
    MalformedCalibrationTable(String),
    /// Input longitude is NaN or infinite.
    #[error("non-finite longitude: {0}")]
    NumericDomain(f64),
    /// Degree within sign outside [0, 30].
    #[error("degree within sign out of range: {0}")]
    DegreeOutOfRange(f64),
    /// Sign index outside 0..=11.
    #[error("sign index out of range: {0}")]
    InvalidSign(u8),
    /// Calibration resource could not be read.
    #[error("cannot read calibration resource: {0}")]
    Io(String),
}

impl VargaError {
    /// Whether this failure is a per-body data gap rather than a
    /// request-level structural failure.
    pub fn is_body_level(&self) -> bool {
        matches!(
            self,
            Self::CalibrationUnavailable { .. }
                | Self::NumericDomain(_)
                | Self::DegreeOutOfRange(_)
                | Self::InvalidSign(_)
        )
    }
}
