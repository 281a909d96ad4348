//! Tropical to sidereal conversion.
//!
//! The ayanamsha value is supplied by the caller; this module only applies
//! it and decomposes the result.

use crate::error::VargaError;
use crate::graha::ChartBody;
use crate::rashi::decompose;
use crate::util::normalize_360;

/// Sidereal longitude `(tropical - ayanamsha) mod 360`, in [0, 360).
///
/// Inputs outside [0, 360) are accepted. Non-finite inputs propagate as NaN
/// and are rejected later by [`decompose`].
pub fn resolve(tropical_lon_deg: f64, ayanamsha_deg: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsha_deg)
}

/// One body's position in both zodiacs plus its D1 sign decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialLongitude {
    pub body: ChartBody,
    pub tropical_longitude: f64,
    /// Sidereal longitude in [0, 360).
    pub sidereal_longitude: f64,
    /// 0-based sign index (0 = Mesha).
    pub rashi_index: u8,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_rashi: f64,
}

impl CelestialLongitude {
    /// Resolve and decompose a tropical longitude.
    pub fn from_tropical(
        body: ChartBody,
        tropical_lon_deg: f64,
        ayanamsha_deg: f64,
    ) -> Result<Self, VargaError> {
        if !tropical_lon_deg.is_finite() {
            return Err(VargaError::NumericDomain(tropical_lon_deg));
        }
        if !ayanamsha_deg.is_finite() {
            return Err(VargaError::NumericDomain(ayanamsha_deg));
        }
        let sidereal = resolve(tropical_lon_deg, ayanamsha_deg);
        let (rashi_index, degrees_in_rashi) = decompose(sidereal)?;
        Ok(Self {
            body,
            tropical_longitude: tropical_lon_deg,
            sidereal_longitude: sidereal,
            rashi_index,
            degrees_in_rashi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    #[test]
    fn resolve_basic() {
        assert!((resolve(280.5, 23.853) - 256.647).abs() < 1e-9);
    }

    #[test]
    fn resolve_wraps_below_zero() {
        assert!((resolve(10.0, 24.0) - 346.0).abs() < 1e-9);
    }

    #[test]
    fn resolve_accepts_unnormalized_tropical() {
        assert!((resolve(725.0, 24.0) - 341.0).abs() < 1e-9);
        assert!((resolve(-400.0, 0.0) - 320.0).abs() < 1e-9);
    }

    #[test]
    fn from_tropical_decomposes() {
        let c = CelestialLongitude::from_tropical(ChartBody::Graha(Graha::Surya), 280.5, 23.853)
            .unwrap();
        assert_eq!(c.rashi_index, 8); // Dhanu
        assert!((c.degrees_in_rashi - 16.647).abs() < 1e-9);
        assert!((c.tropical_longitude - 280.5).abs() < 1e-15);
    }

    #[test]
    fn from_tropical_rejects_nan() {
        let err = CelestialLongitude::from_tropical(ChartBody::Lagna, f64::NAN, 24.0);
        assert!(matches!(err, Err(VargaError::NumericDomain(_))));
        let err = CelestialLongitude::from_tropical(ChartBody::Lagna, 10.0, f64::INFINITY);
        assert_eq!(err, Err(VargaError::NumericDomain(f64::INFINITY)));
    }
}
