//! Input snapshot and output chart types.

use varga_base::{
    ALL_GRAHAS, CelestialLongitude, ChartBody, Division, Dms, Graha, Rashi, VargaError,
    normalize_360,
};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Tropical position and daily motion of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInput {
    /// Tropical ecliptic longitude in degrees. Need not be normalized.
    pub tropical_longitude: f64,
    /// Longitudinal speed in degrees/day. Negative means retrograde.
    pub speed: f64,
}

impl BodyInput {
    pub const fn new(tropical_longitude: f64, speed: f64) -> Self {
        Self {
            tropical_longitude,
            speed,
        }
    }
}

/// D1 snapshot: ayanamsha, lagna and all 9 grahas at one instant.
///
/// Owned by the caller; chart assembly only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseChart {
    /// Ayanamsha in degrees, supplied by the ephemeris layer.
    pub ayanamsha: f64,
    /// Tropical longitude of the lagna.
    pub lagna_tropical: f64,
    /// Indexed by `Graha::index()`.
    pub grahas: [BodyInput; 9],
}

impl BaseChart {
    /// Build a snapshot from Surya..Shani plus Rahu (in `EPHEMERIS_GRAHAS`
    /// order). Ketu is placed opposite Rahu with the same speed.
    pub fn new(ayanamsha: f64, lagna_tropical: f64, bodies: [BodyInput; 8]) -> Self {
        let rahu = bodies[Graha::Rahu.index() as usize];
        let ketu = BodyInput {
            tropical_longitude: normalize_360(rahu.tropical_longitude + 180.0),
            speed: rahu.speed,
        };
        let grahas = std::array::from_fn(|i| if i < 8 { bodies[i] } else { ketu });
        Self {
            ayanamsha,
            lagna_tropical,
            grahas,
        }
    }

    pub fn body(&self, graha: Graha) -> BodyInput {
        self.grahas[graha.index() as usize]
    }

    /// Ketu is always retrograde; other grahas when their speed is negative.
    pub fn is_retrograde(&self, graha: Graha) -> bool {
        graha == Graha::Ketu || self.body(graha).speed < 0.0
    }

    /// Sidereal position of the lagna.
    pub fn lagna_position(&self) -> Result<CelestialLongitude, VargaError> {
        CelestialLongitude::from_tropical(ChartBody::Lagna, self.lagna_tropical, self.ayanamsha)
    }

    /// Sidereal position of one graha.
    pub fn graha_position(&self, graha: Graha) -> Result<CelestialLongitude, VargaError> {
        CelestialLongitude::from_tropical(
            ChartBody::Graha(graha),
            self.body(graha).tropical_longitude,
            self.ayanamsha,
        )
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One body's placement in a varga chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VargaPlacement {
    pub body: ChartBody,
    /// D1 sidereal longitude the placement was derived from.
    pub sidereal_longitude: f64,
    /// Sign in the varga chart.
    pub rashi: Rashi,
    /// 0-based sign index in the varga chart.
    pub rashi_index: u8,
    /// Degrees within the varga sign, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
    /// Division slot within the D1 sign.
    pub slot: u16,
    /// Whole-sign house, 1-12. `None` only when the lagna itself failed.
    pub house: Option<u8>,
    /// False when the sign came from an unverified calibration entry.
    pub verified: bool,
    pub retrograde: bool,
}

/// One complete (or partial) divisional chart.
///
/// A failed body keeps its error in place; siblings are unaffected.
#[derive(Debug, Clone, PartialEq)]
pub struct VargaChart {
    pub division: Division,
    pub lagna: Result<VargaPlacement, VargaError>,
    /// Indexed by `Graha::index()`.
    pub grahas: [Result<VargaPlacement, VargaError>; 9],
}

impl VargaChart {
    /// True when the lagna and all 9 grahas were placed.
    pub fn is_complete(&self) -> bool {
        self.lagna.is_ok() && self.grahas.iter().all(Result::is_ok)
    }

    /// Bodies that could not be placed, with the reason.
    pub fn failures(&self) -> Vec<(ChartBody, &VargaError)> {
        let lagna = self.lagna.as_ref().err().map(|e| (ChartBody::Lagna, e));
        let grahas = ALL_GRAHAS.iter().filter_map(|&g| {
            self.grahas[g.index() as usize]
                .as_ref()
                .err()
                .map(|e| (ChartBody::Graha(g), e))
        });
        lagna.into_iter().chain(grahas).collect()
    }

    pub fn failed_bodies(&self) -> Vec<ChartBody> {
        self.failures().into_iter().map(|(b, _)| b).collect()
    }

    pub fn placement(&self, graha: Graha) -> Option<&VargaPlacement> {
        self.grahas[graha.index() as usize].as_ref().ok()
    }

    pub fn lagna_rashi_index(&self) -> Option<u8> {
        self.lagna.as_ref().ok().map(|p| p.rashi_index)
    }

    pub fn rashi_of(&self, graha: Graha) -> Option<Rashi> {
        self.placement(graha).map(|p| p.rashi)
    }

    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.placement(graha).and_then(|p| p.house)
    }

    /// Successfully placed grahas, in graha order.
    pub fn placements(&self) -> impl Iterator<Item = &VargaPlacement> {
        self.grahas.iter().filter_map(|r| r.as_ref().ok())
    }
}

/// A graha is vargottama when it occupies the same sign in D1 and D9.
///
/// Charts of any other division never qualify.
pub fn is_vargottama(d1: &VargaChart, d9: &VargaChart, graha: Graha) -> bool {
    if d1.division != Division::D1 || d9.division != Division::D9 {
        return false;
    }
    match (d1.rashi_of(graha), d9.rashi_of(graha)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BaseChart {
        BaseChart::new(
            24.0,
            100.0,
            [
                BodyInput::new(280.0, 1.0),
                BodyInput::new(10.0, 13.2),
                BodyInput::new(55.0, -0.3),
                BodyInput::new(300.0, 1.2),
                BodyInput::new(40.0, 0.1),
                BodyInput::new(330.0, 1.1),
                BodyInput::new(350.0, 0.05),
                BodyInput::new(20.0, -0.05),
            ],
        )
    }

    #[test]
    fn ketu_opposite_rahu() {
        let base = sample();
        let ketu = base.body(Graha::Ketu);
        assert!((ketu.tropical_longitude - 200.0).abs() < 1e-12);
        assert!((ketu.speed - -0.05).abs() < 1e-12);
    }

    #[test]
    fn ketu_wraps() {
        let mut bodies = [BodyInput::new(0.0, 1.0); 8];
        bodies[7] = BodyInput::new(250.0, -0.05);
        let base = BaseChart::new(24.0, 0.0, bodies);
        assert!((base.body(Graha::Ketu).tropical_longitude - 70.0).abs() < 1e-12);
    }

    #[test]
    fn retrograde_flags() {
        let base = sample();
        assert!(!base.is_retrograde(Graha::Surya));
        assert!(base.is_retrograde(Graha::Mangal));
        assert!(base.is_retrograde(Graha::Rahu));
        assert!(base.is_retrograde(Graha::Ketu));
    }

    #[test]
    fn ketu_retrograde_even_with_positive_speed() {
        let bodies = [BodyInput::new(10.0, 0.5); 8];
        let base = BaseChart::new(24.0, 0.0, bodies);
        assert!(base.is_retrograde(Graha::Ketu));
    }

    #[test]
    fn positions_are_sidereal() {
        let base = sample();
        let lagna = base.lagna_position().unwrap();
        assert!((lagna.sidereal_longitude - 76.0).abs() < 1e-12);
        assert_eq!(lagna.rashi_index, 2);
        let surya = base.graha_position(Graha::Surya).unwrap();
        assert_eq!(surya.rashi_index, 8);
    }
}
