//! Rashi (zodiac sign) decomposition and DMS conversion.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! A sidereal longitude decomposes into a 0-based sign index and the
//! degrees within that sign. Boundaries are inclusive at the start of a sign
//! and exclusive at the end: 29.999999 stays in its sign, 30.0 moves on.

use crate::error::VargaError;
use crate::util::normalize_360;

/// Largest representable degree-within-sign strictly below 30.
pub const MAX_DEGREE_IN_SIGN: f64 = f64::from_bits(30.0f64.to_bits() - 1);

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index.
    pub fn from_index(index: u8) -> Result<Rashi, VargaError> {
        ALL_RASHIS
            .get(index as usize)
            .copied()
            .ok_or(VargaError::InvalidSign(index))
    }
}

// ---------------------------------------------------------------------------
// Sign qualities
// ---------------------------------------------------------------------------

/// Rashi element classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl RashiElement {
    /// Position in the fixed fire/earth/air/water order.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Determine the element of a rashi by 0-based index.
///
/// Fire: 0,4,8 (Mesha, Simha, Dhanu)
/// Earth: 1,5,9 (Vrishabha, Kanya, Makara)
/// Air: 2,6,10 (Mithuna, Tula, Kumbha)
/// Water: 3,7,11 (Karka, Vrischika, Meena)
pub fn rashi_element(rashi_index: u8) -> RashiElement {
    match rashi_index % 4 {
        0 => RashiElement::Fire,
        1 => RashiElement::Earth,
        2 => RashiElement::Air,
        _ => RashiElement::Water,
    }
}

/// Movable (chara), fixed (sthira) or dual (dwiswabhava) nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiNature {
    Movable,
    Fixed,
    Dual,
}

impl RashiNature {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Movable: 0,3,6,9. Fixed: 1,4,7,10. Dual: 2,5,8,11.
pub fn rashi_nature(rashi_index: u8) -> RashiNature {
    match rashi_index % 3 {
        0 => RashiNature::Movable,
        1 => RashiNature::Fixed,
        _ => RashiNature::Dual,
    }
}

/// Classical (1-based) odd sign: Mesha, Mithuna, Simha, ...
///
/// These are the even 0-based indices.
pub const fn is_odd_rashi(rashi_index: u8) -> bool {
    rashi_index % 2 == 0
}

// ---------------------------------------------------------------------------
// DMS
// ---------------------------------------------------------------------------

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

// ---------------------------------------------------------------------------
// Decomposition
// ---------------------------------------------------------------------------

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi, [0.0, 30.0).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Split a sidereal longitude into `(sign_index, degree_in_sign)`.
///
/// The input is re-normalized to [0, 360) first. Floor semantics throughout:
/// the sign index never rounds up, and the degree is clamped strictly below
/// 30. Only non-finite input fails.
pub fn decompose(sidereal_lon_deg: f64) -> Result<(u8, f64), VargaError> {
    if !sidereal_lon_deg.is_finite() {
        return Err(VargaError::NumericDomain(sidereal_lon_deg));
    }
    let lon = normalize_360(sidereal_lon_deg);
    let mut idx = ((lon / 30.0).floor() as i32).clamp(0, 11);
    let mut deg = lon - idx as f64 * 30.0;
    // lon / 30 can round up across a boundary for values a few ulps short of it
    if deg < 0.0 {
        idx -= 1;
        deg += 30.0;
    }
    Ok((idx as u8, deg.clamp(0.0, MAX_DEGREE_IN_SIGN)))
}

/// Determine rashi from sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Result<RashiInfo, VargaError> {
    let (rashi_index, degrees_in_rashi) = decompose(sidereal_lon_deg)?;
    Ok(RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    })
}
