//! Division (varga) definitions and the per-division rule engine.
//!
//! Each supported division splits the 30-degree sign into N equal slots and
//! maps every slot to a target sign. Every division is bound to exactly one
//! [`RuleFamily`]; the family carries only the parameters it needs.
//!
//! Slot index is `floor(degree_in_sign * N / 30)`, clamped to `[0, N-1]`.

use crate::calibration::CalibrationTable;
use crate::error::VargaError;
use crate::rashi::{MAX_DEGREE_IN_SIGN, is_odd_rashi, rashi_element, rashi_nature};

// ---------------------------------------------------------------------------
// Division enum
// ---------------------------------------------------------------------------

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Division {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All supported divisions in order.
pub const ALL_DIVISIONS: [Division; 16] = [
    Division::D1,
    Division::D2,
    Division::D3,
    Division::D4,
    Division::D7,
    Division::D9,
    Division::D10,
    Division::D12,
    Division::D16,
    Division::D20,
    Division::D24,
    Division::D27,
    Division::D30,
    Division::D40,
    Division::D45,
    Division::D60,
];

/// Standard 16 Shodashavarga charts from BPHS.
pub const SHODASHAVARGA: [Division; 16] = ALL_DIVISIONS;

impl Division {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Numeric D-number code.
    pub const fn code(self) -> u16 {
        self.divisions()
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "D1_Rashi",
            Self::D2 => "D2_Hora",
            Self::D3 => "D3_Drekkana",
            Self::D4 => "D4_Chaturthamsha",
            Self::D7 => "D7_Saptamsha",
            Self::D9 => "D9_Navamsha",
            Self::D10 => "D10_Dashamsha",
            Self::D12 => "D12_Dwadashamsha",
            Self::D16 => "D16_Shodashamsha",
            Self::D20 => "D20_Vimshamsha",
            Self::D24 => "D24_Chaturvimshamsha",
            Self::D27 => "D27_Bhamsha",
            Self::D30 => "D30_Trimshamsha",
            Self::D40 => "D40_Khavedamsha",
            Self::D45 => "D45_Akshavedamsha",
            Self::D60 => "D60_Shashtiamsha",
        }
    }

    /// 0-based index into ALL_DIVISIONS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Reverse lookup from D-number code.
    pub fn from_code(code: u16) -> Result<Division, VargaError> {
        ALL_DIVISIONS
            .iter()
            .copied()
            .find(|d| d.code() == code)
            .ok_or(VargaError::UnsupportedDivision(code))
    }

    /// The fixed rule definition for this division.
    pub const fn spec(self) -> DivisionSpec {
        let family = match self {
            Self::D1 => RuleFamily::SequentialOffset {
                starts: NATAL_STARTS,
                stride: 1,
            },
            Self::D2 => RuleFamily::SequentialOffset {
                starts: multiplied_starts(2),
                stride: 1,
            },
            Self::D3 => RuleFamily::CalibratedLookup,
            // Kendras from the natal sign: 1st, 4th, 7th, 10th
            Self::D4 => RuleFamily::SequentialOffset {
                starts: NATAL_STARTS,
                stride: 3,
            },
            Self::D7 => RuleFamily::SequentialOffset {
                starts: parity_starts(6),
                stride: 1,
            },
            // Continuous count: Mesha for fire, Makara for earth, Tula for air,
            // Karka for water
            Self::D9 => RuleFamily::SequentialOffset {
                starts: multiplied_starts(9),
                stride: 1,
            },
            Self::D10 => RuleFamily::SequentialOffset {
                starts: parity_starts(8),
                stride: 1,
            },
            Self::D12 => RuleFamily::SequentialOffset {
                starts: NATAL_STARTS,
                stride: 1,
            },
            Self::D16 => RuleFamily::SequentialOffset {
                starts: nature_starts(0, 4, 8),
                stride: 1,
            },
            Self::D20 => RuleFamily::SequentialOffset {
                starts: nature_starts(0, 8, 4),
                stride: 1,
            },
            Self::D24 => RuleFamily::ElementGrouped {
                starts: [4, 3, 4, 3],
            },
            Self::D27 => RuleFamily::ElementGrouped {
                starts: [0, 3, 6, 9],
            },
            Self::D30 => RuleFamily::ParityReversed {
                forward_starts: [0, 2, 4, 6, 8, 10],
                backward_starts: [1, 3, 5, 7, 9, 11],
            },
            // Odd signs from Mesha, even signs from Tula
            Self::D40 => RuleFamily::NatureParity {
                starts: [KHAVEDAMSHA_STARTS; 3],
            },
            Self::D45 => RuleFamily::ElementGrouped {
                starts: [0, 9, 6, 3],
            },
            // Every sign starts from itself
            Self::D60 => RuleFamily::NatureParity {
                starts: [NATAL_STARTS; 3],
            },
        };
        DivisionSpec {
            division: self,
            family,
        }
    }
}

impl TryFrom<u16> for Division {
    type Error = VargaError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

// ---------------------------------------------------------------------------
// Rule families
// ---------------------------------------------------------------------------

/// How a division maps `(base sign, slot)` to a target sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    /// `(starts[base] + slot * stride) mod 12`.
    SequentialOffset { starts: [u8; 12], stride: u8 },
    /// Odd signs count forward from `forward_starts[base / 2]`; even signs
    /// count backward from `backward_starts[base / 2]`.
    ParityReversed {
        forward_starts: [u8; 6],
        backward_starts: [u8; 6],
    },
    /// One start per element, in fire/earth/air/water order.
    ElementGrouped { starts: [u8; 4] },
    /// `starts[nature][base]`, natures in movable/fixed/dual order. Odd
    /// signs count forward from the start, even signs backward.
    NatureParity { starts: [[u8; 12]; 3] },
    /// Target read from an external [`CalibrationTable`]. No closed form.
    CalibratedLookup,
}

impl RuleFamily {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SequentialOffset { .. } => "sequential-offset",
            Self::ParityReversed { .. } => "parity-reversed",
            Self::ElementGrouped { .. } => "element-grouped",
            Self::NatureParity { .. } => "nature-parity",
            Self::CalibratedLookup => "calibrated-lookup",
        }
    }
}

/// Immutable definition of one division: its count and rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionSpec {
    pub division: Division,
    pub family: RuleFamily,
}

/// Result of deriving one position into a division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivation {
    /// Target sign index, 0-11.
    pub sign: u8,
    /// Division slot the degree fell into, 0..N-1.
    pub slot: u16,
    /// Position inside the slot scaled onto [0, 30).
    pub varga_degree: f64,
    /// False only for calibration entries flagged as unverified.
    pub verified: bool,
}

impl DivisionSpec {
    /// Number of divisions per rashi.
    pub const fn divisions(&self) -> u16 {
        self.division.divisions()
    }

    pub const fn is_calibrated(&self) -> bool {
        matches!(self.family, RuleFamily::CalibratedLookup)
    }

    /// Derive the target sign for a base sign and degree within it.
    ///
    /// `calibration` is only consulted by the calibrated-lookup family; a
    /// missing table or entry is reported, never defaulted.
    pub fn derive(
        &self,
        base_sign: u8,
        degree_in_sign: f64,
        calibration: Option<&CalibrationTable>,
    ) -> Result<Derivation, VargaError> {
        if base_sign >= 12 {
            return Err(VargaError::InvalidSign(base_sign));
        }
        if !degree_in_sign.is_finite() {
            return Err(VargaError::NumericDomain(degree_in_sign));
        }
        if !(0.0..=30.0).contains(&degree_in_sign) {
            return Err(VargaError::DegreeOutOfRange(degree_in_sign));
        }

        let n = self.divisions();
        let slot = division_slot(degree_in_sign, n);
        let varga_degree = varga_degree(degree_in_sign, slot, n);
        let base = base_sign as u32;
        let s = slot as u32;

        let (sign, verified) = match self.family {
            RuleFamily::SequentialOffset { starts, stride } => {
                let start = starts[base_sign as usize] as u32;
                (((start + s * stride as u32) % 12) as u8, true)
            }
            RuleFamily::ParityReversed {
                forward_starts,
                backward_starts,
            } => {
                let half = (base / 2) as usize;
                let sign = if is_odd_rashi(base_sign) {
                    count_forward(forward_starts[half], s)
                } else {
                    count_backward(backward_starts[half], s)
                };
                (sign, true)
            }
            RuleFamily::ElementGrouped { starts } => {
                let start = starts[rashi_element(base_sign).index()];
                (count_forward(start, s), true)
            }
            RuleFamily::NatureParity { starts } => {
                let start = starts[rashi_nature(base_sign).index()][base_sign as usize];
                let sign = if is_odd_rashi(base_sign) {
                    count_forward(start, s)
                } else {
                    count_backward(start, s)
                };
                (sign, true)
            }
            RuleFamily::CalibratedLookup => {
                let unavailable = VargaError::CalibrationUnavailable {
                    division: n,
                    sign: base_sign,
                    slot,
                };
                let table = calibration.ok_or(unavailable)?;
                let target = table.lookup(self.division, base_sign, slot)?;
                (target.sign, target.verified)
            }
        };

        Ok(Derivation {
            sign,
            slot,
            varga_degree,
            verified,
        })
    }
}

/// Derive just the target sign index for `(base_sign, degree_in_sign)`.
pub fn derive_sign(
    base_sign: u8,
    degree_in_sign: f64,
    spec: &DivisionSpec,
    calibration: Option<&CalibrationTable>,
) -> Result<u8, VargaError> {
    spec.derive(base_sign, degree_in_sign, calibration)
        .map(|d| d.sign)
}

/// `floor(degree_in_sign * N / 30)`, clamped to `[0, N-1]`.
pub fn division_slot(degree_in_sign: f64, divisions: u16) -> u16 {
    let raw = (degree_in_sign * divisions as f64 / 30.0).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as u16).min(divisions - 1)
    }
}

/// Position within `slot` rescaled to a full 30-degree sign.
pub fn varga_degree(degree_in_sign: f64, slot: u16, divisions: u16) -> f64 {
    let deg_per_div = 30.0 / divisions as f64;
    let pos_in_div = degree_in_sign - slot as f64 * deg_per_div;
    (pos_in_div * divisions as f64).clamp(0.0, MAX_DEGREE_IN_SIGN)
}

/// Whether two disjoint 6-sign start tables together cover the zodiac.
pub fn covers_zodiac(forward: &[u8; 6], backward: &[u8; 6]) -> bool {
    let mut seen = [false; 12];
    for &s in forward.iter().chain(backward.iter()) {
        if s >= 12 || seen[s as usize] {
            return false;
        }
        seen[s as usize] = true;
    }
    true
}

fn count_forward(start: u8, slot: u32) -> u8 {
    ((start as u32 + slot) % 12) as u8
}

fn count_backward(start: u8, slot: u32) -> u8 {
    ((start as u32 + 12 - slot % 12) % 12) as u8
}

// ---------------------------------------------------------------------------
// Start tables
// ---------------------------------------------------------------------------

const NATAL_STARTS: [u8; 12] = multiplied_starts(1);

const KHAVEDAMSHA_STARTS: [u8; 12] = parity_fixed_starts(0, 6);

/// `start = base * factor mod 12`.
const fn multiplied_starts(factor: u8) -> [u8; 12] {
    let mut t = [0u8; 12];
    let mut i = 0;
    while i < 12 {
        t[i] = ((i as u32 * factor as u32) % 12) as u8;
        i += 1;
    }
    t
}

/// Odd signs start from themselves, even signs from `even_offset` ahead.
const fn parity_starts(even_offset: u8) -> [u8; 12] {
    let mut t = [0u8; 12];
    let mut i = 0;
    while i < 12 {
        t[i] = if is_odd_rashi(i as u8) {
            i as u8
        } else {
            ((i as u8) + even_offset) % 12
        };
        i += 1;
    }
    t
}

/// One fixed start for odd signs and one for even signs.
const fn parity_fixed_starts(odd: u8, even: u8) -> [u8; 12] {
    let mut t = [0u8; 12];
    let mut i = 0;
    while i < 12 {
        t[i] = if is_odd_rashi(i as u8) { odd } else { even };
        i += 1;
    }
    t
}

/// One fixed start per sign nature.
const fn nature_starts(movable: u8, fixed: u8, dual: u8) -> [u8; 12] {
    let mut t = [0u8; 12];
    let mut i = 0;
    while i < 12 {
        t[i] = match i % 3 {
            0 => movable,
            1 => fixed,
            _ => dual,
        };
        i += 1;
    }
    t
}
