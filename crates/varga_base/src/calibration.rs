//! Calibration tables for divisions without a closed-form rule.
//!
//! A table is keyed by division, then by base sign, and holds exactly N
//! target entries per sign (one per division slot). A `null` target marks a
//! slot that is known to be unresolved. Slots listed in `unverified_slots`
//! resolve to a sign but carry `verified = false` through to the chart.
//!
//! Tables are validated in full at load time and are immutable afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::division::Division;
use crate::error::VargaError;

const EMBEDDED_JSON: &str = include_str!("../data/calibration.json");

// ---------------------------------------------------------------------------
// Resource format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    version: String,
    #[serde(default)]
    divisions: Vec<RawDivision>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDivision {
    division: u16,
    signs: Vec<RawSign>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSign {
    sign: u8,
    targets: Vec<Option<u8>>,
    #[serde(default)]
    unverified_slots: Vec<u16>,
}

// ---------------------------------------------------------------------------
// Validated table
// ---------------------------------------------------------------------------

/// A looked-up calibration target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibratedTarget {
    pub sign: u8,
    pub verified: bool,
}

/// Per-sign slot targets for one division. `None` at the sign level means
/// the sign is absent; `None` at the slot level means explicitly unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DivisionCalibration {
    signs: [Option<Vec<Option<CalibratedTarget>>>; 12],
}

/// Immutable, validated calibration table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalibrationTable {
    version: String,
    divisions: BTreeMap<Division, DivisionCalibration>,
}

impl CalibrationTable {
    /// Parse and validate a JSON calibration resource.
    pub fn from_json_str(json: &str) -> Result<Self, VargaError> {
        let raw: RawTable = serde_json::from_str(json)
            .map_err(|e| VargaError::MalformedCalibrationTable(e.to_string()))?;
        let table = Self::from_raw(raw)?;
        tracing::info!(
            version = %table.version,
            divisions = table.divisions.len(),
            "calibration table loaded"
        );
        Ok(table)
    }

    /// Read and validate a JSON calibration resource from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VargaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| VargaError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// The calibration resource bundled with this crate.
    pub fn embedded() -> Result<Self, VargaError> {
        Self::from_json_str(EMBEDDED_JSON)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Divisions this table has entries for.
    pub fn divisions(&self) -> impl Iterator<Item = Division> + '_ {
        self.divisions.keys().copied()
    }

    pub fn has_division(&self, division: Division) -> bool {
        self.divisions.contains_key(&division)
    }

    /// Target for `(division, base sign, slot)`.
    ///
    /// Missing division, missing sign, or a `null` slot all yield
    /// [`VargaError::CalibrationUnavailable`].
    pub fn lookup(
        &self,
        division: Division,
        sign: u8,
        slot: u16,
    ) -> Result<CalibratedTarget, VargaError> {
        self.divisions
            .get(&division)
            .and_then(|d| d.signs.get(sign as usize))
            .and_then(|s| s.as_ref())
            .and_then(|targets| targets.get(slot as usize))
            .and_then(|t| *t)
            .ok_or(VargaError::CalibrationUnavailable {
                division: division.code(),
                sign,
                slot,
            })
    }

    /// `(sign, slot)` pairs that resolve but are flagged unverified.
    pub fn unverified_entries(&self, division: Division) -> Vec<(u8, u16)> {
        let Some(cal) = self.divisions.get(&division) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for (sign, targets) in cal.signs.iter().enumerate() {
            let Some(targets) = targets else { continue };
            for (slot, target) in targets.iter().enumerate() {
                if matches!(target, Some(t) if !t.verified) {
                    out.push((sign as u8, slot as u16));
                }
            }
        }
        out
    }

    fn from_raw(raw: RawTable) -> Result<Self, VargaError> {
        let mut divisions = BTreeMap::new();
        for raw_div in raw.divisions {
            let division = Division::from_code(raw_div.division).map_err(|_| {
                malformed(format!("unsupported division D{}", raw_div.division))
            })?;
            if !division.spec().is_calibrated() {
                return Err(malformed(format!(
                    "{} has a closed-form rule and cannot be calibrated",
                    division.name()
                )));
            }
            if divisions.contains_key(&division) {
                return Err(malformed(format!("duplicate entry for {}", division.name())));
            }
            divisions.insert(division, validate_division(division, raw_div.signs)?);
        }
        Ok(Self {
            version: raw.version,
            divisions,
        })
    }
}

fn validate_division(
    division: Division,
    raw_signs: Vec<RawSign>,
) -> Result<DivisionCalibration, VargaError> {
    let n = division.divisions() as usize;
    let mut signs: [Option<Vec<Option<CalibratedTarget>>>; 12] = Default::default();

    for raw in raw_signs {
        let label = division.name();
        if raw.sign >= 12 {
            return Err(malformed(format!("{label}: sign index {} out of range", raw.sign)));
        }
        if signs[raw.sign as usize].is_some() {
            return Err(malformed(format!("{label}: duplicate sign {}", raw.sign)));
        }
        if raw.targets.len() != n {
            return Err(malformed(format!(
                "{label}: sign {} has {} targets, expected {n}",
                raw.sign,
                raw.targets.len()
            )));
        }
        if let Some(&slot) = raw.unverified_slots.iter().find(|&&s| s as usize >= n) {
            return Err(malformed(format!(
                "{label}: sign {} unverified slot {slot} out of range",
                raw.sign
            )));
        }

        let mut targets = Vec::with_capacity(n);
        for (slot, target) in raw.targets.into_iter().enumerate() {
            let entry = match target {
                None => None,
                Some(t) if t >= 12 => {
                    return Err(malformed(format!(
                        "{label}: sign {} slot {slot} targets invalid sign {t}",
                        raw.sign
                    )));
                }
                Some(t) => Some(CalibratedTarget {
                    sign: t,
                    verified: !raw.unverified_slots.contains(&(slot as u16)),
                }),
            };
            targets.push(entry);
        }
        signs[raw.sign as usize] = Some(targets);
    }

    Ok(DivisionCalibration { signs })
}

fn malformed(msg: String) -> VargaError {
    VargaError::MalformedCalibrationTable(msg)
}
