//! Divisional chart (varga) rule engine.
//!
//! This crate provides:
//! - Sidereal resolution from tropical longitude and a supplied ayanamsha
//! - Sign/degree decomposition with floor semantics at sign boundaries
//! - Rule families for D1 through D60 and the per-division rule table
//! - Calibration tables for divisions without a closed-form rule
//! - Whole-sign house assignment
//!
//! All functions are pure. The only loaded state is a [`CalibrationTable`],
//! which is validated once and never mutated.

pub mod calibration;
pub mod division;
pub mod error;
pub mod graha;
pub mod house;
pub mod rashi;
pub mod sidereal;
pub mod util;

pub use calibration::{CalibratedTarget, CalibrationTable};
pub use division::{
    ALL_DIVISIONS, Derivation, Division, DivisionSpec, RuleFamily, SHODASHAVARGA, covers_zodiac,
    derive_sign, division_slot, varga_degree,
};
pub use error::VargaError;
pub use graha::{ALL_GRAHAS, ChartBody, EPHEMERIS_GRAHAS, Graha};
pub use house::{checked_house_of, house_of, sign_of_house};
pub use rashi::{
    ALL_RASHIS, Dms, MAX_DEGREE_IN_SIGN, Rashi, RashiElement, RashiInfo, RashiNature, decompose,
    deg_to_dms, dms_to_deg, is_odd_rashi, rashi_element, rashi_from_longitude, rashi_nature,
};
pub use sidereal::{CelestialLongitude, resolve};
pub use util::normalize_360;
