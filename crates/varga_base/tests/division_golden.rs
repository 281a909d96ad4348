//! Golden tests for the division rule engine.
//!
//! Pure-math tests (no external resources beyond the embedded calibration).

use proptest::prelude::*;
use varga_base::{
    ALL_DIVISIONS, CalibrationTable, Division, Rashi, RuleFamily, decompose, derive_sign,
    house_of, rashi_from_longitude,
};

fn embedded() -> CalibrationTable {
    CalibrationTable::embedded().expect("embedded calibration parses")
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_d10_scorpio() {
    // Vrischika 2.2799 deg → D10 Karka
    let sign = derive_sign(Rashi::Vrischika.index(), 2.2799, &Division::D10.spec(), None).unwrap();
    assert_eq!(sign, Rashi::Karka.index());
    // Against a Vrischika lagna the Karka placement is the 9th house
    assert_eq!(house_of(Rashi::Vrischika.index(), sign), 9);
}

#[test]
fn scenario_d3_taurus_middle_third() {
    let table = embedded();
    let d = Division::D3
        .spec()
        .derive(Rashi::Vrishabha.index(), 14.8664, Some(&table))
        .unwrap();
    assert_eq!(d.slot, 1);
    assert_eq!(d.sign, Rashi::Karka.index());
    assert!(d.verified);
}

#[test]
fn scenario_d24_aquarius_from_longitude() {
    let (sign, deg) = decompose(313.0).unwrap();
    assert_eq!(sign, Rashi::Kumbha.index());
    let derived = derive_sign(sign, deg, &Division::D24.spec(), None).unwrap();
    assert_eq!(derived, Rashi::Mithuna.index());
}

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

#[test]
fn boundary_exactness_every_sign() {
    for k in 0..12u8 {
        let start = k as f64 * 30.0;
        assert_eq!(decompose(start + 29.9999999).unwrap().0, k);
        assert_eq!(decompose(start + 30.0).unwrap().0, (k + 1) % 12);
    }
    assert_eq!(decompose(359.9999999).unwrap().0, 11);
    assert_eq!(decompose(360.0).unwrap().0, 0);
}

#[test]
fn boundary_slot_does_not_leak_into_next_sign() {
    // Just below 30: last slot of Mesha, not first slot of Vrishabha
    let info = rashi_from_longitude(29.9999999).unwrap();
    for &division in &ALL_DIVISIONS {
        let d = division
            .spec()
            .derive(info.rashi_index, info.degrees_in_rashi, Some(&embedded()))
            .unwrap();
        assert_eq!(d.slot, division.divisions() - 1, "{division:?}");
    }
}

// ---------------------------------------------------------------------------
// Structural properties
// ---------------------------------------------------------------------------

#[test]
fn d30_every_slot_is_a_permutation() {
    let spec = Division::D30.spec();
    assert!(matches!(spec.family, RuleFamily::ParityReversed { .. }));
    for slot in 0..30u16 {
        let deg = slot as f64 + 0.5;
        let mut seen = [false; 12];
        for base in 0..12u8 {
            let s = derive_sign(base, deg, &spec, None).unwrap();
            assert!(!seen[s as usize], "slot {slot}: collision at sign {s}");
            seen[s as usize] = true;
        }
    }
}

#[test]
fn d40_every_base_sign() {
    let spec = Division::D40.spec();
    // (first slot, slot 5 at 4.0 deg): odd signs from Mesha forward,
    // even signs from Tula backward
    for base in 0..12u8 {
        let expected = if base % 2 == 0 { (0, 5) } else { (6, 1) };
        let first = derive_sign(base, 0.1, &spec, None).unwrap();
        let sixth = derive_sign(base, 4.0, &spec, None).unwrap();
        assert_eq!((first, sixth), expected, "base {base}");
    }
}

#[test]
fn d60_every_base_sign() {
    let spec = Division::D60.spec();
    // Last slot (59) at 29.9 deg
    let last = [11, 2, 1, 4, 3, 6, 5, 8, 7, 10, 9, 0];
    for base in 0..12u8 {
        assert_eq!(derive_sign(base, 0.1, &spec, None).unwrap(), base, "base {base}");
        assert_eq!(
            derive_sign(base, 29.9, &spec, None).unwrap(),
            last[base as usize],
            "base {base}"
        );
    }
}

#[test]
fn ascendant_identity_every_division() {
    let table = embedded();
    for &division in &ALL_DIVISIONS {
        for base in 0..12u8 {
            let asc = derive_sign(base, 11.11, &division.spec(), Some(&table)).unwrap();
            assert_eq!(house_of(asc, asc), 1, "{division:?}");
        }
    }
}

proptest! {
    #[test]
    fn totality_and_range(base in 0u8..12, deg in 0.0f64..30.0, idx in 0usize..16) {
        let table = embedded();
        let division = ALL_DIVISIONS[idx];
        let d = division.spec().derive(base, deg, Some(&table)).unwrap();
        prop_assert!(d.sign < 12);
        prop_assert!(d.slot < division.divisions());
        prop_assert!((0.0..30.0).contains(&d.varga_degree));
    }

    #[test]
    fn derivation_is_deterministic(base in 0u8..12, deg in 0.0f64..30.0, idx in 0usize..16) {
        let table = embedded();
        let spec = ALL_DIVISIONS[idx].spec();
        let a = spec.derive(base, deg, Some(&table)).unwrap();
        let b = spec.derive(base, deg, Some(&table)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn decompose_in_range(lon in -1.0e6f64..1.0e6) {
        let (sign, deg) = decompose(lon).unwrap();
        prop_assert!(sign < 12);
        prop_assert!((0.0..30.0).contains(&deg));
    }
}
