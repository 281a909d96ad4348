//! Whole-sign house assignment.
//!
//! Every sign is one house, numbered from the lagna's sign. The lagna's own
//! sign is always house 1.

use crate::error::VargaError;

/// House (1-12) of `body_sign` counted from `ascendant_sign`.
///
/// Both indices are reduced modulo 12.
pub const fn house_of(ascendant_sign: u8, body_sign: u8) -> u8 {
    ((body_sign % 12 + 12 - ascendant_sign % 12) % 12) + 1
}

/// Checked variant that rejects sign indices outside 0-11.
pub fn checked_house_of(ascendant_sign: u8, body_sign: u8) -> Result<u8, VargaError> {
    if ascendant_sign >= 12 {
        return Err(VargaError::InvalidSign(ascendant_sign));
    }
    if body_sign >= 12 {
        return Err(VargaError::InvalidSign(body_sign));
    }
    Ok(house_of(ascendant_sign, body_sign))
}

/// Sign index of the `house`-th house from `ascendant_sign` (house 1-12).
pub const fn sign_of_house(ascendant_sign: u8, house: u8) -> u8 {
    (ascendant_sign % 12 + (house + 11) % 12) % 12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_sign_is_first_house() {
        for s in 0..12u8 {
            assert_eq!(house_of(s, s), 1);
        }
    }

    #[test]
    fn scorpio_lagna_cancer_is_ninth() {
        // Vrischika lagna, Karka body: 7 → 3 is 9 signs ahead
        assert_eq!(house_of(7, 3), 9);
    }

    #[test]
    fn cancer_is_fourth_from_aries() {
        assert_eq!(house_of(0, 3), 4);
        assert_eq!(house_of(0, 11), 12);
        assert_eq!(house_of(11, 0), 2);
    }

    #[test]
    fn range_is_1_to_12() {
        for a in 0..12u8 {
            for b in 0..12u8 {
                let h = house_of(a, b);
                assert!((1..=12).contains(&h));
                assert_eq!(sign_of_house(a, h), b);
            }
        }
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert_eq!(checked_house_of(12, 0), Err(VargaError::InvalidSign(12)));
        assert_eq!(checked_house_of(0, 13), Err(VargaError::InvalidSign(13)));
        assert_eq!(checked_house_of(3, 3), Ok(1));
    }
}
