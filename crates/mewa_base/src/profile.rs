//! Year → cycle profile derivation.
//!
//! The animal comes from `year mod 12`, the stem (element + polarity) from
//! `year mod 10`, and the rabjung cycle position from a fixed epoch offset:
//! `(year + 3 - 1026) mod 60`.

use crate::animal::{Animal, animal_from_year};
use crate::element::{Element, Polarity};
use crate::error::MewaError;
use crate::sixty_cycle::CycleName;
use crate::stem::{Stem, stem_from_year};

/// Earliest supported year.
pub const YEAR_MIN: i32 = 1000;
/// Latest supported year.
pub const YEAR_MAX: i32 = 3000;

/// Epoch year of the rabjung cycle count.
pub const RABJUNG_EPOCH_YEAR: i32 = 1026;

/// Astrological profile of a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleProfile {
    /// The year the profile was derived from.
    pub year: i32,
    /// Rabjung cycle position (0..59).
    pub cycle_position: u8,
    pub animal: Animal,
    pub stem: Stem,
    pub element: Element,
    pub polarity: Polarity,
    /// Combined 60-cycle name, the key for mewa lookups.
    pub cycle_name: CycleName,
}

/// Rabjung cycle position of a year, normalised into 0..60.
pub fn rabjung_position(year: i32) -> u8 {
    (year + 3 - RABJUNG_EPOCH_YEAR).rem_euclid(60) as u8
}

/// Derive the cycle profile for `year`.
///
/// Fails with `OutOfRange("year")` outside [`YEAR_MIN`]..=[`YEAR_MAX`].
pub fn derive_profile(year: i32) -> Result<CycleProfile, MewaError> {
    MewaError::check_range(
        "year",
        i64::from(year),
        i64::from(YEAR_MIN),
        i64::from(YEAR_MAX),
    )?;

    let animal = animal_from_year(year);
    let stem = stem_from_year(year);
    // year mod 10 and year mod 12 always agree in parity, so this cannot fail.
    let cycle_name = CycleName::new(stem, animal)?;

    Ok(CycleProfile {
        year,
        cycle_position: rabjung_position(year),
        animal,
        stem,
        element: stem.element(),
        polarity: stem.polarity(),
        cycle_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_1990_metal_yang_horse() {
        let p = derive_profile(1990).unwrap();
        assert_eq!(p.animal, Animal::Horse);
        assert_eq!(p.element, Element::Metal);
        assert_eq!(p.polarity, Polarity::Yang);
        assert_eq!(p.cycle_name.to_string(), "MetalYangHorse");
        assert_eq!(p.cycle_position, 7);
    }

    #[test]
    fn year_1984_wood_yang_rat() {
        let p = derive_profile(1984).unwrap();
        assert_eq!(p.cycle_name.to_string(), "WoodYangRat");
        assert_eq!(p.cycle_name.position(), 0);
        assert_eq!(p.cycle_position, 1);
    }

    #[test]
    fn rabjung_epoch_wraps() {
        // 1023 + 3 - 1026 = 0
        assert_eq!(rabjung_position(1023), 0);
        assert_eq!(rabjung_position(1022), 59);
        assert_eq!(rabjung_position(1083), 0);
    }

    #[test]
    fn bounds_inclusive() {
        assert!(derive_profile(YEAR_MIN).is_ok());
        assert!(derive_profile(YEAR_MAX).is_ok());
    }

    #[test]
    fn out_of_range_years() {
        for y in [999, 3001, 0, -5] {
            assert!(
                matches!(
                    derive_profile(y),
                    Err(MewaError::OutOfRange { field: "year", .. })
                ),
                "year {y}"
            );
        }
    }
}
