//! The 12 animal signs (earthly branches), year remainders and hour buckets.
//!
//! A year's animal is read from `year mod 12` (1984 mod 12 = 4 → Rat).
//! Each two-hour block of the day also carries an animal; the Rat block
//! straddles midnight (23:00-01:59).

use crate::element::Element;
use crate::error::MewaError;

/// The 12 animal signs, in branch order starting from Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Sheep,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in branch order (0 = Rat, 11 = Pig).
pub const ALL_ANIMALS: [Animal; 12] = [
    Animal::Rat,
    Animal::Ox,
    Animal::Tiger,
    Animal::Rabbit,
    Animal::Dragon,
    Animal::Snake,
    Animal::Horse,
    Animal::Sheep,
    Animal::Monkey,
    Animal::Rooster,
    Animal::Dog,
    Animal::Pig,
];

/// Animal indexed by `year mod 12`.
pub const ANIMAL_BY_YEAR_REMAINDER: [Animal; 12] = [
    Animal::Monkey,
    Animal::Rooster,
    Animal::Dog,
    Animal::Pig,
    Animal::Rat,
    Animal::Ox,
    Animal::Tiger,
    Animal::Rabbit,
    Animal::Dragon,
    Animal::Snake,
    Animal::Horse,
    Animal::Sheep,
];

/// Animal indexed by hour of day (0..=23).
const ANIMAL_BY_HOUR: [Animal; 24] = [
    Animal::Rat,     // 0
    Animal::Rat,     // 1
    Animal::Ox,      // 2
    Animal::Ox,      // 3
    Animal::Tiger,   // 4
    Animal::Tiger,   // 5
    Animal::Rabbit,  // 6
    Animal::Rabbit,  // 7
    Animal::Dragon,  // 8
    Animal::Dragon,  // 9
    Animal::Snake,   // 10
    Animal::Snake,   // 11
    Animal::Horse,   // 12
    Animal::Horse,   // 13
    Animal::Sheep,   // 14
    Animal::Sheep,   // 15
    Animal::Monkey,  // 16
    Animal::Monkey,  // 17
    Animal::Rooster, // 18
    Animal::Rooster, // 19
    Animal::Dog,     // 20
    Animal::Dog,     // 21
    Animal::Pig,     // 22
    Animal::Rat,     // 23
];

impl Animal {
    /// English short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Sheep => "Sheep",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Native glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Sheep => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }

    /// 0-based branch index (Rat=0 .. Pig=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fixed element of the animal, used for hour elements.
    pub const fn element(self) -> Element {
        match self {
            Self::Rat | Self::Pig => Element::Water,
            Self::Ox | Self::Dragon | Self::Sheep | Self::Dog => Element::Earth,
            Self::Tiger | Self::Rabbit => Element::Wood,
            Self::Snake | Self::Horse => Element::Fire,
            Self::Monkey | Self::Rooster => Element::Metal,
        }
    }

    /// Hours of the day (start, end inclusive) covered by this animal's block.
    ///
    /// The Rat block wraps midnight and reports `(23, 1)`.
    pub const fn hour_span(self) -> (u8, u8) {
        match self {
            Self::Rat => (23, 1),
            Self::Pig => (22, 22),
            other => {
                let start = other.index() * 2;
                (start, start + 1)
            }
        }
    }
}

/// Animal sign of a year (`year mod 12`, negative years normalised).
pub fn animal_from_year(year: i32) -> Animal {
    ANIMAL_BY_YEAR_REMAINDER[year.rem_euclid(12) as usize]
}

/// Animal of the two-hour block containing `hour`.
///
/// Fails with `OutOfRange("hour")` outside 0..=23.
pub fn hour_animal(hour: i32) -> Result<Animal, MewaError> {
    MewaError::check_range("hour", i64::from(hour), 0, 23)?;
    Ok(ANIMAL_BY_HOUR[hour as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, a) in ALL_ANIMALS.iter().enumerate() {
            assert_eq!(a.index() as usize, i);
        }
    }

    #[test]
    fn year_remainders() {
        assert_eq!(animal_from_year(1984), Animal::Rat);
        assert_eq!(animal_from_year(1990), Animal::Horse);
        assert_eq!(animal_from_year(2025), Animal::Snake);
        assert_eq!(animal_from_year(2028), Animal::Monkey);
    }

    #[test]
    fn remainder_table_is_a_permutation() {
        for a in ALL_ANIMALS {
            let n = ANIMAL_BY_YEAR_REMAINDER.iter().filter(|&&b| b == a).count();
            assert_eq!(n, 1, "{a:?}");
        }
    }

    #[test]
    fn midnight_shares_rat_block() {
        assert_eq!(hour_animal(23).unwrap(), Animal::Rat);
        assert_eq!(hour_animal(0).unwrap(), Animal::Rat);
        assert_eq!(hour_animal(1).unwrap(), Animal::Rat);
        assert_eq!(hour_animal(22).unwrap(), Animal::Pig);
    }

    #[test]
    fn afternoon_buckets() {
        assert_eq!(hour_animal(12).unwrap(), Animal::Horse);
        assert_eq!(hour_animal(13).unwrap(), Animal::Horse);
        assert_eq!(hour_animal(14).unwrap(), Animal::Sheep);
        assert_eq!(hour_animal(15).unwrap(), Animal::Sheep);
    }

    #[test]
    fn hour_out_of_range() {
        assert!(matches!(
            hour_animal(-1),
            Err(MewaError::OutOfRange { field: "hour", .. })
        ));
        assert!(matches!(
            hour_animal(24),
            Err(MewaError::OutOfRange { field: "hour", .. })
        ));
    }

    #[test]
    fn hour_span_matches_table() {
        for h in 0..24 {
            let a = hour_animal(h).unwrap();
            let (start, end) = a.hour_span();
            let h = h as u8;
            let inside = if start <= end {
                (start..=end).contains(&h)
            } else {
                h >= start || h <= end
            };
            assert!(inside, "hour {h} outside {a:?} span {start}-{end}");
        }
    }

    #[test]
    fn animal_elements() {
        assert_eq!(Animal::Rat.element(), Element::Water);
        assert_eq!(Animal::Sheep.element(), Element::Earth);
        assert_eq!(Animal::Horse.element(), Element::Fire);
        assert_eq!(Animal::Rooster.element(), Element::Metal);
        assert_eq!(Animal::Rabbit.element(), Element::Wood);
    }
}
