//! The 10 heavenly stems: each an element in its Yang or Yin form.
//!
//! A year's stem is read from `year mod 10` (1984 mod 10 = 4 → Wood Yang,
//! 1990 mod 10 = 0 → Metal Yang).

use crate::element::{Element, Polarity};

/// The 10 heavenly stems in traditional order (Jia = Wood Yang first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in traditional order (0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

/// Stem indexed by `year mod 10`.
pub const STEM_BY_YEAR_REMAINDER: [Stem; 10] = [
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
];

impl Stem {
    /// Pinyin name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element of the stem; consecutive stem pairs share one element.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Yang for even-indexed stems, Yin for odd.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

/// Heavenly stem of a year (`year mod 10`, negative years normalised).
pub fn stem_from_year(year: i32) -> Stem {
    STEM_BY_YEAR_REMAINDER[year.rem_euclid(10) as usize]
}
