//! The five elements, polarity, and the generative/destructive cycles.
//!
//! Generative: Wood → Fire → Earth → Metal → Water → Wood.
//! Destructive: Wood → Earth, Fire → Metal, Earth → Water, Metal → Wood, Water → Fire.

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generative order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Native glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generative order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The element this one generates (feeds).
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// The element this one destroys (overcomes).
    pub const fn destroys(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }

    /// True if either element destroys the other.
    pub const fn clashes_with(self, other: Element) -> bool {
        self.destroys() as u8 == other as u8 || other.destroys() as u8 == self as u8
    }
}

/// Yang/Yin polarity of a heavenly stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// English short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    /// Native glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}
