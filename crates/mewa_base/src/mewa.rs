//! Mewa (nine palaces): numbers, colors, and the two conversion methods.
//!
//! Each mewa number 1..=9 has a fixed color, and each color a fixed
//! element. The mapping is not one-to-one: 1, 6 and 8 are all White,
//! 7 and 9 are both Red.
//!
//! A cycle name converts to a life/body/power triple either by reading all
//! three rotation tables, or by reading the life table and stepping +3 twice.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::Element;
use crate::error::MewaError;
use crate::sixty_cycle::{CycleName, SixtyCycleTables, cycle_tables};
use crate::util::step_nine;

/// Step between life → body → power in the offset method.
pub const OFFSET_STEP: i32 = 3;

/// The six mewa colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MewaColor {
    White,
    Black,
    Blue,
    Green,
    Yellow,
    Red,
}

/// All 6 colors.
pub const ALL_MEWA_COLORS: [MewaColor; 6] = [
    MewaColor::White,
    MewaColor::Black,
    MewaColor::Blue,
    MewaColor::Green,
    MewaColor::Yellow,
    MewaColor::Red,
];

/// Color indexed by `number - 1`.
const COLOR_BY_NUMBER: [MewaColor; 9] = [
    MewaColor::White,
    MewaColor::Black,
    MewaColor::Blue,
    MewaColor::Green,
    MewaColor::Yellow,
    MewaColor::White,
    MewaColor::Red,
    MewaColor::White,
    MewaColor::Red,
];

impl MewaColor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
        }
    }

    /// Native glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::White => "白",
            Self::Black => "黑",
            Self::Blue => "蓝",
            Self::Green => "绿",
            Self::Yellow => "黄",
            Self::Red => "红",
        }
    }

    /// Element carried by the color.
    pub const fn element(self) -> Element {
        match self {
            Self::White => Element::Metal,
            Self::Black | Self::Blue => Element::Water,
            Self::Green => Element::Wood,
            Self::Yellow => Element::Earth,
            Self::Red => Element::Fire,
        }
    }
}

/// A single mewa: number with its derived color and element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mewa {
    pub number: u8,
    pub color: MewaColor,
    pub element: Element,
}

impl Mewa {
    /// Fails with `OutOfRange("mewa")` outside 1..=9.
    pub fn new(number: u8) -> Result<Self, MewaError> {
        MewaError::check_range("mewa", i64::from(number), 1, 9)?;
        let color = COLOR_BY_NUMBER[number as usize - 1];
        Ok(Self {
            number,
            color,
            element: color.element(),
        })
    }
}

impl Display for Mewa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.color.name())
    }
}

/// Life, body and power mewas of one cycle name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MewaTriple {
    pub life: Mewa,
    pub body: Mewa,
    pub power: Mewa,
}

impl MewaTriple {
    /// Build a triple from raw numbers, each validated.
    pub fn from_numbers(life: u8, body: u8, power: u8) -> Result<Self, MewaError> {
        Ok(Self {
            life: Mewa::new(life)?,
            body: Mewa::new(body)?,
            power: Mewa::new(power)?,
        })
    }

    /// The common color if life, body and power share one.
    pub fn common_color(&self) -> Option<MewaColor> {
        let c = self.life.color;
        (self.body.color == c && self.power.color == c).then_some(c)
    }
}

/// Which conversion rule produced a [`MewaTriple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MewaMethod {
    /// All three numbers from the rotation tables.
    #[default]
    Rotation,
    /// Life from its rotation table; body and power by +3 steps.
    Offset,
}

impl MewaMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rotation => "rotation",
            Self::Offset => "offset",
        }
    }
}

impl FromStr for MewaMethod {
    type Err = MewaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rotation" => Ok(Self::Rotation),
            "offset" => Ok(Self::Offset),
            _ => Err(MewaError::unknown_key("mewa method", s)),
        }
    }
}

impl SixtyCycleTables {
    /// Life/body/power read directly from the three rotation tables.
    pub fn convert_by_rotation(&self, name: CycleName) -> Result<MewaTriple, MewaError> {
        MewaTriple::from_numbers(self.life(name), self.body(name), self.power(name))
    }

    /// Life from its rotation table, then body = life + 3 and power = body + 3,
    /// each wrapped onto 1..=9.
    pub fn convert_by_offset(&self, name: CycleName) -> Result<MewaTriple, MewaError> {
        let life = self.life(name);
        let body = step_nine(life, OFFSET_STEP);
        let power = step_nine(body, OFFSET_STEP);
        MewaTriple::from_numbers(life, body, power)
    }

    pub fn convert(&self, name: CycleName, method: MewaMethod) -> Result<MewaTriple, MewaError> {
        match method {
            MewaMethod::Rotation => self.convert_by_rotation(name),
            MewaMethod::Offset => self.convert_by_offset(name),
        }
    }
}

/// Rotation-table conversion using the shared tables.
pub fn convert_by_rotation(name: CycleName) -> Result<MewaTriple, MewaError> {
    cycle_tables()?.convert_by_rotation(name)
}

/// Offset conversion using the shared tables.
pub fn convert_by_offset(name: CycleName) -> Result<MewaTriple, MewaError> {
    cycle_tables()?.convert_by_offset(name)
}

/// Convert a cycle name given as text.
///
/// Fails with `UnknownKey("cycle name")` unless `cycle_name` is one of the 60 names.
pub fn convert_mewas(cycle_name: &str, method: MewaMethod) -> Result<MewaTriple, MewaError> {
    let name: CycleName = cycle_name.parse()?;
    cycle_tables()?.convert(name, method)
}
