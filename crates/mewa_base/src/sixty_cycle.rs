//! The 60-term stem/branch cycle and the three mewa rotation tables.
//!
//! Position 0 is Wood Yang Rat. Names are generated from the year-remainder
//! tables with a +4 offset, so position `i` carries
//! `STEM_BY_YEAR_REMAINDER[(i + 4) % 10]` and
//! `ANIMAL_BY_YEAR_REMAINDER[(i + 4) % 12]`. Because 10 and 12 share only the
//! factor 2, exactly the 60 stem/animal pairs of matching parity occur.
//!
//! Each rotation table starts at a fixed mewa for position 0 (life 1,
//! body 4, power 7) and counts down by one per position, wrapping 1 → 9.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use log::debug;

use crate::animal::{ALL_ANIMALS, ANIMAL_BY_YEAR_REMAINDER, Animal};
use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::error::MewaError;
use crate::stem::{ALL_STEMS, STEM_BY_YEAR_REMAINDER, Stem};
use crate::util::wrap_nine;

/// Number of terms in the cycle.
pub const CYCLE_LEN: usize = 60;

/// Life mewa at cycle position 0.
pub const LIFE_START: u8 = 1;
/// Body mewa at cycle position 0.
pub const BODY_START: u8 = 4;
/// Power mewa at cycle position 0.
pub const POWER_START: u8 = 7;

/// One of the 60 valid stem/animal combinations.
///
/// Fields are private: every value is a member of the 60-name set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleName {
    stem: Stem,
    animal: Animal,
}

impl CycleName {
    /// Pair a stem with an animal. Pairs of mismatched parity never occur
    /// in the cycle and fail with `UnknownKey("cycle name")`.
    pub fn new(stem: Stem, animal: Animal) -> Result<Self, MewaError> {
        if stem.index() % 2 != animal.index() % 2 {
            return Err(MewaError::unknown_key(
                "cycle name",
                format!(
                    "{}{}{}",
                    stem.element().name(),
                    stem.polarity().name(),
                    animal.name()
                ),
            ));
        }
        Ok(Self { stem, animal })
    }

    /// Name at a cycle position, generated from the year-remainder tables.
    pub fn at_position(position: usize) -> Result<Self, MewaError> {
        MewaError::check_range("cycle position", position as i64, 0, CYCLE_LEN as i64 - 1)?;
        let stem = STEM_BY_YEAR_REMAINDER[(position + 4) % 10];
        let animal = ANIMAL_BY_YEAR_REMAINDER[(position + 4) % 12];
        Self::new(stem, animal)
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn animal(self) -> Animal {
        self.animal
    }

    pub const fn element(self) -> Element {
        self.stem.element()
    }

    pub const fn polarity(self) -> Polarity {
        self.stem.polarity()
    }

    /// 0-based position in the cycle (Wood Yang Rat = 0).
    ///
    /// The unique `i` in 0..60 with `i ≡ stem (mod 10)` and `i ≡ animal (mod 12)`.
    pub const fn position(self) -> usize {
        let s = self.stem.index() as usize;
        let mut i = self.animal.index() as usize;
        while i % 10 != s {
            i += 12;
        }
        i
    }

    /// Name in native glyphs, e.g. `金阳马`.
    pub fn glyph_name(self) -> String {
        format!(
            "{}{}{}",
            self.element().glyph(),
            self.polarity().glyph(),
            self.animal.glyph()
        )
    }
}

impl Display for CycleName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.element().name(),
            self.polarity().name(),
            self.animal.name()
        )
    }
}

impl FromStr for CycleName {
    type Err = MewaError;

    /// Accepts the short English form (`MetalYangHorse`) or the glyph form (`金阳马`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || MewaError::unknown_key("cycle name", s);
        let trimmed = s.trim();

        let parsed = parse_parts(trimmed, Element::name, Polarity::name, Animal::name)
            .or_else(|| parse_parts(trimmed, Element::glyph, Polarity::glyph, Animal::glyph))
            .ok_or_else(unknown)?;
        let (element, polarity, animal) = parsed;

        let stem_idx = element.index() as usize * 2 + usize::from(polarity == Polarity::Yin);
        Self::new(ALL_STEMS[stem_idx], animal).map_err(|_| unknown())
    }
}

fn parse_parts(
    s: &str,
    element_label: fn(Element) -> &'static str,
    polarity_label: fn(Polarity) -> &'static str,
    animal_label: fn(Animal) -> &'static str,
) -> Option<(Element, Polarity, Animal)> {
    let (element, rest) = ALL_ELEMENTS
        .iter()
        .find_map(|&e| s.strip_prefix(element_label(e)).map(|r| (e, r)))?;
    let (polarity, rest) = [Polarity::Yang, Polarity::Yin]
        .iter()
        .find_map(|&p| rest.strip_prefix(polarity_label(p)).map(|r| (p, r)))?;
    let animal = ALL_ANIMALS.iter().copied().find(|&a| animal_label(a) == rest)?;
    Some((element, polarity, animal))
}

/// Build a 60-long countdown starting at `start`, wrapping 1 → 9.
pub fn rotation_sequence(start: u8) -> [u8; CYCLE_LEN] {
    let mut seq = [0u8; CYCLE_LEN];
    let mut current = i32::from(start);
    for slot in &mut seq {
        *slot = wrap_nine(current);
        current -= 1;
    }
    seq
}

/// One row of the cycle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleEntry {
    pub position: usize,
    pub name: CycleName,
    pub life: u8,
    pub body: u8,
    pub power: u8,
}

/// The generated cycle names with their life/body/power rotation values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SixtyCycleTables {
    names: [CycleName; CYCLE_LEN],
    life: [u8; CYCLE_LEN],
    body: [u8; CYCLE_LEN],
    power: [u8; CYCLE_LEN],
}

impl SixtyCycleTables {
    /// Generate names and rotations, verifying the table invariants.
    pub fn build() -> Result<Self, MewaError> {
        for start in [LIFE_START, BODY_START, POWER_START] {
            if !(1..=9).contains(&start) {
                return Err(MewaError::Configuration("rotation start outside 1..=9"));
            }
        }

        let mut names = [CycleName {
            stem: Stem::Jia,
            animal: Animal::Rat,
        }; CYCLE_LEN];
        let mut seen = HashSet::with_capacity(CYCLE_LEN);
        for (i, slot) in names.iter_mut().enumerate() {
            let name = CycleName::at_position(i)
                .map_err(|_| MewaError::Configuration("stem and animal parity disagree"))?;
            if name.position() != i {
                return Err(MewaError::Configuration("cycle name position mismatch"));
            }
            if !seen.insert(name) {
                return Err(MewaError::Configuration("duplicate cycle name"));
            }
            *slot = name;
        }

        Ok(Self {
            names,
            life: rotation_sequence(LIFE_START),
            body: rotation_sequence(BODY_START),
            power: rotation_sequence(POWER_START),
        })
    }

    /// All 60 names in cycle order.
    pub fn names(&self) -> &[CycleName; CYCLE_LEN] {
        &self.names
    }

    pub fn contains(&self, name: CycleName) -> bool {
        self.names[name.position()] == name
    }

    pub fn life(&self, name: CycleName) -> u8 {
        self.life[name.position()]
    }

    pub fn body(&self, name: CycleName) -> u8 {
        self.body[name.position()]
    }

    pub fn power(&self, name: CycleName) -> u8 {
        self.power[name.position()]
    }

    /// Rows in cycle order.
    pub fn entries(&self) -> impl Iterator<Item = CycleEntry> + '_ {
        self.names.iter().enumerate().map(|(i, &name)| CycleEntry {
            position: i,
            name,
            life: self.life[i],
            body: self.body[i],
            power: self.power[i],
        })
    }
}

static CYCLE_TABLES: LazyLock<Result<SixtyCycleTables, MewaError>> = LazyLock::new(|| {
    let tables = SixtyCycleTables::build();
    match &tables {
        Ok(_) => debug!("built {CYCLE_LEN}-term cycle tables"),
        Err(e) => debug!("cycle table build failed: {e}"),
    }
    tables
});

/// Shared, immutable cycle tables, built on first use.
pub fn cycle_tables() -> Result<&'static SixtyCycleTables, MewaError> {
    CYCLE_TABLES.as_ref().map_err(Clone::clone)
}
