//! Reference tables and year → mewa calculations for the nine-palace system.
//!
//! This crate provides:
//! - The 60-term stem/branch cycle and its life/body/power rotation tables
//! - Year → cycle profile derivation (animal, element, polarity, cycle name)
//! - Cycle name → mewa triple conversion by rotation or by +3 offset
//!
//! Everything here is pure table lookup and small cyclic arithmetic. The
//! only shared state is the cycle table set, built once on first use and
//! never mutated.

pub mod animal;
pub mod element;
pub mod error;
pub mod mewa;
pub mod profile;
pub mod sixty_cycle;
pub mod stem;
pub mod util;

pub use animal::{ALL_ANIMALS, ANIMAL_BY_YEAR_REMAINDER, Animal, animal_from_year, hour_animal};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::MewaError;
pub use mewa::{
    ALL_MEWA_COLORS, Mewa, MewaColor, MewaMethod, MewaTriple, OFFSET_STEP, convert_by_offset,
    convert_by_rotation, convert_mewas,
};
pub use profile::{
    CycleProfile, RABJUNG_EPOCH_YEAR, YEAR_MAX, YEAR_MIN, derive_profile, rabjung_position,
};
pub use sixty_cycle::{
    BODY_START, CYCLE_LEN, CycleEntry, CycleName, LIFE_START, POWER_START, SixtyCycleTables,
    cycle_tables, rotation_sequence,
};
pub use stem::{ALL_STEMS, STEM_BY_YEAR_REMAINDER, Stem, stem_from_year};
pub use util::{step_nine, wrap_nine};
