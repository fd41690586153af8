//! Static summary of what the engine accepts and produces.

use mewa_base::{YEAR_MAX, YEAR_MIN};

use crate::analysis::VERSION;
use crate::demographic::{AGE_MAX, AGE_MIN, ALL_GENDERS, ALL_PROFESSIONS, Gender, Profession};
use crate::obstacle_types::{ALL_OBSTACLE_KINDS, ObstacleKind};
use crate::prosperity_types::{ALL_EVENT_TYPES, EventType};

pub const SYSTEM_NAME: &str = "Nine Palaces Outer Calculation";

/// Engine capabilities and accepted input ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub genders: &'static [Gender],
    pub professions: &'static [Profession],
    pub event_types: &'static [EventType],
    pub obstacle_kinds: &'static [ObstacleKind],
    /// Inclusive year range accepted by profile derivation.
    pub year_range: (i32, i32),
    /// Inclusive age range accepted by obstacle analysis.
    pub age_range: (i32, i32),
}

impl SystemInfo {
    pub const fn current() -> Self {
        Self {
            name: SYSTEM_NAME,
            version: VERSION,
            genders: &ALL_GENDERS,
            professions: &ALL_PROFESSIONS,
            event_types: &ALL_EVENT_TYPES,
            obstacle_kinds: &ALL_OBSTACLE_KINDS,
            year_range: (YEAR_MIN, YEAR_MAX),
            age_range: (AGE_MIN, AGE_MAX),
        }
    }
}
