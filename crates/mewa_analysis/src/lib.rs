//! Obstacle analysis, prosperity assessment and reports on top of `mewa_base`.
//!
//! This crate provides:
//! - Demographic classification and the four obstacle rules
//!   (Regional, Home, Bedding, Door)
//! - Event prosperity from day/hour element relations and event class
//! - The full-analysis facade (profile → mewas → obstacles)
//! - Plain-text reports and a static system summary

pub mod analysis;
pub mod demographic;
pub mod info;
pub mod interpretation;
pub mod obstacle;
pub mod obstacle_types;
pub mod prosperity;
pub mod prosperity_types;
pub mod report;

pub use analysis::{FullAnalysis, VERSION, full_analysis, full_analysis_at};
pub use demographic::{
    AGE_MAX, AGE_MIN, ALL_DEMOGRAPHIC_CLASSES, ALL_GENDERS, ALL_PROFESSIONS, DemographicClass,
    Gender, Profession,
};
pub use info::{SYSTEM_NAME, SystemInfo};
pub use obstacle::{
    analyze_obstacles, bedding_obstacle, door_obstacle, element_clash, home_obstacle,
    regional_obstacle,
};
pub use obstacle_types::{
    ALL_OBSTACLE_KINDS, ClashDirection, ElementClash, Obstacle, ObstacleAnalysis,
    ObstacleDetails, ObstacleKind,
};
pub use prosperity::{assess_prosperity, assess_prosperity_str, combine_rating, element_relation};
pub use prosperity_types::{
    ALL_EVENT_TYPES, ALL_PROSPERITY_RATINGS, ElementRelation, EventClass, EventType,
    FAVORABLE_EVENTS, ProsperityAssessment, ProsperityRating, UNFAVORABLE_EVENTS,
};
pub use report::{
    CycleTableReport, FullAnalysisReport, ProsperityReport, render_cycle_table,
    render_full_analysis, render_prosperity,
};

// Re-export base types so callers only need this crate.
pub use mewa_base::{
    Animal, CycleName, CycleProfile, Element, Mewa, MewaColor, MewaError, MewaMethod, MewaTriple,
    Polarity, convert_mewas, cycle_tables, derive_profile,
};
