//! Full analysis: profile → mewas → obstacles for one subject.

use chrono::{DateTime, Utc};
use log::debug;
use mewa_base::{CycleProfile, MewaError, MewaTriple, cycle_tables, derive_profile};

use crate::demographic::{Gender, Profession};
use crate::obstacle::analyze_obstacles;
use crate::obstacle_types::ObstacleAnalysis;

/// Version stamped on every analysis.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Snapshot of a subject's profile, mewas and obstacles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullAnalysis {
    pub subject_profile: CycleProfile,
    /// Rotation-method mewas of the birth year.
    pub subject_mewas: MewaTriple,
    pub obstacle_analysis: ObstacleAnalysis,
    pub generated_at: DateTime<Utc>,
    pub version: &'static str,
}

/// Run the full analysis, stamped with the current time.
pub fn full_analysis(
    birth_year: i32,
    current_year: i32,
    age: i32,
    gender: Gender,
    profession: Profession,
) -> Result<FullAnalysis, MewaError> {
    full_analysis_at(
        birth_year,
        current_year,
        age,
        gender,
        profession,
        Utc::now(),
    )
}

/// Run the full analysis with an explicit timestamp.
pub fn full_analysis_at(
    birth_year: i32,
    current_year: i32,
    age: i32,
    gender: Gender,
    profession: Profession,
    generated_at: DateTime<Utc>,
) -> Result<FullAnalysis, MewaError> {
    let subject_profile = derive_profile(birth_year)?;
    let subject_mewas = cycle_tables()?.convert_by_rotation(subject_profile.cycle_name)?;
    let obstacle_analysis =
        analyze_obstacles(&subject_mewas, current_year, age, gender, profession)?;

    debug!(
        "full analysis: born {birth_year} ({}), year {current_year}, {} obstacle(s)",
        subject_profile.cycle_name,
        obstacle_analysis.count()
    );

    Ok(FullAnalysis {
        subject_profile,
        subject_mewas,
        obstacle_analysis,
        generated_at,
        version: VERSION,
    })
}
