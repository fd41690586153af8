//! Obstacle analysis: compares a subject's mewas with a reference year's.
//!
//! All four rules look at the reference year's body mewa:
//! - Regional: its number equals the subject's darkness-body reference number
//! - Home: its number equals the subject's body number
//! - Bedding: its color equals the subject's body color
//! - Door: its element clashes with the subject's body element, and/or the
//!   subject's life, body and power colors are all the same

use log::{debug, trace};
use mewa_base::{Mewa, MewaError, MewaTriple, cycle_tables, derive_profile};

use crate::demographic::{DemographicClass, Gender, Profession};
use crate::interpretation::{
    DOOR_ELEMENT_CLASH_READING, DOOR_READING_SEPARATOR, HOME_READING, REGIONAL_READING,
    UNKNOWN_COLOR_READING, bedding_reading, door_same_color_reading,
};
use crate::obstacle_types::{
    ClashDirection, ElementClash, Obstacle, ObstacleAnalysis, ObstacleDetails, ObstacleKind,
};

/// Analyze the four obstacles for a subject in `reference_year`.
///
/// The reference year's mewas always come from the rotation tables.
pub fn analyze_obstacles(
    subject_mewas: &MewaTriple,
    reference_year: i32,
    age: i32,
    gender: Gender,
    profession: Profession,
) -> Result<ObstacleAnalysis, MewaError> {
    let reference_profile = derive_profile(reference_year)?;
    let reference_mewas = cycle_tables()?.convert_by_rotation(reference_profile.cycle_name)?;
    let class = DemographicClass::classify(age, gender, profession)?;

    let year_body = &reference_mewas.body;
    let obstacles: Vec<Obstacle> = [
        regional_obstacle(year_body, class),
        home_obstacle(year_body, &subject_mewas.body),
        bedding_obstacle(year_body, &subject_mewas.body),
        door_obstacle(year_body, subject_mewas),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!(
        "obstacles for {reference_year} ({}), class {:?}: {} found",
        reference_profile.cycle_name,
        class,
        obstacles.len()
    );

    Ok(ObstacleAnalysis {
        reference_profile,
        reference_mewas,
        obstacles,
    })
}

/// Regional obstacle: year body number equals the class reference number.
pub fn regional_obstacle(year_body: &Mewa, class: DemographicClass) -> Option<Obstacle> {
    let reference_mewa = class.reference_mewa();
    let hit = year_body.number == reference_mewa;
    trace!(
        "RO: year body {} vs {:?} reference {} → {hit}",
        year_body.number, class, reference_mewa
    );
    hit.then(|| Obstacle {
        kind: ObstacleKind::Regional,
        interpretation: REGIONAL_READING.to_string(),
        details: ObstacleDetails::Regional {
            year_body_mewa: year_body.number,
            reference_mewa,
            class,
        },
    })
}

/// Home obstacle: year body number equals the subject's body number.
pub fn home_obstacle(year_body: &Mewa, subject_body: &Mewa) -> Option<Obstacle> {
    let hit = year_body.number == subject_body.number;
    trace!(
        "HO: year body {} vs subject body {} → {hit}",
        year_body.number, subject_body.number
    );
    hit.then(|| Obstacle {
        kind: ObstacleKind::Home,
        interpretation: HOME_READING.to_string(),
        details: ObstacleDetails::Home {
            year_body_mewa: year_body.number,
            subject_body_mewa: subject_body.number,
        },
    })
}

/// Bedding obstacle: body colors match (numbers may differ).
pub fn bedding_obstacle(year_body: &Mewa, subject_body: &Mewa) -> Option<Obstacle> {
    let hit = year_body.color == subject_body.color;
    trace!(
        "BO: year color {:?} vs subject color {:?} → {hit}",
        year_body.color, subject_body.color
    );
    hit.then(|| Obstacle {
        kind: ObstacleKind::Bedding,
        interpretation: bedding_reading(subject_body.color).to_string(),
        details: ObstacleDetails::Bedding {
            year_body_color: year_body.color,
            subject_body_color: subject_body.color,
        },
    })
}

/// Element clash between body elements, checked in both directions.
pub fn element_clash(year_body: &Mewa, subject_body: &Mewa) -> Option<ElementClash> {
    let (year, subject) = (year_body.element, subject_body.element);
    let direction = if year.destroys() == subject {
        ClashDirection::YearDestroysSubject
    } else if subject.destroys() == year {
        ClashDirection::SubjectDestroysYear
    } else {
        return None;
    };
    Some(ElementClash {
        year_element: year,
        subject_element: subject,
        direction,
    })
}

/// Door obstacle: element clash and/or three identical subject colors.
pub fn door_obstacle(year_body: &Mewa, subject_mewas: &MewaTriple) -> Option<Obstacle> {
    let clash = element_clash(year_body, &subject_mewas.body);
    let common_color = subject_mewas.common_color();
    trace!("DO: clash {clash:?}, common color {common_color:?}");

    if clash.is_none() && common_color.is_none() {
        return None;
    }

    let mut readings = Vec::with_capacity(2);
    if clash.is_some() {
        readings.push(DOOR_ELEMENT_CLASH_READING);
    }
    if let Some(color) = common_color {
        readings.push(door_same_color_reading(color).unwrap_or(UNKNOWN_COLOR_READING));
    }

    Some(Obstacle {
        kind: ObstacleKind::Door,
        interpretation: readings.join(DOOR_READING_SEPARATOR),
        details: ObstacleDetails::Door {
            element_clash: clash,
            common_color,
        },
    })
}
