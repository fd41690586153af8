//! Event prosperity: day/hour element relation combined with the event class.
//!
//! The day element is the stem element of the event date's year. The hour
//! element is the element of the animal ruling the event's two-hour block.
//! An inauspicious relation or an unfavorable event always rates Inauspicious.

use chrono::{Datelike, NaiveDate};
use log::debug;
use mewa_base::{Element, MewaError, cycle_tables, derive_profile, hour_animal};

use crate::prosperity_types::{
    ElementRelation, EventClass, EventType, ProsperityAssessment, ProsperityRating,
};

/// Classify the relation between a day element and an hour element.
///
/// Checked in order: day generates hour, day destroys hour, hour generates day.
pub fn element_relation(day: Element, hour: Element) -> ElementRelation {
    if day.generates() == hour {
        ElementRelation::DayGeneratesHour
    } else if day.destroys() == hour {
        ElementRelation::DayDestroysHour
    } else if hour.generates() == day {
        ElementRelation::HourGeneratesDay
    } else {
        ElementRelation::Neutral
    }
}

/// Combine the two factors into the final rating.
pub fn combine_rating(relation: ElementRelation, class: EventClass) -> ProsperityRating {
    match (relation, class) {
        (ElementRelation::DayGeneratesHour, EventClass::Favorable) => {
            ProsperityRating::HighlyAuspicious
        }
        (ElementRelation::DayDestroysHour, _) | (_, EventClass::Unfavorable) => {
            ProsperityRating::Inauspicious
        }
        (ElementRelation::HourGeneratesDay, _) => ProsperityRating::ModeratelyAuspicious,
        _ => ProsperityRating::Neutral,
    }
}

fn describe_class(event_type: EventType, class: EventClass) -> String {
    format!("{} is a {} event", event_type.name(), class.name().to_lowercase())
}

/// Assess an event at `event_hour` (0..=23) on `event_date`.
///
/// Fails with `OutOfRange("hour")` for hours outside 0..=23 and with
/// `OutOfRange("year")` for dates outside the supported year range.
pub fn assess_prosperity(
    event_type: EventType,
    event_date: NaiveDate,
    event_hour: i32,
) -> Result<ProsperityAssessment, MewaError> {
    let hour_animal = hour_animal(event_hour)?;
    let event_profile = derive_profile(event_date.year())?;
    let event_mewas = cycle_tables()?.convert_by_rotation(event_profile.cycle_name)?;

    let day_element = event_profile.element;
    let hour_element = hour_animal.element();
    let element_relation = element_relation(day_element, hour_element);
    let event_class = event_type.class();
    let rating = combine_rating(element_relation, event_class);

    debug!(
        "prosperity {event_type} {event_date} h{event_hour}: {day_element:?}/{hour_element:?} \
         {element_relation:?}, {event_class:?} → {rating}"
    );

    Ok(ProsperityAssessment {
        event_type,
        event_date,
        event_hour: event_hour as u8,
        event_profile,
        event_mewas,
        hour_animal,
        day_element,
        hour_element,
        element_relation,
        event_class,
        rating,
        reasoning: vec![
            element_relation.describe().to_string(),
            describe_class(event_type, event_class),
        ],
    })
}

/// Text front door: parses `event_type` before assessing.
///
/// Fails with `UnknownKey("event type")` for names outside the catalog.
pub fn assess_prosperity_str(
    event_type: &str,
    event_date: NaiveDate,
    event_hour: i32,
) -> Result<ProsperityAssessment, MewaError> {
    assess_prosperity(event_type.parse()?, event_date, event_hour)
}
