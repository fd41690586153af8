//! Types for event prosperity assessment.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use mewa_base::{Animal, CycleProfile, Element, MewaError, MewaTriple};

/// The 12 event types in the prosperity catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Massacre,
    Pregnancy,
    Adulthood,
    Birthday,
    Baptism,
    WearingNewClothes,
    UndertakingActivities,
    Prosperity,
    Decline,
    Sickness,
    Death,
    Funeral,
}

/// All 12 event types in catalog order.
pub const ALL_EVENT_TYPES: [EventType; 12] = [
    EventType::Massacre,
    EventType::Pregnancy,
    EventType::Adulthood,
    EventType::Birthday,
    EventType::Baptism,
    EventType::WearingNewClothes,
    EventType::UndertakingActivities,
    EventType::Prosperity,
    EventType::Decline,
    EventType::Sickness,
    EventType::Death,
    EventType::Funeral,
];

/// Events that favor a good outcome.
pub const FAVORABLE_EVENTS: [EventType; 6] = [
    EventType::Pregnancy,
    EventType::Adulthood,
    EventType::Birthday,
    EventType::Baptism,
    EventType::WearingNewClothes,
    EventType::Prosperity,
];

/// Events that count against a good outcome.
pub const UNFAVORABLE_EVENTS: [EventType; 4] = [
    EventType::Massacre,
    EventType::Decline,
    EventType::Sickness,
    EventType::Death,
];

impl EventType {
    /// Catalog display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Massacre => "Massacre",
            Self::Pregnancy => "Pregnancy",
            Self::Adulthood => "Adulthood",
            Self::Birthday => "Birthday",
            Self::Baptism => "Baptism",
            Self::WearingNewClothes => "Wearing new clothes",
            Self::UndertakingActivities => "Undertaking activities",
            Self::Prosperity => "Prosperity",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Funeral => "Funeral",
        }
    }

    /// Native glyph name.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Massacre => "屠杀",
            Self::Pregnancy => "怀孕",
            Self::Adulthood => "成年",
            Self::Birthday => "生辰",
            Self::Baptism => "洗礼",
            Self::WearingNewClothes => "着衣",
            Self::UndertakingActivities => "行事",
            Self::Prosperity => "盛",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Funeral => "殡葬",
        }
    }

    /// Membership in the favorable/unfavorable lists; anything else is neutral.
    pub fn class(self) -> EventClass {
        if FAVORABLE_EVENTS.contains(&self) {
            EventClass::Favorable
        } else if UNFAVORABLE_EVENTS.contains(&self) {
            EventClass::Unfavorable
        } else {
            EventClass::Neutral
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventType {
    type Err = MewaError;

    /// Accepts the display name in any case, with `_`/`-` for spaces, or the glyph name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace(['_', '-'], " ");
        ALL_EVENT_TYPES
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(&key) || e.glyph() == key)
            .ok_or_else(|| MewaError::unknown_key("event type", s))
    }
}

/// Event-type factor of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventClass {
    Favorable,
    Unfavorable,
    Neutral,
}

impl EventClass {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Favorable => "Favorable",
            Self::Unfavorable => "Unfavorable",
            Self::Neutral => "Neutral",
        }
    }
}

/// Relationship between the day element and the hour element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Day generates hour: auspicious.
    DayGeneratesHour,
    /// Day destroys hour: inauspicious.
    DayDestroysHour,
    /// Hour generates day: moderately auspicious.
    HourGeneratesDay,
    Neutral,
}

impl ElementRelation {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::DayGeneratesHour => "Day element generates Hour element (Auspicious)",
            Self::DayDestroysHour => "Day element clashes with Hour element (Inauspicious)",
            Self::HourGeneratesDay => "Hour element generates Day element (Moderately Auspicious)",
            Self::Neutral => "Neutral element relationship",
        }
    }
}

/// Final qualitative rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProsperityRating {
    HighlyAuspicious,
    ModeratelyAuspicious,
    Neutral,
    Inauspicious,
}

pub const ALL_PROSPERITY_RATINGS: [ProsperityRating; 4] = [
    ProsperityRating::HighlyAuspicious,
    ProsperityRating::ModeratelyAuspicious,
    ProsperityRating::Neutral,
    ProsperityRating::Inauspicious,
];

impl ProsperityRating {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighlyAuspicious => "Highly Auspicious",
            Self::ModeratelyAuspicious => "Moderately Auspicious",
            Self::Neutral => "Neutral",
            Self::Inauspicious => "Inauspicious",
        }
    }
}

impl Display for ProsperityRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Prosperity assessment of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProsperityAssessment {
    pub event_type: EventType,
    pub event_date: NaiveDate,
    /// Hour of day, 0..=23.
    pub event_hour: u8,
    /// Profile of the event date's year.
    pub event_profile: CycleProfile,
    pub event_mewas: MewaTriple,
    pub hour_animal: Animal,
    pub day_element: Element,
    pub hour_element: Element,
    pub element_relation: ElementRelation,
    pub event_class: EventClass,
    pub rating: ProsperityRating,
    /// Contributing factors, element relation first.
    pub reasoning: Vec<String>,
}
