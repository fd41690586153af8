//! Types for obstacle analysis results.

use mewa_base::{CycleProfile, Element, MewaColor, MewaTriple};

use crate::demographic::DemographicClass;

/// The four obstacle categories, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObstacleKind {
    Regional,
    Home,
    Bedding,
    Door,
}

pub const ALL_OBSTACLE_KINDS: [ObstacleKind; 4] = [
    ObstacleKind::Regional,
    ObstacleKind::Home,
    ObstacleKind::Bedding,
    ObstacleKind::Door,
];

impl ObstacleKind {
    /// Two-letter code (RO, HO, BO, DO).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Regional => "RO",
            Self::Home => "HO",
            Self::Bedding => "BO",
            Self::Door => "DO",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Regional => "Regional Obstacle",
            Self::Home => "Home Obstacle",
            Self::Bedding => "Bedding Obstacle",
            Self::Door => "Door Obstacle",
        }
    }
}

/// Which side of an element clash destroys the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClashDirection {
    /// The reference year's body element destroys the subject's.
    YearDestroysSubject,
    /// The subject's body element destroys the reference year's.
    SubjectDestroysYear,
}

/// Element clash between reference-year and subject body mewas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementClash {
    pub year_element: Element,
    pub subject_element: Element,
    pub direction: ClashDirection,
}

/// Values used to decide an obstacle, per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleDetails {
    Regional {
        year_body_mewa: u8,
        reference_mewa: u8,
        class: DemographicClass,
    },
    Home {
        year_body_mewa: u8,
        subject_body_mewa: u8,
    },
    Bedding {
        year_body_color: MewaColor,
        subject_body_color: MewaColor,
    },
    /// At least one of the two fields is set; both may be.
    Door {
        element_clash: Option<ElementClash>,
        common_color: Option<MewaColor>,
    },
}

/// A triggered obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Non-empty reading for the subject.
    pub interpretation: String,
    pub details: ObstacleDetails,
}

/// Obstacle analysis of a subject against a reference year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleAnalysis {
    pub reference_profile: CycleProfile,
    pub reference_mewas: MewaTriple,
    /// Triggered obstacles in order Regional, Home, Bedding, Door.
    pub obstacles: Vec<Obstacle>,
}

impl ObstacleAnalysis {
    /// Number of triggered obstacles.
    pub fn count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn kinds(&self) -> Vec<ObstacleKind> {
        self.obstacles.iter().map(|o| o.kind).collect()
    }

    pub fn get(&self, kind: ObstacleKind) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.kind == kind)
    }

    pub fn has(&self, kind: ObstacleKind) -> bool {
        self.get(kind).is_some()
    }
}
