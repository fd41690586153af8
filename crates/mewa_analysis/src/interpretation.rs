//! Interpretation texts for triggered obstacles.

use mewa_base::MewaColor;

/// Fallback when a color has no reading for a rule.
pub const UNKNOWN_COLOR_READING: &str = "Unknown color interpretation";

/// Separator between the two door readings when both conditions hold.
pub const DOOR_READING_SEPARATOR: &str = " | ";

pub const REGIONAL_READING: &str =
    "Disease, theft, encountering obstacles and undesired non-human entities";

pub const HOME_READING: &str = "Powerful ghost of hunting (Tsen) comes to the home";

pub const DOOR_ELEMENT_CLASH_READING: &str =
    "Decline for people and livestock, not prosperous";

/// Bedding reading, keyed by the subject's body color.
pub const fn bedding_reading(color: MewaColor) -> &'static str {
    match color {
        MewaColor::Black => "Meeting with demon (dud): unease of mind",
        MewaColor::Blue => "Meeting with ghost (dre): internal illness",
        MewaColor::Green => "Meeting with dragon (lu): skin disease",
        MewaColor::Yellow => {
            "Meeting with hunting ghost (ngur tsen) and land-owner: unstable house, business not smooth"
        }
        MewaColor::Red => "Contention of mouth and tongue",
        MewaColor::White => "Meeting with spirits of the white category",
    }
}

/// Door reading when life, body and power share one color.
pub const fn door_same_color_reading(color: MewaColor) -> Option<&'static str> {
    match color {
        MewaColor::White => Some(
            "Guardian spirits flee; strengthen protection and pacify the soul",
        ),
        MewaColor::Blue => Some("Disputes and water disasters"),
        MewaColor::Green => Some(
            "Meeting with dragon (lu): skin disease, not suitable to break ground",
        ),
        MewaColor::Yellow => Some("Powerful ghost of hunting (Tsen)"),
        MewaColor::Red => Some("Injury or illness, low energy"),
        MewaColor::Black => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mewa_base::ALL_MEWA_COLORS;

    #[test]
    fn every_bedding_reading_nonempty() {
        for c in ALL_MEWA_COLORS {
            assert!(!bedding_reading(c).is_empty(), "{c:?}");
        }
    }

    #[test]
    fn black_has_no_same_color_reading() {
        assert!(door_same_color_reading(MewaColor::Black).is_none());
        assert!(door_same_color_reading(MewaColor::White).is_some());
    }
}
