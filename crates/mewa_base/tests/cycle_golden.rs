//! Integration tests for cycle profiles and mewa conversion.
//!
//! Pure-table tests (no external data needed).

use std::collections::HashSet;

use mewa_base::{
    Animal, CYCLE_LEN, CycleName, Element, MewaColor, MewaError, MewaMethod, Polarity, YEAR_MAX,
    YEAR_MIN, convert_by_offset, convert_by_rotation, convert_mewas, cycle_tables,
    derive_profile, wrap_nine,
};

// ---------------------------------------------------------------------------
// Cycle names
// ---------------------------------------------------------------------------

#[test]
fn sixty_distinct_names() {
    let t = cycle_tables().unwrap();
    let set: HashSet<String> = t.names().iter().map(|n| n.to_string()).collect();
    assert_eq!(set.len(), CYCLE_LEN);
    let glyphs: HashSet<String> = t.names().iter().map(|n| n.glyph_name()).collect();
    assert_eq!(glyphs.len(), CYCLE_LEN);
}

#[test]
fn every_name_parses_back() {
    let t = cycle_tables().unwrap();
    for n in t.names() {
        assert_eq!(n.to_string().parse::<CycleName>().unwrap(), *n);
        assert_eq!(n.glyph_name().parse::<CycleName>().unwrap(), *n);
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[test]
fn every_year_maps_into_the_cycle() {
    let t = cycle_tables().unwrap();
    for y in YEAR_MIN..=YEAR_MAX {
        let p = derive_profile(y).unwrap();
        assert!(t.contains(p.cycle_name), "year {y}");
        assert!(p.cycle_position < 60);
        assert_eq!(p.element, p.cycle_name.element());
        assert_eq!(p.polarity, p.cycle_name.polarity());
        assert_eq!(p.animal, p.cycle_name.animal());
    }
}

#[test]
fn sixty_year_periodicity() {
    for y in YEAR_MIN..=YEAR_MAX - 60 {
        let a = derive_profile(y).unwrap();
        let b = derive_profile(y + 60).unwrap();
        assert_eq!(a.cycle_name, b.cycle_name, "year {y}");
        assert_eq!(a.cycle_position, b.cycle_position, "year {y}");
    }
}

#[test]
fn consecutive_years_advance_one_position() {
    for y in YEAR_MIN..YEAR_MAX {
        let a = derive_profile(y).unwrap().cycle_name.position();
        let b = derive_profile(y + 1).unwrap().cycle_name.position();
        assert_eq!((a + 1) % 60, b, "year {y}");
    }
}

#[test]
fn scenario_1990() {
    let p = derive_profile(1990).unwrap();
    assert_eq!(p.animal, Animal::Horse);
    assert_eq!(p.element, Element::Metal);
    assert_eq!(p.polarity, Polarity::Yang);
    assert_eq!(p.cycle_name.to_string(), "MetalYangHorse");
}

#[test]
fn scenario_1984_anchor() {
    let p = derive_profile(1984).unwrap();
    assert_eq!(p.animal, Animal::Rat);
    assert_eq!(p.element, Element::Wood);
    assert_eq!(p.polarity, Polarity::Yang);
    assert_eq!(p.cycle_name.to_string(), "WoodYangRat");
    assert_eq!(convert_by_rotation(p.cycle_name).unwrap().life.number, 1);
}

#[test]
fn scenario_2025() {
    let p = derive_profile(2025).unwrap();
    assert_eq!(p.cycle_name.to_string(), "WoodYinSnake");
    assert_eq!(p.cycle_name.position(), 41);
    assert_eq!(p.cycle_position, 42);
    let m = convert_by_rotation(p.cycle_name).unwrap();
    assert_eq!((m.life.number, m.body.number, m.power.number), (5, 8, 2));
    assert_eq!(m.body.color, MewaColor::White);
    assert_eq!(m.body.element, Element::Metal);
}

// ---------------------------------------------------------------------------
// Mewa conversion
// ---------------------------------------------------------------------------

#[test]
fn rotation_numbers_in_range() {
    for n in cycle_tables().unwrap().names() {
        let m = convert_by_rotation(*n).unwrap();
        for x in [m.life, m.body, m.power] {
            assert!((1..=9).contains(&x.number), "{n}");
        }
    }
}

#[test]
fn offset_steps_by_three() {
    for n in cycle_tables().unwrap().names() {
        let m = convert_by_offset(*n).unwrap();
        assert_eq!(m.body.number, wrap_nine(i32::from(m.life.number) + 3), "{n}");
        assert_eq!(m.power.number, wrap_nine(i32::from(m.body.number) + 3), "{n}");
    }
}

#[test]
fn both_methods_share_life() {
    for n in cycle_tables().unwrap().names() {
        let a = convert_by_rotation(*n).unwrap();
        let b = convert_by_offset(*n).unwrap();
        assert_eq!(a.life, b.life, "{n}");
    }
}

#[test]
fn idempotent_calls() {
    for y in [1000, 1984, 1990, 2025, 3000] {
        assert_eq!(derive_profile(y).unwrap(), derive_profile(y).unwrap());
    }
    for method in [MewaMethod::Rotation, MewaMethod::Offset] {
        assert_eq!(
            convert_mewas("FireYinRabbit", method).unwrap(),
            convert_mewas("FireYinRabbit", method).unwrap()
        );
    }
}

#[test]
fn text_front_door_errors() {
    assert!(matches!(
        convert_mewas("MetalYangHorse (Horse)", MewaMethod::Rotation),
        Err(MewaError::UnknownKey { .. })
    ));
    assert!(matches!(
        derive_profile(3001),
        Err(MewaError::OutOfRange { field: "year", .. })
    ));
}
