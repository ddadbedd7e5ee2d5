// tests/heading.rs
use glam::IVec2;
use tabletop_robot::{Heading, ParseError};

#[test]
fn test_parse_names_map_to_unit_vectors() {
    let expected = [
        ("NORTH", IVec2::new(0, 1)),
        ("EAST", IVec2::new(1, 0)),
        ("SOUTH", IVec2::new(0, -1)),
        ("WEST", IVec2::new(-1, 0)),
    ];

    for (name, vector) in expected {
        let heading = Heading::parse(name).unwrap();
        assert_eq!(heading.vector(), vector, "vector of {name}");
        assert_eq!(heading.to_string(), name);
    }
}

#[test]
fn test_parse_is_case_sensitive_and_exact() {
    for text in ["north", "North", "N", "", " NORTH", "NORTH ", "UP", "UNKNOWN"] {
        assert_eq!(
            Heading::parse(text),
            Err(ParseError::UnknownHeading(text.to_owned())),
            "{text:?} should not parse"
        );
    }
}

#[test]
fn test_from_str_matches_parse() {
    assert_eq!("WEST".parse::<Heading>(), Ok(Heading::West));
    assert!("west".parse::<Heading>().is_err());
}

#[test]
fn test_left_rotation_cycle() {
    assert_eq!(Heading::North.rotate_left(), Heading::West);
    assert_eq!(Heading::West.rotate_left(), Heading::South);
    assert_eq!(Heading::South.rotate_left(), Heading::East);
    assert_eq!(Heading::East.rotate_left(), Heading::North);
}

#[test]
fn test_right_rotation_cycle() {
    assert_eq!(Heading::North.rotate_right(), Heading::East);
    assert_eq!(Heading::East.rotate_right(), Heading::South);
    assert_eq!(Heading::South.rotate_right(), Heading::West);
    assert_eq!(Heading::West.rotate_right(), Heading::North);
}

#[test]
fn test_rotations_are_inverse() {
    for h in Heading::ALL {
        assert_eq!(h.rotate_left().rotate_right(), h);
        assert_eq!(h.rotate_right().rotate_left(), h);
    }
}
