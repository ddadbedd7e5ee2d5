// tests/serialization.rs
use tabletop_robot::{Agent, Heading, Position};

#[test]
fn test_headings_serialize_as_uppercase_names() {
    for heading in Heading::ALL {
        let json = serde_json::to_string(&heading).unwrap();
        assert_eq!(json, format!("\"{}\"", heading.as_str()));
        assert_eq!(serde_json::from_str::<Heading>(&json).unwrap(), heading);
    }
    assert_eq!(serde_json::to_string(&Heading::East).unwrap(), "\"EAST\"");
    assert!(serde_json::from_str::<Heading>("\"east\"").is_err());
}

#[test]
fn test_position_round_trip_keeps_off_table_coordinates() {
    let position = Position::default();
    let json = serde_json::to_string(&position).unwrap();
    let restored: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, position);
    assert!(!restored.is_valid());
}

#[test]
fn test_agent_round_trip() {
    let mut agent = Agent::new();
    agent.place(Position::new(3, 1), Heading::East);
    agent.turn_left();

    let json = serde_json::to_string(&agent).unwrap();
    assert!(json.contains("\"NORTH\""), "unexpected snapshot: {json}");

    let restored: Agent = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, agent);
    assert_eq!(restored.report(), "3,1,NORTH");
    assert!(restored.on_table());
}
