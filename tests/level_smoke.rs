use std::fs;

use platformer_engine::{Color, DrawList, LevelConfig, SessionCore};

#[test]
fn bundled_default_level_matches_built_in_default() {
    let json = fs::read_to_string("levels/default.json").expect("levels/default.json should exist");

    let level = LevelConfig::from_json(&json).expect("default.json should parse");

    assert_eq!(level, LevelConfig::default());
}

#[test]
fn bundled_steps_level_loads_and_runs() {
    let json = fs::read_to_string("levels/steps.json").expect("levels/steps.json should exist");

    let mut session = SessionCore::from_level_json(&json).expect("steps.json should parse");
    assert_eq!(session.platforms().len(), 5);
    assert_eq!(session.platforms()[4].color(), Color::from_hex("#1565c0").unwrap());
    assert_eq!(session.player().ground_y, 360.0);

    // Drop onto the first ledge.
    let mut list = DrawList::new();
    let mut t = 0.0;
    for _ in 0..600 {
        session.tick(t, &mut list);
        t += 16.0;
    }
    let player = session.player();
    assert!(player.is_on_platform);
    assert_eq!(player.y(), 320.0 - 25.0);
}
