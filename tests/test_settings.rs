use std::path::Path;

use bug_crossing::compute::DEFAULT_ROSTER;
use bug_crossing::entities::{BoardVariant, EnemySpawn};
use bug_crossing::error::GameError;
use bug_crossing::settings::Settings;

fn parse(json: &str) -> Result<Settings, GameError> {
    Settings::from_json(json, Path::new("test.json"))
}

#[test]
fn empty_object_gives_defaults() {
    let s = parse("{}").unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.board, BoardVariant::Standard);
    assert_eq!(s.fps, 60);
    assert_eq!(s.roster(), &DEFAULT_ROSTER[..]);
}

#[test]
fn partial_file_overrides_fields() {
    let s = parse(r#"{ "board": "tall", "fps": 30, "log_file": "/tmp/bugs.log" }"#).unwrap();
    assert_eq!(s.board, BoardVariant::Tall);
    assert_eq!(s.fps, 30);
    assert_eq!(s.hold_frames, 8);
    assert_eq!(s.log_file.as_deref(), Some(Path::new("/tmp/bugs.log")));
}

#[test]
fn roster_override() {
    let s = parse(r#"{ "enemies": [ { "x": 0, "y": 92, "speed": -150 } ] }"#).unwrap();
    assert_eq!(
        s.roster(),
        &[EnemySpawn {
            x: 0.0,
            y: 92.0,
            speed: -150.0
        }]
    );
}

#[test]
fn empty_roster_falls_back_to_default() {
    let s = parse(r#"{ "enemies": [] }"#).unwrap();
    assert_eq!(s.roster().len(), DEFAULT_ROSTER.len());
}

#[test]
fn spawn_outside_patrol_bounds_is_rejected() {
    let past_right = parse(r#"{ "enemies": [ { "x": 700, "y": 10, "speed": 100 } ] }"#);
    assert!(matches!(past_right, Err(GameError::InvalidSettings(_))));
    let past_left = parse(r#"{ "enemies": [ { "x": -200, "y": 10, "speed": 100 } ] }"#);
    assert!(matches!(past_left, Err(GameError::InvalidSettings(_))));
}

#[test]
fn spawn_on_patrol_bounds_is_accepted() {
    let s = parse(
        r#"{ "enemies": [ { "x": -151, "y": 10, "speed": 100 }, { "x": 555, "y": 92, "speed": -100 } ] }"#,
    )
    .unwrap();
    assert_eq!(s.roster().len(), 2);
}

#[test]
fn fps_out_of_range_is_rejected() {
    assert!(matches!(parse(r#"{ "fps": 0 }"#), Err(GameError::InvalidSettings(_))));
    assert!(matches!(parse(r#"{ "fps": 1000 }"#), Err(GameError::InvalidSettings(_))));
}

#[test]
fn malformed_json_reports_path() {
    match parse(r#"{ "board": "wide" }"#) {
        Err(GameError::SettingsParse { path, .. }) => assert_eq!(path, Path::new("test.json")),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}
