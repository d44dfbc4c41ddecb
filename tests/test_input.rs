use bug_crossing::entities::Direction;
use bug_crossing::input::*;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[test]
fn arrows_and_wasd_map_to_directions() {
    let none = KeyModifiers::NONE;
    assert_eq!(map_key_code(KeyCode::Left, none), KeyAction::Direction(Direction::Left));
    assert_eq!(map_key_code(KeyCode::Char('a'), none), KeyAction::Direction(Direction::Left));
    assert_eq!(map_key_code(KeyCode::Right, none), KeyAction::Direction(Direction::Right));
    assert_eq!(map_key_code(KeyCode::Char('D'), none), KeyAction::Direction(Direction::Right));
    assert_eq!(map_key_code(KeyCode::Up, none), KeyAction::Direction(Direction::Up));
    assert_eq!(map_key_code(KeyCode::Char('w'), none), KeyAction::Direction(Direction::Up));
    assert_eq!(map_key_code(KeyCode::Down, none), KeyAction::Direction(Direction::Down));
    assert_eq!(map_key_code(KeyCode::Char('s'), none), KeyAction::Direction(Direction::Down));
}

#[test]
fn start_quit_and_unknown_keys() {
    let none = KeyModifiers::NONE;
    assert_eq!(map_key_code(KeyCode::Enter, none), KeyAction::Start);
    assert_eq!(map_key_code(KeyCode::Char('q'), none), KeyAction::Quit);
    assert_eq!(map_key_code(KeyCode::Esc, none), KeyAction::Quit);
    assert_eq!(
        map_key_code(KeyCode::Char('c'), KeyModifiers::CONTROL),
        KeyAction::Quit
    );
    assert_eq!(map_key_code(KeyCode::Char('c'), none), KeyAction::Ignored);
    assert_eq!(map_key_code(KeyCode::Tab, none), KeyAction::Ignored);
}

#[test]
fn map_key_reads_the_event_code() {
    let ev = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
    assert_eq!(map_key(&ev), KeyAction::Direction(Direction::Up));
}

#[test]
fn press_and_repeat_issue_move() {
    let mut keys = KeyTracker::new(4);
    assert_eq!(
        keys.handle(Direction::Up, KeyEventKind::Press, 1),
        Some(Command::Move(Direction::Up))
    );
    assert_eq!(
        keys.handle(Direction::Up, KeyEventKind::Repeat, 3),
        Some(Command::Move(Direction::Up))
    );
    // Still inside the hold window
    assert_eq!(keys.poll(6), None);
}

#[test]
fn release_issues_stop() {
    let mut keys = KeyTracker::new(4);
    keys.handle(Direction::Left, KeyEventKind::Press, 1);
    assert_eq!(
        keys.handle(Direction::Left, KeyEventKind::Release, 2),
        Some(Command::Stop)
    );
    assert_eq!(keys.poll(3), None);
}

#[test]
fn silent_key_expires_after_hold_window() {
    let mut keys = KeyTracker::new(4);
    keys.handle(Direction::Right, KeyEventKind::Press, 10);
    assert_eq!(keys.poll(12), None);
    assert_eq!(keys.poll(14), None);
    assert_eq!(keys.poll(15), Some(Command::Stop));
    // Only once
    assert_eq!(keys.poll(16), None);
}

#[test]
fn repeats_keep_key_alive() {
    let mut keys = KeyTracker::new(4);
    keys.handle(Direction::Down, KeyEventKind::Press, 1);
    for frame in (4..40).step_by(3) {
        keys.handle(Direction::Down, KeyEventKind::Press, frame);
        assert_eq!(keys.poll(frame + 1), None);
    }
    assert_eq!(keys.poll(41), None);
    assert_eq!(keys.poll(42), Some(Command::Stop));
}

#[test]
fn stop_waits_for_last_held_key() {
    let mut keys = KeyTracker::new(2);
    keys.handle(Direction::Up, KeyEventKind::Press, 1);
    keys.handle(Direction::Left, KeyEventKind::Press, 3);
    assert_eq!(keys.poll(4), None); // Up lapses, Left still held
    assert_eq!(keys.poll(6), Some(Command::Stop));
}
