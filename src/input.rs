/// Keyboard input → simulation commands.
///
/// Key listeners never touch game state directly. Terminal events are mapped
/// to `KeyAction`s, and the direction keys go through a `KeyTracker` that
/// turns presses, repeats and releases into `Command`s the game loop applies
/// once per frame.
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Direction;

/// A command the simulation consumes synchronously.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Key-down on a direction key.
    Move(Direction),
    /// Key-up: stand still.
    Stop,
    /// Start (or restart) the crossing.
    Start,
}

/// What a single key event means to the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Direction(Direction),
    Start,
    Quit,
    Ignored,
}

pub fn map_key_code(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Direction(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Direction(Direction::Right)
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            KeyAction::Direction(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyAction::Direction(Direction::Down)
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Start,
        _ => KeyAction::Ignored,
    }
}

pub fn map_key(event: &KeyEvent) -> KeyAction {
    map_key_code(event.code, event.modifiers)
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// Tracks which direction keys are held and when they were last seen.
///
/// Terminals with keyboard enhancement report releases directly. Classic
/// terminals only repeat `Press` while a key is down, so a key that has been
/// silent for more than `hold_frames` frames counts as released.
#[derive(Debug)]
pub struct KeyTracker {
    last_seen: HashMap<Direction, u64>,
    hold_frames: u64,
}

impl KeyTracker {
    pub fn new(hold_frames: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            hold_frames,
        }
    }

    /// Feed one direction-key event seen on `frame`.
    pub fn handle(&mut self, dir: Direction, kind: KeyEventKind, frame: u64) -> Option<Command> {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(dir, frame);
                Some(Command::Move(dir))
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&dir);
                Some(Command::Stop)
            }
        }
    }

    /// Expire silent keys. Returns `Stop` on the frame the last held key
    /// lapses.
    pub fn poll(&mut self, frame: u64) -> Option<Command> {
        if self.last_seen.is_empty() {
            return None;
        }
        let window = self.hold_frames;
        self.last_seen
            .retain(|_, last| frame.saturating_sub(*last) <= window);
        if self.last_seen.is_empty() {
            Some(Command::Stop)
        } else {
            None
        }
    }
}
