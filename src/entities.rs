/// Game entity types. Data plus the draw hook, no simulation logic.
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::resources::Renderer;

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Every visual resource the game can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    WaterBlock,
    StoneBlock,
    GrassBlock,
    /// Enemy facing right (the default variant).
    EnemyRight,
    /// Enemy facing left, used after bouncing off the right bound.
    EnemyLeft,
    Player,
}

impl SpriteId {
    pub const ALL: [SpriteId; 6] = [
        SpriteId::WaterBlock,
        SpriteId::StoneBlock,
        SpriteId::GrassBlock,
        SpriteId::EnemyRight,
        SpriteId::EnemyLeft,
        SpriteId::Player,
    ];
}

// ── Shared base ───────────────────────────────────────────────────────────────

/// A point in canvas units. `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position plus the sprite drawn there. Embedded in every drawable thing.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub pos: Position,
    pub sprite: SpriteId,
}

impl Entity {
    pub fn new(x: f32, y: f32, sprite: SpriteId) -> Self {
        Self {
            pos: Position::new(x, y),
            sprite,
        }
    }

    /// Draw the sprite at the current position.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), GameError> {
        renderer.draw(self.sprite, self.pos.x, self.pos.y)
    }
}

// ── Enemy & player ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub entity: Entity,
    /// Canvas units per second. Only the sign ever changes.
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            entity: Entity::new(x, y, SpriteId::EnemyRight),
            speed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub entity: Entity,
    /// Horizontal step per tick.
    pub dx: i32,
    /// Vertical step per tick.
    pub dy: i32,
}

impl Player {
    pub fn new(start: Position) -> Self {
        Self {
            entity: Entity::new(start.x, start.y, SpriteId::Player),
            dx: 0,
            dy: 0,
        }
    }

    pub fn reset_to(&mut self, start: Position) {
        self.entity.pos = start;
    }
}

/// Starting placement of one enemy. Used for the default roster and for
/// roster overrides in the settings file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl EnemySpawn {
    pub fn spawn(&self) -> Enemy {
        Enemy::new(self.x, self.y, self.speed)
    }
}

/// Directional key as seen by the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    None,
}

// ── Board ─────────────────────────────────────────────────────────────────────

/// Which board-height constant set to play on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardVariant {
    #[default]
    Standard,
    Tall,
}

/// Per-board constants. Each variant is internally consistent.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub variant: BoardVariant,
    /// Where the player starts and is sent back to.
    pub start: Position,
    /// Lowest `y` the player may reach.
    pub floor_y: f32,
    /// The player has won once `y <= win_y`.
    pub win_y: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Tile rows, top to bottom.
    pub rows: Vec<SpriteId>,
}

/// Width of one board tile.
pub const TILE_WIDTH: f32 = 101.0;
/// Height of one board row.
pub const TILE_HEIGHT: f32 = 83.0;
pub const BOARD_COLUMNS: usize = 5;

impl Board {
    pub fn new(variant: BoardVariant) -> Self {
        use SpriteId::{GrassBlock, StoneBlock, WaterBlock};
        match variant {
            BoardVariant::Standard => Board {
                variant,
                start: Position::new(200.0, 330.0),
                floor_y: 356.0,
                win_y: -50.0,
                canvas_width: 505.0,
                canvas_height: 498.0,
                rows: vec![WaterBlock, StoneBlock, StoneBlock, StoneBlock, GrassBlock, GrassBlock],
            },
            BoardVariant::Tall => Board {
                variant,
                start: Position::new(200.0, 380.0),
                floor_y: 406.0,
                win_y: -50.0,
                canvas_width: 505.0,
                canvas_height: 581.0,
                rows: vec![
                    WaterBlock, StoneBlock, StoneBlock, StoneBlock, GrassBlock, GrassBlock,
                    GrassBlock,
                ],
            },
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BoardVariant::Standard)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the player to press start.
    Idle,
    Running,
    /// Passed through on the tick the goal row is reached.
    WonTransitioning,
}

/// Result of one simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StepOutcome {
    pub collided: bool,
    pub won: bool,
    /// Where the player stood when the goal row was reached. Set only on
    /// the winning tick, after which the player is already back at start.
    pub crossed_at: Option<Position>,
}

/// Everything the simulation reads and writes. Owned by the caller and
/// passed into every operation.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub enemies: Vec<Enemy>,
    pub player: Player,
    pub status: GameStatus,
}
