/// Game-logic functions.
///
/// Every operation takes the pieces of `GameState` it touches by mutable
/// reference and never performs I/O. Enemy motion is scaled by `dt`; player
/// motion is a fixed step per tick regardless of frame timing.
use log::{debug, info, trace};

use crate::collision::player_hits_enemy;
use crate::entities::{
    Board, Direction, Enemy, EnemySpawn, GameState, GameStatus, Player, SpriteId, StepOutcome,
};
use crate::input::Command;

// ── Tuning ───────────────────────────────────────────────────────────────────

/// Past this `x` an enemy turns around and faces left.
pub const ENEMY_RIGHT_BOUND: f32 = 555.0;
/// Below this `x` an enemy turns around and faces right.
pub const ENEMY_LEFT_BOUND: f32 = -151.0;

/// Player step per tick while a direction key is held.
pub const PLAYER_STEP: i32 = 2;
pub const PLAYER_MIN_X: f32 = -16.0;
pub const PLAYER_MAX_X: f32 = 420.0;

/// Eight bugs over three lanes, all entering from off-screen left.
pub static DEFAULT_ROSTER: [EnemySpawn; 8] = [
    EnemySpawn { x: -101.0, y: 10.0, speed: 200.0 },
    EnemySpawn { x: -101.0, y: 92.0, speed: 120.0 },
    EnemySpawn { x: -101.0, y: 174.0, speed: 320.0 },
    EnemySpawn { x: -101.0, y: 10.0, speed: 300.0 },
    EnemySpawn { x: -101.0, y: 92.0, speed: 180.0 },
    EnemySpawn { x: -101.0, y: 174.0, speed: 260.0 },
    EnemySpawn { x: -101.0, y: 10.0, speed: 260.0 },
    EnemySpawn { x: -101.0, y: 174.0, speed: 200.0 },
];

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh, idle game on `board` with one enemy per roster entry.
pub fn init_state(board: Board, roster: &[EnemySpawn]) -> GameState {
    let player = Player::new(board.start);
    GameState {
        enemies: roster.iter().map(EnemySpawn::spawn).collect(),
        player,
        board,
        status: GameStatus::Idle,
    }
}

/// Idle → Running. Has no effect on a game already running.
pub fn start_game(state: &mut GameState) {
    if state.status == GameStatus::Idle {
        info!("game started with {} enemies", state.enemies.len());
        state.status = GameStatus::Running;
    }
}

// ── Entities ─────────────────────────────────────────────────────────────────

/// Move an enemy along its lane, bouncing between the two bounds.
///
/// The bounds are checked on every call, so an enemy already past a bound
/// turns around even when `dt` is zero.
pub fn advance_enemy(enemy: &mut Enemy, dt: f32) {
    debug_assert!(dt >= 0.0, "dt must be non-negative, got {dt}");
    enemy.entity.pos.x += enemy.speed * dt;

    if enemy.entity.pos.x > ENEMY_RIGHT_BOUND {
        enemy.entity.sprite = SpriteId::EnemyLeft;
        enemy.speed = -enemy.speed;
        trace!("enemy at y={} reversed at right bound", enemy.entity.pos.y);
    }
    if enemy.entity.pos.x < ENEMY_LEFT_BOUND {
        enemy.entity.sprite = SpriteId::EnemyRight;
        enemy.speed = -enemy.speed;
        trace!("enemy at y={} reversed at left bound", enemy.entity.pos.y);
    }
}

/// Zero the velocity, then point it along `key`.
pub fn set_player_direction(player: &mut Player, key: Direction) {
    player.dx = 0;
    player.dy = 0;
    match key {
        Direction::Left => player.dx = -PLAYER_STEP,
        Direction::Right => player.dx = PLAYER_STEP,
        Direction::Up => player.dy = -PLAYER_STEP,
        Direction::Down => player.dy = PLAYER_STEP,
        Direction::None => {}
    }
}

/// Apply one fixed step and clamp to the play field. The top edge is left
/// open: crossing it is how the game is won.
pub fn advance_player(player: &mut Player, floor_y: f32) {
    let pos = &mut player.entity.pos;
    pos.x = (pos.x + player.dx as f32).clamp(PLAYER_MIN_X, PLAYER_MAX_X);
    pos.y = (pos.y + player.dy as f32).min(floor_y);
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Consume one input command.
pub fn apply_command(state: &mut GameState, command: Command) {
    match command {
        Command::Move(key) => set_player_direction(&mut state.player, key),
        Command::Stop => set_player_direction(&mut state.player, Direction::None),
        Command::Start => start_game(state),
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick of `dt` seconds.
///
/// Does nothing unless the game is running.
pub fn step_simulation(state: &mut GameState, dt: f32) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if state.status != GameStatus::Running {
        return outcome;
    }

    // ── 1. Enemies ───────────────────────────────────────────────────────────
    for enemy in &mut state.enemies {
        advance_enemy(enemy, dt);
    }

    // ── 2. Player ────────────────────────────────────────────────────────────
    advance_player(&mut state.player, state.board.floor_y);

    // ── 3. Collisions ────────────────────────────────────────────────────────
    if state
        .enemies
        .iter()
        .any(|enemy| player_hits_enemy(&state.player, enemy))
    {
        debug!(
            "player hit at ({}, {}), back to start",
            state.player.entity.pos.x, state.player.entity.pos.y
        );
        state.player.reset_to(state.board.start);
        outcome.collided = true;
    }

    // ── 4. Goal row ──────────────────────────────────────────────────────────
    if state.player.entity.pos.y <= state.board.win_y {
        outcome.crossed_at = Some(state.player.entity.pos);
        state.status = GameStatus::WonTransitioning;
        state.player.reset_to(state.board.start);
        state.status = GameStatus::Idle;
        outcome.won = true;
        info!("player reached the water");
    }

    outcome
}
