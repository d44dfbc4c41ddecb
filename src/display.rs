/// Rendering layer: every draw call goes through here.
///
/// Canvas coordinates are scaled onto a character grid: one board tile is 12
/// columns by 3 rows. Nothing here changes game state.
use std::borrow::Cow;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{
    Board, GameState, SpriteId, StepOutcome, BOARD_COLUMNS, TILE_HEIGHT, TILE_WIDTH,
};
use crate::error::GameError;
use crate::resources::{Renderer, SpriteCatalogue};

pub const COLS_PER_TILE: usize = 12;
pub const LINES_PER_ROW: usize = 3;

/// Screen row of the top board line (row 0 is the title, row 1 the border).
const BOARD_TOP: u16 = 2;
/// Screen column of the leftmost board column.
const BOARD_LEFT: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Yellow;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_WIN: Color = Color::Green;

// ── Coordinate mapping ────────────────────────────────────────────────────────

pub fn to_col(x: f32) -> i32 {
    (x * COLS_PER_TILE as f32 / TILE_WIDTH).floor() as i32
}

pub fn to_line(y: f32) -> i32 {
    (y * LINES_PER_ROW as f32 / TILE_HEIGHT).floor() as i32
}

/// Columns and lines covered by the board canvas.
pub fn board_cells(board: &Board) -> (u16, u16) {
    (
        to_col(board.canvas_width).max(0) as u16,
        to_line(board.canvas_height).max(0) as u16,
    )
}

/// Smallest terminal that fits the board, its border, the title and the hint.
pub fn screen_size(board: &Board) -> (u16, u16) {
    let (cols, lines) = board_cells(board);
    (cols + 2, lines + BOARD_TOP + 2)
}

pub fn check_fits(board: &Board, have_cols: u16, have_rows: u16) -> Result<(), GameError> {
    let (need_cols, need_rows) = screen_size(board);
    if have_cols < need_cols || have_rows < need_rows {
        return Err(GameError::TerminalTooSmall {
            need_cols,
            need_rows,
            have_cols,
            have_rows,
        });
    }
    Ok(())
}

// ── Terminal renderer ─────────────────────────────────────────────────────────

/// Draws catalogue sprites clipped to the board area.
pub struct TerminalRenderer<'a, W: Write> {
    out: &'a mut W,
    catalogue: &'a SpriteCatalogue,
    cols: i32,
    lines: i32,
    /// Background colour of each board line, used under sprites that have
    /// no background of their own.
    backdrop: Vec<Color>,
}

impl<'a, W: Write> TerminalRenderer<'a, W> {
    pub fn new(out: &'a mut W, catalogue: &'a SpriteCatalogue, board: &Board) -> Self {
        let (cols, lines) = board_cells(board);
        let backdrop = board
            .rows
            .iter()
            .flat_map(|&row| {
                let bg = catalogue
                    .get(row)
                    .ok()
                    .and_then(|s| s.bg)
                    .unwrap_or(Color::Reset);
                std::iter::repeat(bg).take(LINES_PER_ROW)
            })
            .collect();
        Self {
            out,
            catalogue,
            cols: cols as i32,
            lines: lines as i32,
            backdrop,
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<'_, W> {
    fn draw(&mut self, id: SpriteId, x: f32, y: f32) -> Result<(), GameError> {
        let sprite = self.catalogue.get(id)?;
        let col0 = to_col(x + sprite.offset_x);
        let line0 = to_line(y + sprite.offset_y);
        if col0 + sprite.width() as i32 <= 0 || col0 >= self.cols {
            return Ok(());
        }

        self.out.queue(style::SetForegroundColor(sprite.fg))?;
        for (i, text) in sprite.lines.iter().enumerate() {
            let line = line0 + i as i32;
            if line < 0 || line >= self.lines {
                continue;
            }
            let visible: String = text
                .chars()
                .enumerate()
                .filter(|(j, _)| (0..self.cols).contains(&(col0 + *j as i32)))
                .map(|(_, ch)| ch)
                .collect();
            if visible.is_empty() {
                continue;
            }
            let bg = sprite.bg.unwrap_or(self.backdrop[line as usize]);
            self.out.queue(style::SetBackgroundColor(bg))?;
            self.out.queue(cursor::MoveTo(
                BOARD_LEFT + col0.max(0) as u16,
                BOARD_TOP + line as u16,
            ))?;
            self.out.queue(Print(visible))?;
        }
        self.out.queue(style::SetBackgroundColor(Color::Reset))?;
        Ok(())
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Draw the board tiles, then every enemy, then the player.
pub fn draw_scene<R: Renderer>(renderer: &mut R, state: &GameState) -> Result<(), GameError> {
    for (row, &tile) in state.board.rows.iter().enumerate() {
        for col in 0..BOARD_COLUMNS {
            renderer.draw(
                tile,
                col as f32 * TILE_WIDTH,
                row as f32 * TILE_HEIGHT - 50.0,
            )?;
        }
    }
    for enemy in &state.enemies {
        enemy.entity.render(renderer)?;
    }
    state.player.entity.render(renderer)
}

/// The state to draw after a tick. On the winning tick the player is shown
/// where they crossed, not at the start they were reset to.
pub fn scene_after<'a>(state: &'a GameState, outcome: &StepOutcome) -> Cow<'a, GameState> {
    match outcome.crossed_at {
        Some(pos) => {
            let mut frame = state.clone();
            frame.player.entity.pos = pos;
            Cow::Owned(frame)
        }
        None => Cow::Borrowed(state),
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete game frame.
pub fn render<W: Write>(
    out: &mut W,
    catalogue: &SpriteCatalogue,
    state: &GameState,
) -> Result<(), GameError> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_title(out, &state.board)?;
    draw_border(out, &state.board)?;
    {
        let mut renderer = TerminalRenderer::new(out, catalogue, &state.board);
        draw_scene(&mut renderer, state)?;
    }
    draw_controls_hint(out, &state.board, "←↑↓→ / WASD : Move   Q : Quit")?;

    finish(out, &state.board)
}

/// The start screen: story, how to play and the start prompt.
pub fn render_intro<W: Write>(out: &mut W, board: &Board) -> Result<(), GameError> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_title(out, board)?;
    draw_border(out, board)?;

    let story: &[(&str, Color)] = &[
        ("You are in danger...", C_TEXT),
        ("Only escape the enemies and cross the street", C_TEXT),
        ("to the water, you can be saved...", C_TEXT),
        ("", C_TEXT),
        ("HOW TO PLAY:", C_TITLE),
        ("Press Enter to start the game", C_TEXT),
        ("Use the arrow keys (or WASD) to help", C_TEXT),
        ("the player escape the enemies", C_TEXT),
    ];
    draw_centered_block(out, board, story, 2)?;
    draw_controls_hint(out, board, "ENTER : Start   Q : Quit")?;

    finish(out, board)
}

/// Overlay drawn on top of the last frame once the player reaches the water.
pub fn render_win<W: Write>(out: &mut W, board: &Board) -> Result<(), GameError> {
    let (_, lines) = board_cells(board);
    let banner: &[(&str, Color)] = &[
        ("╔════════════════════╗", C_WIN),
        ("║  CONGRATULATIONS!  ║", C_WIN),
        ("║      YOU WIN!      ║", C_WIN),
        ("╚════════════════════╝", C_WIN),
    ];
    let top = (lines / 2).saturating_sub(banner.len() as u16 / 2);
    draw_centered_block(out, board, banner, top)?;
    draw_controls_hint(out, board, "ENTER : Play again   Q : Quit")?;

    finish(out, board)
}

// ── Pieces ────────────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, board: &Board) -> Result<(), GameError> {
    let title = "BUG CROSSING";
    let (cols, _) = screen_size(board);
    out.queue(cursor::MoveTo(
        (cols / 2).saturating_sub(title.len() as u16 / 2),
        0,
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, board: &Board) -> Result<(), GameError> {
    let (cols, lines) = board_cells(board);
    let w = cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, BOARD_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;
    out.queue(cursor::MoveTo(0, BOARD_TOP + lines))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in BOARD_TOP..BOARD_TOP + lines {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(BOARD_LEFT + cols, row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

/// Print each line centred on the board, starting `top` lines into it.
fn draw_centered_block<W: Write>(
    out: &mut W,
    board: &Board,
    lines: &[(&str, Color)],
    top: u16,
) -> Result<(), GameError> {
    let (cols, _) = board_cells(board);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = BOARD_LEFT + (cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, BOARD_TOP + top + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, board: &Board, hint: &str) -> Result<(), GameError> {
    let (_, rows) = screen_size(board);
    out.queue(cursor::MoveTo(1, rows - 1))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

/// Park the cursor in a harmless spot and flush.
fn finish<W: Write>(out: &mut W, board: &Board) -> Result<(), GameError> {
    let (_, rows) = screen_size(board);
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows - 1))?;
    out.flush()?;
    Ok(())
}
