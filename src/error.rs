/// Errors raised by the glue around the simulation.
///
/// The simulation itself is total; only sprite lookup, settings and terminal
/// I/O can fail.
use std::path::PathBuf;

use thiserror::Error;

use crate::entities::SpriteId;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse settings file {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("terminal is {have_cols}x{have_rows}, the board needs at least {need_cols}x{need_rows}")]
    TerminalTooSmall {
        need_cols: u16,
        need_rows: u16,
        have_cols: u16,
        have_rows: u16,
    },

    #[error("sprite {0:?} is not loaded")]
    MissingSprite(SpriteId),
}
