/// Game settings.
///
/// Loaded from an optional JSON file; every field has a default so a partial
/// file (or none at all) is fine.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compute::{DEFAULT_ROSTER, ENEMY_LEFT_BOUND, ENEMY_RIGHT_BOUND};
use crate::entities::{BoardVariant, EnemySpawn};
use crate::error::GameError;

pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board constant set.
    pub board: BoardVariant,
    /// Frames per second the driver aims for.
    pub fps: u32,
    /// Frames a direction key stays held without a repeat event.
    pub hold_frames: u64,
    /// Where log output goes. No logging without it.
    pub log_file: Option<PathBuf>,
    /// Replaces the default enemy roster when present.
    pub enemies: Option<Vec<EnemySpawn>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardVariant::Standard,
            fps: 60,
            hold_frames: 8,
            log_file: None,
            enemies: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str, path: &Path) -> Result<Self, GameError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| GameError::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json, path)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(GameError::InvalidSettings(format!(
                "fps must be between 1 and {MAX_FPS}, got {}",
                self.fps
            )));
        }
        if let Some(enemies) = &self.enemies {
            if let Some(bad) = enemies
                .iter()
                .find(|e| !(e.x.is_finite() && e.y.is_finite() && e.speed.is_finite()))
            {
                return Err(GameError::InvalidSettings(format!(
                    "enemy spawn has a non-finite value: {bad:?}"
                )));
            }
            // Outside the patrol bounds an enemy would flip direction every
            // tick and never come back on screen.
            if let Some(bad) = enemies
                .iter()
                .find(|e| e.x < ENEMY_LEFT_BOUND || e.x > ENEMY_RIGHT_BOUND)
            {
                return Err(GameError::InvalidSettings(format!(
                    "enemy spawn x must be between {ENEMY_LEFT_BOUND} and {ENEMY_RIGHT_BOUND}, got {}",
                    bad.x
                )));
            }
        }
        Ok(())
    }

    /// The configured roster, or the default one.
    pub fn roster(&self) -> &[EnemySpawn] {
        match &self.enemies {
            Some(enemies) if !enemies.is_empty() => enemies.as_slice(),
            Some(_) => {
                log::warn!("empty enemy roster in settings, using the default");
                &DEFAULT_ROSTER[..]
            }
            None => &DEFAULT_ROSTER[..],
        }
    }
}
