/// Sprite catalogue and the rendering seam.
///
/// A sprite is a block of glyph art plus the offset of its visible part from
/// the entity origin, the terminal stand-in for an image with transparent
/// margins. The catalogue must report ready before anything is drawn.
use std::collections::HashMap;

use crossterm::style::Color;

use crate::entities::SpriteId;
use crate::error::GameError;

/// Anything that can put a sprite on screen at a canvas position.
pub trait Renderer {
    fn draw(&mut self, sprite: SpriteId, x: f32, y: f32) -> Result<(), GameError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// One string per terminal row. Spaces are drawn, not skipped.
    pub lines: Vec<String>,
    /// Canvas-unit offset of the art from the entity origin.
    pub offset_x: f32,
    pub offset_y: f32,
    pub fg: Color,
    pub bg: Option<Color>,
}

impl Sprite {
    fn new(lines: &[&str], offset: (f32, f32), fg: Color, bg: Option<Color>) -> Self {
        Sprite {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            offset_x: offset.0,
            offset_y: offset.1,
            fg,
            bg,
        }
    }

    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Built-in glyph art for every sprite.
///
/// Tiles are 12 columns by 3 rows. Their visible face starts 50 units below
/// the draw origin, matching the way board rows are drawn at `row * 83 - 50`.
pub fn builtin_sprite(id: SpriteId) -> Sprite {
    match id {
        SpriteId::WaterBlock => Sprite::new(
            &["≈≈≈≈≈≈≈≈≈≈≈≈", "~≈~≈~≈~≈~≈~≈", "≈≈≈≈≈≈≈≈≈≈≈≈"],
            (0.0, 50.0),
            Color::White,
            Some(Color::DarkBlue),
        ),
        SpriteId::StoneBlock => Sprite::new(
            &["┌──────────┐", "│          │", "└──────────┘"],
            (0.0, 50.0),
            Color::Grey,
            Some(Color::DarkGrey),
        ),
        SpriteId::GrassBlock => Sprite::new(
            &["  ,  '  ,  '", "'  ,  '  ,  ", "  ,  '  ,  '"],
            (0.0, 50.0),
            Color::Green,
            Some(Color::DarkGreen),
        ),
        SpriteId::EnemyRight => Sprite::new(
            &[" ▄▆█████▆▄◣", " ▀ ▀   ▀ ▀ "],
            (3.0, 78.0),
            Color::Red,
            None,
        ),
        SpriteId::EnemyLeft => Sprite::new(
            &["◢▄▆█████▆▄ ", " ▀ ▀   ▀ ▀ "],
            (3.0, 78.0),
            Color::Red,
            None,
        ),
        SpriteId::Player => Sprite::new(
            &["(o)", "/|\\", "/ \\"],
            (36.0, 60.0),
            Color::White,
            None,
        ),
    }
}

/// Maps sprite identifiers to loaded art.
#[derive(Debug, Default)]
pub struct SpriteCatalogue {
    sprites: HashMap<SpriteId, Sprite>,
    requested: Vec<SpriteId>,
}

impl SpriteCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `ids` as needed. Nothing is loaded until `load`.
    pub fn request(&mut self, ids: &[SpriteId]) {
        for &id in ids {
            if !self.requested.contains(&id) {
                self.requested.push(id);
            }
        }
    }

    /// Load every requested sprite from the built-in art set.
    pub fn load(&mut self) {
        for &id in &self.requested {
            self.sprites.entry(id).or_insert_with(|| builtin_sprite(id));
        }
        log::debug!("sprite catalogue holds {} sprites", self.sprites.len());
    }

    /// True once every requested sprite has art.
    pub fn is_ready(&self) -> bool {
        self.requested.iter().all(|id| self.sprites.contains_key(id))
    }

    pub fn get(&self, id: SpriteId) -> Result<&Sprite, GameError> {
        self.sprites.get(&id).ok_or(GameError::MissingSprite(id))
    }
}
