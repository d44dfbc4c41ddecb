/// Axis-aligned bounding-box collision between the player and enemies.
///
/// Sprites carry large transparent margins, so each entity type uses a fixed
/// inset box rather than its full sprite extent.
use crate::entities::{Enemy, Player, Position};

/// Offsets of a hit box from an entity's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

pub const PLAYER_INSETS: Insets = Insets {
    left: 36.0,
    right: 68.0,
    top: 123.0,
    bottom: 136.0,
};

pub const ENEMY_INSETS: Insets = Insets {
    left: 3.0,
    right: 97.0,
    top: 78.0,
    bottom: 143.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BoundingBox {
    pub fn from_insets(pos: Position, insets: Insets) -> Self {
        BoundingBox {
            left: pos.x + insets.left,
            right: pos.x + insets.right,
            top: pos.y + insets.top,
            bottom: pos.y + insets.bottom,
        }
    }
}

pub fn player_box(player: &Player) -> BoundingBox {
    BoundingBox::from_insets(player.entity.pos, PLAYER_INSETS)
}

pub fn enemy_box(enemy: &Enemy) -> BoundingBox {
    BoundingBox::from_insets(enemy.entity.pos, ENEMY_INSETS)
}

/// True when the boxes intersect. Shared edges count as overlap.
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    !(a.bottom < b.top || a.top > b.bottom || a.right < b.left || a.left > b.right)
}

pub fn player_hits_enemy(player: &Player, enemy: &Enemy) -> bool {
    overlaps(&player_box(player), &enemy_box(enemy))
}
