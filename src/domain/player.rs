use crate::core::color::Color;

use super::body::{BodyConfig, MovableBody};

/// The player's body parameters: a 25×25 red square.
pub const PLAYER: BodyConfig = BodyConfig {
    w: 25.0,
    h: 25.0,
    gravity: 1.0,
    jump_strength: 2.0,
    color: Color::RED,
};

/// Build a player body at `(x, y)` standing over the floor line `ground_y`.
pub fn spawn(x: f64, y: f64, ground_y: f64) -> MovableBody {
    MovableBody::new(&PLAYER, x, y, ground_y)
}
