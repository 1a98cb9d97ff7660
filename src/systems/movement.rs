//! Input-driven movement
//!
//! Horizontal speed is a fixed distance per tick, not scaled by `dt`.

use crate::domain::MovableBody;
use crate::input::{InputState, KeyBindings};

/// Apply held keys to `body`.
///
/// The jump key only fires while the body is grounded or on a platform;
/// those flags still reflect the previous resolution pass.
pub fn apply_input(body: &mut MovableBody, input: &InputState, keys: &KeyBindings, speed: f64) {
    if input.is_key_down(&keys.left) {
        body.move_x(-speed);
    }
    if input.is_key_down(&keys.right) {
        body.move_x(speed);
    }
    if input.is_key_down(&keys.jump) && (body.is_grounded || body.is_on_platform) {
        body.jump();
    }
}
