//! Platformer Engine - gravity, jumps and platform landing for a canvas game
//!
//! Architecture:
//! - core/        - Rect, Color, console logging macros
//! - domain/      - Movable body, platforms, player preset, level config
//! - input/       - Held-key record and key bindings
//! - render/      - DrawSurface seam (canvas + recording implementations)
//! - systems/     - Platform collision and input-driven movement
//! - simulation/  - Per-frame orchestration and the WASM facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod input;
pub mod render;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("platformer engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::color::Color;
pub use crate::core::geometry::Rect;
pub use domain::{player, BodyConfig, LevelConfig, MovableBody, Platform, PLAYER};
pub use input::{InputState, KeyBindings};
pub use render::{DrawCommand, DrawList, DrawSurface};
pub use simulation::{FrameClock, FrameStats, Game, SessionCore};
