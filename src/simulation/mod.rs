//! Session - the per-frame platformer loop
//!
//! `SessionCore` owns the player body, the platform list and the keyboard
//! state for one canvas. The host calls `tick` once per display refresh
//! with the refresh timestamp and a drawing surface:
//! - clear the surface, integrate the player (floor clamp included)
//! - draw platforms and land the player on any it overlaps
//! - apply held keys, draw the player
//!
//! Scheduling the next tick is left to the host.

use crate::domain::{LevelConfig, MovableBody, Platform};
use crate::input::{InputState, KeyBindings};
use crate::render::DrawSurface;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "step/clock.rs"]
mod clock;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use clock::FrameClock;
pub use facade::Game;
pub use frame_stats::FrameStats;

use perf_timer::PerfTimer;

/// One running level
pub struct SessionCore {
    level: LevelConfig,
    player: MovableBody,
    platforms: Vec<Platform>,
    input: InputState,

    // Settings
    width: f64,
    height: f64,
    player_speed: f64,
    keys: KeyBindings,

    // State
    clock: FrameClock,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    stats: FrameStats,
}

impl SessionCore {
    /// Default layout on a `width`×`height` canvas, floor at the bottom edge
    pub fn new(width: f64, height: f64) -> Self {
        init::create_session(LevelConfig::fitted(width, height))
    }

    /// Build from an already validated level
    pub fn from_level(level: LevelConfig) -> Self {
        init::create_session(level)
    }

    pub fn from_level_json(json: &str) -> Result<Self, String> {
        let level = LevelConfig::from_json(json)?;
        Ok(init::create_session(level))
    }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn player(&self) -> &MovableBody { &self.player }

    pub fn player_mut(&mut self) -> &mut MovableBody { &mut self.player }

    pub fn platforms(&self) -> &[Platform] { &self.platforms }

    pub fn input(&self) -> &InputState { &self.input }

    pub fn level(&self) -> &LevelConfig { &self.level }

    pub fn level_json(&self) -> String {
        self.level.to_json()
    }

    // === INPUT ===

    pub fn key_down(&mut self, key: &str) {
        self.input.press(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.release(key);
    }

    pub fn clear_keys(&mut self) {
        self.input.clear();
    }

    // === SETTINGS ===

    pub fn player_speed(&self) -> f64 {
        self.player_speed
    }

    /// Rejects negative or non-finite speeds, leaving the current one
    pub fn set_player_speed(&mut self, speed: f64) -> Result<(), String> {
        settings::set_player_speed(self, speed)
    }

    pub fn key_bindings(&self) -> &KeyBindings {
        &self.keys
    }

    pub fn set_key_bindings(&mut self, keys: KeyBindings) -> Result<(), String> {
        settings::set_key_bindings(self, keys)
    }

    /// Enable or disable tick timing (adds timer calls when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Stats for the last tick
    pub fn get_frame_stats(&self) -> FrameStats {
        settings::get_frame_stats(self)
    }

    /// Put the player back on its spawn point and restart timing
    pub fn reset(&mut self) {
        init::reset_session(self);
    }

    /// Run one frame. `timestamp_ms` is the host's refresh timestamp.
    pub fn tick(&mut self, timestamp_ms: f64, surface: &mut dyn DrawSurface) {
        step::tick(self, timestamp_ms, surface);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
