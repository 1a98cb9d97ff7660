use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use super::frame_stats::FrameStats;
use super::SessionCore;

/// JS-facing handle on a `SessionCore`.
///
/// The page owns the canvas, the key listeners and the
/// `requestAnimationFrame` loop; it forwards each of them here.
#[wasm_bindgen]
pub struct Game {
    core: SessionCore,
}

#[wasm_bindgen]
impl Game {
    /// Default level on a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            core: SessionCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = fromLevelJson)]
    pub fn from_level_json(json: String) -> Result<Game, JsValue> {
        let core = SessionCore::from_level_json(&json).map_err(|e| {
            console_warn!("level rejected: {}", e);
            JsValue::from_str(&e)
        })?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn platform_count(&self) -> usize { self.core.platforms().len() }

    // === PLAYER STATE ===

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> f64 { self.core.player().x() }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> f64 { self.core.player().y() }

    #[wasm_bindgen(getter)]
    pub fn player_vy(&self) -> f64 { self.core.player().vy }

    #[wasm_bindgen(getter)]
    pub fn is_grounded(&self) -> bool { self.core.player().is_grounded }

    #[wasm_bindgen(getter)]
    pub fn is_on_platform(&self) -> bool { self.core.player().is_on_platform }

    // === INPUT ===

    /// Forward a `keydown` event (`KeyboardEvent.key`)
    pub fn key_down(&mut self, key: &str) {
        self.core.key_down(key);
    }

    /// Forward a `keyup` event (`KeyboardEvent.key`)
    pub fn key_up(&mut self, key: &str) {
        self.core.key_up(key);
    }

    /// Release every key (call on window blur)
    pub fn clear_keys(&mut self) {
        self.core.clear_keys();
    }

    // === SETTINGS ===

    pub fn set_player_speed(&mut self, speed: f64) -> Result<(), JsValue> {
        self.core
            .set_player_speed(speed)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Enable or disable tick timing
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.get_frame_stats()
    }

    /// Current level (including runtime setting changes) as JSON
    pub fn level_json(&self) -> String {
        self.core.level_json()
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Run one frame into `ctx`. Call from the `requestAnimationFrame`
    /// callback with its timestamp.
    pub fn frame(&mut self, timestamp: f64, ctx: &CanvasRenderingContext2d) {
        let mut surface = ctx;
        self.core.tick(timestamp, &mut surface);
    }
}
