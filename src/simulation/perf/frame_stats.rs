use wasm_bindgen::prelude::*;

/// Snapshot of the last tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub(super) frames: u64,
    pub(super) dt_ms: f64,
    pub(super) platform_contacts: u32,
    /// Wall time spent in the tick; zero unless perf metrics are on
    pub(super) tick_ms: f64,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 { self.frames }
    #[wasm_bindgen(getter)]
    pub fn dt_ms(&self) -> f64 { self.dt_ms }
    #[wasm_bindgen(getter)]
    pub fn platform_contacts(&self) -> u32 { self.platform_contacts }
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
}
