use web_sys::CanvasRenderingContext2d;

use crate::core::color::Color;

use super::DrawSurface;

// The context is a shared JS handle; drawing through `&` avoids cloning it
// every frame.
impl DrawSurface for &CanvasRenderingContext2d {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_fill_style_str(&color.css());
        CanvasRenderingContext2d::fill_rect(*self, x, y, w, h);
    }
}
