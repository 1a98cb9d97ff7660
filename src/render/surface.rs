use crate::core::color::Color;
use crate::core::geometry::Rect;

/// Minimal 2D drawing capability consumed by the simulation.
pub trait DrawSurface {
    /// Clear a rectangular area to transparent.
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    fn fill(&mut self, rect: &Rect, color: Color) {
        self.fill_rect(rect.x, rect.y, rect.w, rect.h, color);
    }
}
