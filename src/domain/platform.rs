use crate::core::color::Color;
use crate::core::geometry::Rect;
use crate::render::DrawSurface;

/// Static, passive geometry. Collision against it is resolved by the
/// simulation, not by the platform.
#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    rect: Rect,
    color: Color,
}

impl Platform {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::with_color(Rect::new(x, y, w, h), Color::PLATFORM)
    }

    pub fn with_color(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.fill(&self.rect, self.color);
    }
}
