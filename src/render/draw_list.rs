use crate::core::color::Color;
use crate::core::geometry::Rect;

use super::DrawSurface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Fill(Rect, Color),
}

/// Records draw calls in order instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Fills recorded since the most recent clear, i.e. what is on screen.
    pub fn visible_fills(&self) -> Vec<(Rect, Color)> {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .map_or(0, |i| i + 1);
        self.commands[start..]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill(r, color) => Some((*r, *color)),
                DrawCommand::Clear(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::Clear(Rect::new(x, y, w, h)));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.commands
            .push(DrawCommand::Fill(Rect::new(x, y, w, h), color));
    }
}
