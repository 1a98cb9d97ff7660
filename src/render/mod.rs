//! Drawing seam
//!
//! Entities never touch a global canvas; every draw call receives a
//! `&mut dyn DrawSurface`. The browser build draws into a
//! `CanvasRenderingContext2d`, tests record into a `DrawList`.

mod canvas;
mod draw_list;
mod surface;

pub use draw_list::{DrawCommand, DrawList};
pub use surface::DrawSurface;
