//! Core value types shared by every other module.

#[macro_use]
pub mod utils;
pub mod color;
pub mod geometry;
