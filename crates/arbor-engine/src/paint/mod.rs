//! Colour model shared between node kinds and the draw stream.

pub mod color;

pub use color::Color;
