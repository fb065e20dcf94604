//! Coordinate types shared by the scene tree, the draw stream and drivers.
//!
//! World space:
//! - unitless scene coordinates
//! - +X right, +Y up
//! - angles in degrees, counter-clockwise
//!
//! View space is the camera-relative space produced by the view matrix; the
//! visible region spans `[-1, 1]` vertically and `[-aspect, aspect]` before the
//! aspect correction is applied.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
