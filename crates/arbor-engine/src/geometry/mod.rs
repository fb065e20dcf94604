//! Geometric primitives drawn by node kinds.
//!
//! Each primitive owns its local-space vertex data and records itself into a
//! [`DrawList`](crate::draw::DrawList) under a coordinate frame; how the
//! stream is rasterized is up to the backend.

pub(crate) mod line;
pub(crate) mod point;
pub(crate) mod polygon;

pub use line::{Line2D, LineCmd};
pub use point::PointCmd;
pub use polygon::{Polygon2D, PolygonCmd};
