//! Arbor engine crate.
//!
//! A hierarchical 2D scene graph: nodes compose parent/child coordinate
//! frames, answer world-space hit tests and record themselves into a
//! renderer-agnostic draw stream once per frame.

pub mod error;
pub mod time;

pub mod logging;
pub mod coords;
pub mod math;
pub mod paint;
pub mod draw;
pub mod geometry;
pub mod tree;
pub mod scene;

#[cfg(test)]
mod test_util;

pub use error::{Result, SceneError};
pub use scene::{Scene, SceneConfig};
