//! Scene orchestration.
//!
//! Responsibilities:
//! - own the tree, its fixed root and the active camera
//! - run the per-frame cycle: push view, tick clock, update, draw
//! - flatten world-space hit tests over the whole tree

mod config;
mod driver;

pub use config::SceneConfig;
pub use driver::Scene;
