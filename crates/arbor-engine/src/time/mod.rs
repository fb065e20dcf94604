//! Time subsystem.
//!
//! Provides the monotonic frame timing that drives `SceneTree::update`.
//! Intended usage:
//! - one `FrameClock` per scene
//! - call `tick()` once per drawn frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
