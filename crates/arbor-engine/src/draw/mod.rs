//! Draw stream types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in traversal order
//! - carry the view matrix pushed by the active camera
//! - keep primitive-specific helpers in their own files under `geometry`

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::DrawList;
