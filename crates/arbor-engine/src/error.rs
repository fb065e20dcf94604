use thiserror::Error;

use crate::tree::NodeId;

/// Errors raised by scene-tree and scene operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// The id was destroyed or never belonged to this tree.
    #[error("node {0} is not part of the scene tree")]
    StaleNode(NodeId),

    /// The root keeps its identity pose, stays visible and is never detached.
    #[error("the root node cannot be {0}")]
    RootIsFixed(&'static str),

    /// A value that would make view or reparent math non-finite.
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("node {0} cannot become its own parent")]
    ReparentToSelf(NodeId),

    #[error("node {node} cannot be moved under its descendant {parent}")]
    ReparentIntoDescendant { node: NodeId, parent: NodeId },

    #[error("node {0} is not a camera")]
    NotACamera(NodeId),

    /// Installing this camera would destroy it along with the current one.
    #[error("camera {candidate} lives inside the current camera {current}")]
    CameraInsideCamera { candidate: NodeId, current: NodeId },

    /// The scene must always own a camera; replace it with `set_camera`.
    #[error("destroying node {node} would remove the active camera {camera}")]
    CameraInUse { node: NodeId, camera: NodeId },
}

pub type Result<T, E = SceneError> = core::result::Result<T, E>;

/// Rejects zero, negative or non-finite scale factors, and factors too
/// small to invert.
pub(crate) fn check_scale(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 && value.recip().is_finite() {
        Ok(())
    } else {
        Err(SceneError::InvalidParameter { name, value })
    }
}

/// Rejects NaN and infinities.
pub(crate) fn check_finite(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::InvalidParameter { name, value })
    }
}
