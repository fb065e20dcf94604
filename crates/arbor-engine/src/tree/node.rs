use core::fmt;

use crate::coords::Vec2;
use crate::error::{Result, check_finite, check_scale};
use crate::math::Transform;

use super::{Behavior, CameraNode, NodeId, NodeKind};

/// A node in the scene tree: local pose, visibility flag, kind and an
/// optional update hook.
///
/// Structure (parent, children) is read here but changed only through
/// [`SceneTree`](super::SceneTree) so both directions of the link stay
/// consistent.
pub struct SceneNode {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) transform: Transform,
    showing: bool,
    kind: NodeKind,
    pub(crate) behavior: Option<Box<dyn Behavior>>,
    /// Bumped whenever the hook is replaced or cleared.
    pub(crate) behavior_epoch: u32,
}

impl SceneNode {
    pub(crate) fn new(parent: Option<NodeId>, kind: NodeKind) -> Self {
        Self {
            parent,
            children: Vec::new(),
            transform: Transform::IDENTITY,
            showing: true,
            kind,
            behavior: None,
            behavior_epoch: 0,
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in draw/update order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn as_camera(&self) -> Option<&CameraNode> {
        match &self.kind {
            NodeKind::Camera(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_camera_mut(&mut self) -> Option<&mut CameraNode> {
        match &mut self.kind {
            NodeKind::Camera(c) => Some(c),
            _ => None,
        }
    }

    // ── local pose ────────────────────────────────────────────────────────

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.transform.position()
    }

    pub fn set_position(&mut self, position: impl Into<Vec2>) -> Result<()> {
        let p = position.into();
        check_finite("position.x", p.x)?;
        check_finite("position.y", p.y)?;
        self.transform.set_position(p);
        Ok(())
    }

    /// Moves the node by `(dx, dy)` in its parent's coordinates.
    pub fn translate(&mut self, dx: f32, dy: f32) -> Result<()> {
        let p = self.position();
        self.set_position(p.translate(dx, dy))
    }

    /// Local rotation in degrees, within `[-180, 180)`.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.transform.rotation()
    }

    pub fn set_rotation(&mut self, degrees: f32) -> Result<()> {
        check_finite("rotation", degrees)?;
        self.transform.set_rotation(degrees);
        Ok(())
    }

    /// Adds `degrees` to the local rotation.
    pub fn rotate(&mut self, degrees: f32) -> Result<()> {
        check_finite("rotation delta", degrees)?;
        self.set_rotation(self.rotation() + degrees)
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.transform.scale()
    }

    /// Sets the uniform scale. Must be positive and finite.
    pub fn set_scale(&mut self, scale: f32) -> Result<()> {
        check_scale("scale", scale)?;
        self.transform.set_scale(scale);
        Ok(())
    }

    /// Multiplies the uniform scale by `factor`. Must be positive and finite.
    pub fn scale_by(&mut self, factor: f32) -> Result<()> {
        check_scale("scale factor", factor)?;
        self.set_scale(self.scale() * factor)
    }

    // ── visibility ────────────────────────────────────────────────────────

    /// This node's own flag; hidden ancestors still hide it when drawing.
    #[inline]
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Sets only this node's flag; descendants keep theirs.
    #[inline]
    pub fn show(&mut self, showing: bool) {
        self.showing = showing;
    }

    // ── update hook ───────────────────────────────────────────────────────

    pub fn set_behavior(&mut self, behavior: impl Behavior) {
        self.behavior = Some(Box::new(behavior));
        self.behavior_epoch = self.behavior_epoch.wrapping_add(1);
    }

    /// Drops the hook. A hook may clear itself while it runs.
    pub fn clear_behavior(&mut self) {
        self.behavior = None;
        self.behavior_epoch = self.behavior_epoch.wrapping_add(1);
    }

    #[inline]
    pub fn has_behavior(&self) -> bool {
        self.behavior.is_some()
    }
}

impl fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneNode")
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("transform", &self.transform)
            .field("showing", &self.showing)
            .field("kind", &self.kind.name())
            .field("has_behavior", &self.behavior.is_some())
            .finish()
    }
}
