use crate::math::Matrix3;

use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are kept in submission order, which for a scene is the
/// depth-first traversal order (parent before children, siblings in child
/// order). The view matrix is whatever the active camera pushed last.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    view: Matrix3,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity and the view matrix.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Commands in submission order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Replaces the active view matrix.
    #[inline]
    pub fn set_view(&mut self, view: Matrix3) {
        self.view = view;
    }

    #[inline]
    pub fn view(&self) -> Matrix3 {
        self.view
    }
}
