use crate::coords::Vec2;

use super::Matrix3;

/// Coordinate frame accumulated during a single traversal.
///
/// Each operation returns a new frame equal to `current · op`, so later calls
/// act closer to the object: `identity().translate(..).rotate(..)` rotates the
/// object about its own origin before moving it. Frames are rebuilt every pass
/// and never stored on nodes.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CoordFrame2D {
    matrix: Matrix3,
}

impl CoordFrame2D {
    #[inline]
    pub const fn identity() -> Self {
        Self { matrix: Matrix3::IDENTITY }
    }

    #[inline]
    pub const fn from_matrix(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        self.then(Matrix3::translation(dx, dy))
    }

    #[must_use]
    pub fn translate_by(self, offset: Vec2) -> Self {
        self.translate(offset.x, offset.y)
    }

    #[must_use]
    pub fn rotate(self, degrees: f32) -> Self {
        self.then(Matrix3::rotation(degrees))
    }

    #[must_use]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        self.then(Matrix3::scale(sx, sy))
    }

    /// The accumulated matrix, as handed to the draw stream.
    #[inline]
    pub const fn matrix(&self) -> Matrix3 {
        self.matrix
    }

    #[inline]
    fn then(self, op: Matrix3) -> Self {
        Self { matrix: self.matrix.multiply(&op) }
    }
}
