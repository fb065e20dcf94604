use crate::coords::Vec2;

/// Homogeneous 2D coordinate (`z = 1` for points, `z = 0` for directions).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Lifts a point into homogeneous space.
    #[inline]
    pub const fn point(p: Vec2) -> Self {
        Self::new(p.x, p.y, 1.0)
    }

    /// Drops the homogeneous coordinate.
    ///
    /// Affine matrices keep `z == 1`, so no perspective divide is performed.
    #[inline]
    pub const fn to_point(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Vector3 {
    #[inline]
    fn from(p: Vec2) -> Self {
        Self::point(p)
    }
}
