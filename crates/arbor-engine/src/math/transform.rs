use crate::coords::Vec2;

use super::Matrix3;

/// Maps any finite angle in degrees into `[-180, 180)`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let mut a = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round a tiny negative up to exactly 360.
    if a >= 180.0 {
        a -= 360.0;
    }
    a
}

/// Local pose of a node: translate ∘ rotate ∘ uniform scale.
///
/// `rotation` is kept in degrees and normalized to `[-180, 180)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    position: Vec2,
    rotation: f32,
    scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec2::zero(),
        rotation: 0.0,
        scale: 1.0,
    };

    pub fn new(position: Vec2, rotation: f32, scale: f32) -> Self {
        Self {
            position,
            rotation: normalize_degrees(rotation),
            scale,
        }
    }

    /// Decomposes a pure TRS matrix.
    ///
    /// Translation is the third column, rotation is the angle of the first
    /// column and scale is its length. The result is meaningless for matrices
    /// containing shear or non-uniform scale.
    pub fn from_matrix(m: &Matrix3) -> Self {
        let v = m.values();
        Self {
            position: Vec2::new(v[6], v[7]),
            rotation: normalize_degrees(v[1].atan2(v[0]).to_degrees()),
            scale: v[0].hypot(v[1]),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub(crate) fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    pub(crate) fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// `translation(position) · rotation(rotation) · scale(scale, scale)`.
    pub fn to_matrix(&self) -> Matrix3 {
        Matrix3::translation(self.position.x, self.position.y)
            * Matrix3::rotation(self.rotation)
            * Matrix3::scale(self.scale, self.scale)
    }

    /// Inverse of [`to_matrix`](Self::to_matrix), built from inverted parts.
    ///
    /// `scale⁻¹ · rotation⁻¹ · translation⁻¹`. Only valid because the pose is
    /// TRS; this is not a general matrix inverse. `scale` must be non-zero.
    pub fn inverse_matrix(&self) -> Matrix3 {
        let inv_scale = 1.0 / self.scale;
        Matrix3::scale(inv_scale, inv_scale)
            * Matrix3::rotation(-self.rotation)
            * Matrix3::translation(-self.position.x, -self.position.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
