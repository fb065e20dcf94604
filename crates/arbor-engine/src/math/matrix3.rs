use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

use super::Vector3;

/// 3×3 homogeneous 2D transform, column-major.
///
/// `values[6]` and `values[7]` hold the translation column, which is the
/// layout backends expect when uploading a `mat3` uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix3 {
    values: [f32; 9],
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 = Matrix3 {
        values: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Builds a matrix from column-major values.
    #[inline]
    pub const fn from_cols_array(values: [f32; 9]) -> Self {
        Self { values }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self::from_cols_array([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, dx, dy, 1.0])
    }

    /// Counter-clockwise rotation by `degrees`.
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_cols_array([cos, sin, 0.0, -sin, cos, 0.0, 0.0, 0.0, 1.0])
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::from_cols_array([sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0])
    }

    /// Column-major storage.
    #[inline]
    pub const fn values(&self) -> &[f32; 9] {
        &self.values
    }

    /// Element at `row`, `col` (both `0..3`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[col * 3 + row]
    }

    /// Raw bytes for uniform upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Returns `self · rhs`: `rhs` is applied first.
    pub fn multiply(&self, rhs: &Matrix3) -> Matrix3 {
        let mut out = [0.0f32; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = (0..3).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
            }
        }
        Matrix3::from_cols_array(out)
    }

    /// Applies the matrix to a homogeneous column vector.
    pub fn transform(&self, v: Vector3) -> Vector3 {
        let m = &self.values;
        Vector3::new(
            m[0] * v.x + m[3] * v.y + m[6] * v.z,
            m[1] * v.x + m[4] * v.y + m[7] * v.z,
            m[2] * v.x + m[5] * v.y + m[8] * v.z,
        )
    }

    /// Applies the matrix to a point (`z = 1`).
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.transform(Vector3::point(p)).to_point()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Matrix3 {
        self.multiply(&rhs)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform(rhs)
    }
}
