//! Homogeneous 2D transform algebra.
//!
//! Conventions (applied everywhere in the crate):
//! - points are column vectors with `z = 1`
//! - `a.multiply(b)` applies `b` first, then `a`
//! - matrices are stored column-major
//!
//! Local transforms are always composed translate ∘ rotate ∘ uniform-scale
//! (TRS). [`Transform::from_matrix`] only inverts that composition; feeding it
//! a sheared or non-uniformly scaled matrix is a precondition violation and
//! yields meaningless components.

mod frame;
mod matrix3;
mod transform;
mod vector3;

pub use frame::CoordFrame2D;
pub use matrix3::Matrix3;
pub use transform::{Transform, normalize_degrees};
pub use vector3::Vector3;
