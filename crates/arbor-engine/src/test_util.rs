//! Float comparison helpers shared by unit tests.

use crate::coords::Vec2;
use crate::math::{Matrix3, normalize_degrees};

pub(crate) const EPS: f32 = 1.0e-4;

pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

/// Angles compared on the circle, so -180 and 179.99999 are neighbours.
pub(crate) fn angle_eq(a: f32, b: f32) -> bool {
    normalize_degrees(a - b).abs() <= 1.0e-2
}

#[track_caller]
pub(crate) fn assert_vec_near(actual: Vec2, expected: Vec2) {
    assert!(
        approx_eq(actual.x, expected.x) && approx_eq(actual.y, expected.y),
        "expected {expected:?}, got {actual:?}"
    );
}

#[track_caller]
pub(crate) fn assert_matrix_near(actual: Matrix3, expected: Matrix3) {
    let close = actual
        .values()
        .iter()
        .zip(expected.values())
        .all(|(a, b)| approx_eq(*a, *b));
    assert!(close, "expected {expected:?}, got {actual:?}");
}
