use crate::coords::Vec2;
use crate::draw::{DrawCmd, DrawList};
use crate::math::{CoordFrame2D, Matrix3};
use crate::paint::Color;

/// Single point draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCmd {
    pub at: Vec2,
    pub color: Color,
    pub transform: Matrix3,
}

impl DrawList {
    /// Records a single point at local position `at`.
    #[inline]
    pub fn push_point(&mut self, at: Vec2, color: Color, frame: CoordFrame2D) {
        self.push(DrawCmd::Point(PointCmd { at, color, transform: frame.matrix() }));
    }
}
