use crate::coords::Vec2;
use crate::draw::{DrawCmd, DrawList};
use crate::math::{CoordFrame2D, Matrix3};
use crate::paint::Color;

/// Line segment draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    /// Stroke width in backend units; not affected by the frame's scale.
    pub width: f32,
    pub color: Color,
    pub transform: Matrix3,
}

/// Line segment in local coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line2D {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
}

impl Line2D {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end, width: 1.0 }
    }

    #[inline]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn draw(&self, list: &mut DrawList, frame: CoordFrame2D, color: Color) {
        list.push_line(self.start, self.end, self.width, color, frame);
    }
}

impl Default for Line2D {
    /// Unit segment along +X.
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::new(1.0, 0.0))
    }
}

impl DrawList {
    #[inline]
    pub fn push_line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color, frame: CoordFrame2D) {
        self.push(DrawCmd::Line(LineCmd {
            start,
            end,
            width,
            color,
            transform: frame.matrix(),
        }));
    }
}
