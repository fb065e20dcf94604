use crate::geometry::line::LineCmd;
use crate::geometry::point::PointCmd;
use crate::geometry::polygon::PolygonCmd;
use crate::math::Matrix3;
use crate::paint::Color;

/// Renderer-agnostic draw command stream.
///
/// Every command carries the matrix of the coordinate frame it was recorded
/// in; vertices stay in the primitive's local space.
///
/// Extending the stream:
/// - add a primitive module under `geometry::*`
/// - add a new variant here
/// - implement push helpers inside that primitive module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPolygon(PolygonCmd),
    PolygonOutline(PolygonCmd),
    Line(LineCmd),
    Point(PointCmd),
}

impl DrawCmd {
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            DrawCmd::FillPolygon(c) | DrawCmd::PolygonOutline(c) => c.color,
            DrawCmd::Line(c) => c.color,
            DrawCmd::Point(c) => c.color,
        }
    }

    #[inline]
    pub fn transform(&self) -> Matrix3 {
        match self {
            DrawCmd::FillPolygon(c) | DrawCmd::PolygonOutline(c) => c.transform,
            DrawCmd::Line(c) => c.transform,
            DrawCmd::Point(c) => c.transform,
        }
    }
}
