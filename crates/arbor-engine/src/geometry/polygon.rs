use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::draw::{DrawCmd, DrawList};
use crate::math::{CoordFrame2D, Matrix3};
use crate::paint::Color;

/// Polygon draw payload (fill or outline).
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
    pub transform: Matrix3,
}

/// Closed polygon in local coordinates.
///
/// Vertices are kept in the order given; the closing edge runs from the last
/// vertex back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon2D {
    points: Vec<Vec2>,
}

impl Polygon2D {
    pub fn new(points: impl Into<Vec<Vec2>>) -> Self {
        Self { points: points.into() }
    }

    /// Builds a polygon from a flat `x0, y0, x1, y1, ...` list.
    ///
    /// A trailing unpaired value is ignored.
    pub fn from_coords(coords: &[f32]) -> Self {
        Self::new(
            coords
                .chunks_exact(2)
                .map(|xy| Vec2::new(xy[0], xy[1]))
                .collect::<Vec<_>>(),
        )
    }

    /// `segments` vertices evenly spaced on a circle of `radius`, starting on +X.
    pub fn regular(segments: usize, radius: f32) -> Self {
        let points = (0..segments)
            .map(|i| {
                let a = i as f32 * TAU / segments as f32;
                let (sin, cos) = a.sin_cos();
                Vec2::new(radius * cos, radius * sin)
            })
            .collect::<Vec<_>>();
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Crossing-number point-in-polygon test in local coordinates.
    ///
    /// An edge counts only when its endpoints lie strictly on opposite sides
    /// of `p.y` (a vertex exactly at `p.y` belongs to the upper side). Points
    /// exactly on an edge may land either way.
    pub fn contains(&self, p: Vec2) -> bool {
        let pts = &self.points;
        let n = pts.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (pts[i], pts[j]);
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Records a filled polygon.
    pub fn draw(&self, list: &mut DrawList, frame: CoordFrame2D, color: Color) {
        list.push_fill_polygon(self.points.clone(), color, frame);
    }

    /// Records the closed outline.
    pub fn draw_outline(&self, list: &mut DrawList, frame: CoordFrame2D, color: Color) {
        list.push_polygon_outline(self.points.clone(), color, frame);
    }
}

impl DrawList {
    #[inline]
    pub fn push_fill_polygon(&mut self, points: Vec<Vec2>, color: Color, frame: CoordFrame2D) {
        self.push(DrawCmd::FillPolygon(PolygonCmd { points, color, transform: frame.matrix() }));
    }

    #[inline]
    pub fn push_polygon_outline(&mut self, points: Vec<Vec2>, color: Color, frame: CoordFrame2D) {
        self.push(DrawCmd::PolygonOutline(PolygonCmd { points, color, transform: frame.matrix() }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon2D {
        Polygon2D::from_coords(&[-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0])
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn square_contains_centre() {
        assert!(unit_square().contains(Vec2::new(0.0, 0.0)));
        assert!(unit_square().contains(Vec2::new(0.9, -0.9)));
    }

    #[test]
    fn square_excludes_outside() {
        assert!(!unit_square().contains(Vec2::new(2.0, 2.0)));
        assert!(!unit_square().contains(Vec2::new(-1.5, 0.0)));
        assert!(!unit_square().contains(Vec2::new(0.0, 1.5)));
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape: notch between x = -0.5 and 0.5 above y = 0.
        let u = Polygon2D::from_coords(&[
            -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, 0.5, 1.0, 0.5, 0.0, -0.5, 0.0, -0.5, 1.0, -1.0, 1.0,
        ]);
        assert!(!u.contains(Vec2::new(0.0, 0.5)));
        assert!(u.contains(Vec2::new(0.0, -0.5)));
        assert!(u.contains(Vec2::new(0.75, 0.5)));
    }

    #[test]
    fn degenerate_polygons_contain_nothing() {
        assert!(!Polygon2D::default().contains(Vec2::zero()));
        assert!(!Polygon2D::from_coords(&[0.0, 0.0, 1.0, 1.0]).contains(Vec2::new(0.5, 0.5)));
    }

    #[test]
    fn horizontal_edges_are_never_counted() {
        // Query on the bottom edge's line: both endpoints have y == p.y.
        assert!(unit_square().contains(Vec2::new(0.0, -1.0)));
        assert!(!unit_square().contains(Vec2::new(0.0, 1.0)));
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn regular_polygon_starts_on_x_axis() {
        let p = Polygon2D::regular(4, 2.0);
        assert_eq!(p.points().len(), 4);
        assert_eq!(p.points()[0], Vec2::new(2.0, 0.0));
    }

    #[test]
    fn from_coords_ignores_trailing_value() {
        assert_eq!(Polygon2D::from_coords(&[1.0, 2.0, 3.0]).points(), &[Vec2::new(1.0, 2.0)]);
    }

    #[test]
    fn draw_records_fill_then_outline() {
        let mut list = DrawList::new();
        let frame = CoordFrame2D::identity().translate(1.0, 0.0);
        unit_square().draw(&mut list, frame, Color::WHITE);
        unit_square().draw_outline(&mut list, frame, Color::BLACK);

        assert!(matches!(list.items()[0], DrawCmd::FillPolygon(_)));
        assert!(matches!(list.items()[1], DrawCmd::PolygonOutline(_)));
        assert_eq!(list.items()[1].transform(), Matrix3::translation(1.0, 0.0));
    }
}
