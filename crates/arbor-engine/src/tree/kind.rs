use crate::coords::{Vec2, Viewport};
use crate::draw::DrawList;
use crate::error::{Result, SceneError, check_scale};
use crate::geometry::{Line2D, Polygon2D};
use crate::math::CoordFrame2D;
use crate::paint::Color;

/// Vertices used to draw a circle node.
pub const CIRCLE_SEGMENTS: usize = 32;

/// Distance slack allowed by line hit tests.
pub const LINE_HIT_TOLERANCE: f32 = 1.0e-5;

/// What a node draws and how it is hit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NodeKind {
    /// Pure grouping node: draws nothing, never collides.
    #[default]
    Generic,
    Polygon(PolygonNode),
    Line(LineNode),
    Circle(CircleNode),
    Camera(CameraNode),
}

impl NodeKind {
    /// Records this node's own geometry (not its children).
    pub(crate) fn draw_self(&self, list: &mut DrawList, frame: CoordFrame2D) {
        match self {
            NodeKind::Generic | NodeKind::Camera(_) => {}
            NodeKind::Polygon(p) => p.draw(list, frame),
            NodeKind::Line(l) => l.draw(list, frame),
            NodeKind::Circle(c) => c.draw(list, frame),
        }
    }

    /// Short lowercase label, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Generic => "generic",
            NodeKind::Polygon(_) => "polygon",
            NodeKind::Line(_) => "line",
            NodeKind::Circle(_) => "circle",
            NodeKind::Camera(_) => "camera",
        }
    }
}

// ── Polygon ───────────────────────────────────────────────────────────────

/// Filled and/or outlined polygon. A `None` colour skips that part.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonNode {
    pub polygon: Polygon2D,
    pub fill: Option<Color>,
    pub outline: Option<Color>,
}

impl PolygonNode {
    pub fn new(polygon: Polygon2D, fill: Option<Color>, outline: Option<Color>) -> Self {
        Self { polygon, fill, outline }
    }

    fn draw(&self, list: &mut DrawList, frame: CoordFrame2D) {
        if let Some(fill) = self.fill {
            self.polygon.draw(list, frame, fill);
        }
        if let Some(outline) = self.outline {
            self.polygon.draw_outline(list, frame, outline);
        }
    }
}

impl From<PolygonNode> for NodeKind {
    fn from(p: PolygonNode) -> Self {
        NodeKind::Polygon(p)
    }
}

// ── Line ──────────────────────────────────────────────────────────────────

/// How a line node decides whether a world point hits it.
///
/// Both rules compare a sum of world-space distances against
/// [`LINE_HIT_TOLERANCE`], so they are approximate in floating point.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineHitRule {
    /// `|start−end| + |start−point| − |point−end|`: hits when the start
    /// point lies between the query point and the end point. The start
    /// endpoint itself always hits.
    #[default]
    StartAnchored,
    /// `|start−point| + |point−end| − |start−end|`: hits anywhere on the
    /// segment, endpoints included.
    OnSegment,
}

impl LineHitRule {
    /// Applies the rule to world-space endpoints.
    pub fn hits(self, start: Vec2, end: Vec2, point: Vec2) -> bool {
        let d = match self {
            LineHitRule::StartAnchored => {
                start.distance(end) + start.distance(point) - point.distance(end)
            }
            LineHitRule::OnSegment => {
                start.distance(point) + point.distance(end) - start.distance(end)
            }
        };
        d.abs() <= LINE_HIT_TOLERANCE
    }
}

/// Stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineNode {
    pub line: Line2D,
    pub color: Color,
    pub hit_rule: LineHitRule,
}

impl LineNode {
    pub fn new(start: Vec2, end: Vec2, color: Color) -> Self {
        Self {
            line: Line2D::new(start, end),
            color,
            hit_rule: LineHitRule::default(),
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.line.width = width;
        self
    }

    pub fn with_hit_rule(mut self, rule: LineHitRule) -> Self {
        self.hit_rule = rule;
        self
    }

    fn draw(&self, list: &mut DrawList, frame: CoordFrame2D) {
        self.line.draw(list, frame, self.color);
    }
}

impl Default for LineNode {
    /// Black unit segment along +X.
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::new(1.0, 0.0), Color::BLACK)
    }
}

impl From<LineNode> for NodeKind {
    fn from(l: LineNode) -> Self {
        NodeKind::Line(l)
    }
}

// ── Circle ────────────────────────────────────────────────────────────────

/// Circle centred on the node origin, drawn as a regular polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleNode {
    radius: f32,
    outline_poly: Polygon2D,
    pub fill: Option<Color>,
    pub outline: Option<Color>,
}

impl CircleNode {
    pub fn new(radius: f32, fill: Option<Color>, outline: Option<Color>) -> Result<Self> {
        check_scale("radius", radius)?;
        Ok(Self {
            radius,
            outline_poly: Polygon2D::regular(CIRCLE_SEGMENTS, radius),
            fill,
            outline,
        })
    }

    /// Unit circle.
    pub fn unit(fill: Option<Color>, outline: Option<Color>) -> Self {
        Self {
            radius: 1.0,
            outline_poly: Polygon2D::regular(CIRCLE_SEGMENTS, 1.0),
            fill,
            outline,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<()> {
        check_scale("radius", radius)?;
        self.radius = radius;
        self.outline_poly = Polygon2D::regular(CIRCLE_SEGMENTS, radius);
        Ok(())
    }

    /// The polygon approximation used for drawing.
    #[inline]
    pub fn polygon(&self) -> &Polygon2D {
        &self.outline_poly
    }

    fn draw(&self, list: &mut DrawList, frame: CoordFrame2D) {
        if let Some(fill) = self.fill {
            self.outline_poly.draw(list, frame, fill);
        }
        if let Some(outline) = self.outline {
            self.outline_poly.draw_outline(list, frame, outline);
        }
    }
}

impl From<CircleNode> for NodeKind {
    fn from(c: CircleNode) -> Self {
        NodeKind::Circle(c)
    }
}

// ── Camera ────────────────────────────────────────────────────────────────

/// Camera payload: the viewport aspect ratio (width / height).
///
/// The pose comes from the node itself; see `SceneTree::view_matrix`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraNode {
    aspect_ratio: f32,
}

impl CameraNode {
    pub fn new(viewport: Viewport) -> Result<Self> {
        let mut cam = Self::default();
        cam.reshape(viewport.width, viewport.height)?;
        Ok(cam)
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Records a new surface size. Non-positive or non-finite sizes are
    /// rejected and leave the previous aspect ratio in place.
    pub fn reshape(&mut self, width: f32, height: f32) -> Result<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            let value = if height.is_finite() && height > 0.0 { width } else { height };
            return Err(SceneError::InvalidParameter { name: "viewport size", value });
        }
        self.aspect_ratio = viewport.aspect_ratio();
        Ok(())
    }
}

impl Default for CameraNode {
    fn default() -> Self {
        Self { aspect_ratio: 1.0 }
    }
}

impl From<CameraNode> for NodeKind {
    fn from(c: CameraNode) -> Self {
        NodeKind::Camera(c)
    }
}
