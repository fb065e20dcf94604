use crate::coords::Vec2;
use crate::error::Result;

use super::{NodeId, NodeKind, SceneTree};

impl SceneTree {
    /// Whether the world-space `point` hits node `id`'s own shape.
    ///
    /// Visibility is not consulted, and children are not tested.
    pub fn collides(&self, id: NodeId, point: Vec2) -> Result<bool> {
        let node = self.node(id)?;
        let hit = match node.kind() {
            NodeKind::Generic | NodeKind::Camera(_) => false,
            NodeKind::Circle(circle) => {
                let global = self.global_transform(id)?;
                point.distance(global.position()) <= circle.radius() * global.scale()
            }
            NodeKind::Polygon(poly) => {
                let local = self.global_to_local(id)?.transform_point(point);
                poly.polygon.contains(local)
            }
            NodeKind::Line(line) => {
                let global = self.local_to_global(id)?;
                line.hit_rule.hits(
                    global.transform_point(line.line.start),
                    global.transform_point(line.line.end),
                    point,
                )
            }
        };
        Ok(hit)
    }
}
