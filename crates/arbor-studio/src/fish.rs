use anyhow::Result;
use log::warn;

use arbor_engine::coords::Vec2;
use arbor_engine::draw::DrawList;
use arbor_engine::geometry::Polygon2D;
use arbor_engine::math::CoordFrame2D;
use arbor_engine::paint::Color;
use arbor_engine::tree::{Behavior, LineNode, NodeId, NodeKind, PolygonNode, SceneTree};

const EYE: Vec2 = Vec2::new(-0.2, 0.1);

/// Outline fish: diamond body, triangular tail and a short mouth line,
/// grouped under one generic node.
pub fn build(tree: &mut SceneTree, parent: NodeId, color: Color) -> Result<NodeId> {
    let fish = tree.spawn(parent, NodeKind::Generic)?;
    tree.spawn(
        fish,
        PolygonNode::new(
            Polygon2D::from_coords(&[0.5, 0.0, 0.0, 0.5, -0.5, 0.0, 0.0, -0.5]),
            None,
            Some(color),
        ),
    )?;
    tree.spawn(
        fish,
        PolygonNode::new(
            Polygon2D::from_coords(&[0.5, 0.0, 0.75, -0.5, 0.75, 0.5]),
            None,
            Some(color),
        ),
    )?;
    tree.spawn(fish, LineNode::new(Vec2::new(-0.5, 0.0), Vec2::new(-0.4, 0.0), color))?;
    Ok(fish)
}

/// Records the fish's eye. Node kinds have no point shape, so the eye is
/// pushed straight into the frame's draw list under the fish's global frame.
pub fn draw_eye(tree: &SceneTree, fish: NodeId, list: &mut DrawList, color: Color) -> Result<()> {
    if tree.node(fish)?.is_showing() {
        let frame = CoordFrame2D::from_matrix(tree.local_to_global(fish)?);
        list.push_point(EYE, color, frame);
    }
    Ok(())
}

/// Moves a node along its own heading while turning at a constant rate.
#[derive(Debug, Clone)]
pub struct Cruise {
    pub speed: f32,
    pub turn_rate: f32,
}

impl Behavior for Cruise {
    fn update(&mut self, node: NodeId, tree: &mut SceneTree, dt: f32) {
        let Ok(n) = tree.node_mut(node) else {
            return;
        };
        let heading = (n.rotation() + 180.0).to_radians();
        let step = self.speed * dt;
        let moved = n
            .translate(step * heading.cos(), step * heading.sin())
            .and_then(|()| n.rotate(self.turn_rate * dt));
        if let Err(err) = moved {
            warn!("fish: node {node}: {err}");
        }
    }
}
