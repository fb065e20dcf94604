use super::{NodeId, SceneTree};

/// Per-frame update hook attached to a node.
///
/// Runs before the node's children are visited. While it runs, the hook is
/// detached from its node, so it may freely spawn, destroy or reparent
/// nodes, including its own. Children spawned under `node` during the hook
/// are first updated on the next frame.
pub trait Behavior: 'static {
    fn update(&mut self, node: NodeId, tree: &mut SceneTree, dt: f32);
}

impl<F> Behavior for F
where
    F: FnMut(NodeId, &mut SceneTree, f32) + 'static,
{
    fn update(&mut self, node: NodeId, tree: &mut SceneTree, dt: f32) {
        self(node, tree, dt)
    }
}
