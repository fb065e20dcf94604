use std::collections::VecDeque;

use log::debug;

use crate::coords::Vec2;
use crate::draw::DrawList;
use crate::error::{Result, SceneError};
use crate::math::{CoordFrame2D, Matrix3, Transform};

use super::{NodeId, NodeKind, SceneNode};

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<SceneNode>,
}

/// Arena holding every node of a scene, rooted at a fixed root node.
///
/// Parents own their child lists; the parent link is a plain id. Ids are
/// generational: once a node is destroyed every copy of its id reports
/// [`SceneError::StaleNode`], even after the slot is reused.
///
/// Drawing and destruction recurse once per level, so very deep chains are
/// bounded by the thread's stack.
#[derive(Debug)]
pub struct SceneTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    live: usize,
    /// The owning scene's active camera, which `destroy` refuses to remove.
    camera: Option<NodeId>,
}

impl SceneTree {
    /// A tree containing only its root.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(SceneNode::new(None, NodeKind::Generic)),
            }],
            free: Vec::new(),
            root: NodeId::new(0, 0),
            live: 1,
            camera: None,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Live nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.live
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    pub fn node(&self, id: NodeId) -> Result<&SceneNode> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
            .ok_or(SceneError::StaleNode(id))
    }

    /// Mutable access to a node's pose, visibility, kind and hook.
    ///
    /// The root is refused: it keeps the identity pose and stays visible.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode> {
        if id == self.root {
            return Err(SceneError::RootIsFixed("mutated"));
        }
        self.slot_node_mut(id)
    }

    fn slot_node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or(SceneError::StaleNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    // ── structure ─────────────────────────────────────────────────────────

    /// Creates a node at the identity pose and appends it to `parent`'s
    /// children.
    pub fn spawn(&mut self, parent: NodeId, kind: impl Into<NodeKind>) -> Result<NodeId> {
        self.node(parent)?;
        Ok(self.insert(parent, kind.into()))
    }

    /// [`spawn`](Self::spawn) under the root, which is always live.
    pub(crate) fn spawn_under_root(&mut self, kind: impl Into<NodeKind>) -> NodeId {
        self.insert(self.root, kind.into())
    }

    /// Marks `id` as the active camera: destroying it or any ancestor is
    /// refused from now on.
    pub(crate) fn guard_camera(&mut self, id: NodeId) {
        self.camera = Some(id);
    }

    fn insert(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let kind_name = kind.name();
        let node = SceneNode::new(Some(parent), kind);

        let id = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.node = Some(node);
                NodeId::new(idx, slot.generation)
            }
            None => {
                let idx = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, node: Some(node) });
                NodeId::new(idx, 0)
            }
        };
        self.live += 1;
        if let Ok(p) = self.slot_node_mut(parent) {
            p.children.push(id);
        }

        debug!("scene: spawned {kind_name} node {id} under {parent}");
        id
    }

    /// Destroys `id` and its whole subtree, then unlinks it from its parent.
    ///
    /// Destroying an id that is already gone is a no-op. A subtree holding
    /// the active camera is refused with [`SceneError::CameraInUse`].
    pub fn destroy(&mut self, id: NodeId) -> Result<()> {
        if id == self.root {
            return Err(SceneError::RootIsFixed("destroyed"));
        }
        if !self.contains(id) {
            return Ok(());
        }
        if let Some(camera) = self.camera
            && (camera == id || self.is_ancestor(id, camera))
        {
            return Err(SceneError::CameraInUse { node: id, camera });
        }
        let removed = self.destroy_subtree(id);
        debug!("scene: destroyed node {id} ({removed} nodes)");
        Ok(())
    }

    fn destroy_subtree(&mut self, id: NodeId) -> usize {
        let Ok(node) = self.node(id) else {
            return 0;
        };
        let children = node.children.clone();
        let mut removed = 1;
        for child in children {
            removed += self.destroy_subtree(child);
        }

        let slot = &mut self.slots[id.idx()];
        let parent = slot.node.take().and_then(|n| n.parent);
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.0);
        self.live -= 1;

        if let Some(parent) = parent {
            self.unlink(parent, id);
        }
        removed
    }

    /// Removes `child` from `parent`'s list; absent entries are ignored.
    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        if let Ok(p) = self.slot_node_mut(parent)
            && let Some(pos) = p.children.iter().position(|&c| c == child)
        {
            p.children.remove(pos);
        }
    }

    /// Whether `ancestor` lies strictly above `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = self.node(node).ok().and_then(|n| n.parent);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.node(id).ok().and_then(|n| n.parent);
        }
        false
    }

    /// Every descendant of `id` (not `id` itself), parents before children
    /// and siblings in child-list order.
    pub fn descendants_breadth_first(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut queue: VecDeque<NodeId> = self.node(id)?.children.iter().copied().collect();
        while let Some(next) = queue.pop_front() {
            if let Ok(node) = self.node(next) {
                out.push(next);
                queue.extend(node.children.iter().copied());
            }
        }
        Ok(out)
    }

    /// Moves `id` under `new_parent`, keeping its global pose.
    ///
    /// The node is appended to the end of the new parent's children, even
    /// when the parent does not change.
    pub fn set_parent(&mut self, id: NodeId, new_parent: NodeId) -> Result<()> {
        if id == self.root {
            return Err(SceneError::RootIsFixed("reparented"));
        }
        self.node(id)?;
        self.node(new_parent)?;
        if id == new_parent {
            return Err(SceneError::ReparentToSelf(id));
        }
        if self.is_ancestor(id, new_parent) {
            return Err(SceneError::ReparentIntoDescendant { node: id, parent: new_parent });
        }

        let global = self.local_to_global(id)?;
        let parent_inverse = self.global_transform(new_parent)?.inverse_matrix();
        let local = Transform::from_matrix(&(parent_inverse * global));

        let node = self.slot_node_mut(id)?;
        let old_parent = node.parent.replace(new_parent);
        node.transform = local;
        if let Some(old) = old_parent {
            self.unlink(old, id);
        }
        self.slot_node_mut(new_parent)?.children.push(id);

        debug!("scene: reparented node {id} to {new_parent}");
        Ok(())
    }

    // ── traversals ────────────────────────────────────────────────────────

    /// Runs `id`'s hook, then updates the children `id` had before the hook.
    ///
    /// Children spawned during the hook wait for the next frame. Children
    /// destroyed or moved elsewhere before their turn are skipped.
    pub fn update(&mut self, id: NodeId, dt: f32) -> Result<()> {
        let node = self.slot_node_mut(id)?;
        let children = node.children.clone();
        let epoch = node.behavior_epoch;
        if let Some(mut behavior) = node.behavior.take() {
            behavior.update(id, self, dt);
            // put back unless the hook replaced or cleared itself
            if let Ok(node) = self.slot_node_mut(id)
                && node.behavior_epoch == epoch
            {
                node.behavior = Some(behavior);
            }
        }

        for child in children {
            if self.node(child).is_ok_and(|c| c.parent == Some(id)) {
                self.update(child, dt)?;
            }
        }
        Ok(())
    }

    /// Records `id` and its visible descendants into `list`.
    ///
    /// A hidden node is skipped together with its whole subtree.
    pub fn draw(&self, id: NodeId, frame: CoordFrame2D, list: &mut DrawList) -> Result<()> {
        let node = self.node(id)?;
        self.draw_node(node, frame, list);
        Ok(())
    }

    fn draw_node(&self, node: &SceneNode, frame: CoordFrame2D, list: &mut DrawList) {
        if !node.is_showing() {
            return;
        }
        let t = node.transform();
        let frame = frame
            .translate_by(t.position())
            .rotate(t.rotation())
            .scale(t.scale(), t.scale());
        node.kind().draw_self(list, frame);
        for &child in &node.children {
            if let Ok(child) = self.node(child) {
                self.draw_node(child, frame, list);
            }
        }
    }

    // ── global pose ───────────────────────────────────────────────────────

    /// Product of every ancestor's local matrix and this node's own.
    ///
    /// The root maps to identity.
    pub fn local_to_global(&self, id: NodeId) -> Result<Matrix3> {
        let mut node = self.node(id)?;
        let mut global = Matrix3::IDENTITY;
        while let Some(parent) = node.parent {
            global = node.transform.to_matrix() * global;
            node = self.node(parent)?;
        }
        Ok(global)
    }

    /// Maps world points into `id`'s local space.
    pub fn global_to_local(&self, id: NodeId) -> Result<Matrix3> {
        Ok(self.global_transform(id)?.inverse_matrix())
    }

    pub fn global_transform(&self, id: NodeId) -> Result<Transform> {
        Ok(Transform::from_matrix(&self.local_to_global(id)?))
    }

    pub fn global_position(&self, id: NodeId) -> Result<Vec2> {
        Ok(self.global_transform(id)?.position())
    }

    /// Global rotation in degrees, within `[-180, 180)`.
    pub fn global_rotation(&self, id: NodeId) -> Result<f32> {
        Ok(self.global_transform(id)?.rotation())
    }

    pub fn global_scale(&self, id: NodeId) -> Result<f32> {
        Ok(self.global_transform(id)?.scale())
    }
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::geometry::Polygon2D;
    use crate::paint::Color;
    use crate::test_util::{angle_eq, approx_eq, assert_vec_near};
    use crate::tree::{Behavior, CameraNode, PolygonNode};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn square() -> PolygonNode {
        PolygonNode::new(
            Polygon2D::from_coords(&[-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0]),
            Some(Color::WHITE),
            None,
        )
    }

    fn set_pose(tree: &mut SceneTree, id: NodeId, x: f32, y: f32, rot: f32, scale: f32) {
        let n = tree.node_mut(id).unwrap();
        n.set_position((x, y)).unwrap();
        n.set_rotation(rot).unwrap();
        n.set_scale(scale).unwrap();
    }

    // ── structure ─────────────────────────────────────────────────────────

    #[test]
    fn spawn_appends_to_parent() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(root, NodeKind::Generic).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[a, b]);
        assert_eq!(tree.parent(a).unwrap(), Some(root));
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn root_is_fixed() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        assert_eq!(tree.parent(root).unwrap(), None);
        assert!(matches!(tree.node_mut(root), Err(SceneError::RootIsFixed(_))));
        assert!(matches!(tree.destroy(root), Err(SceneError::RootIsFixed(_))));
    }

    #[test]
    fn destroy_cascades_and_unlinks() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(a, NodeKind::Generic).unwrap();
        let c = tree.spawn(b, NodeKind::Generic).unwrap();
        let keep = tree.spawn(root, NodeKind::Generic).unwrap();

        tree.destroy(a).unwrap();
        assert!(!tree.contains(a));
        assert!(!tree.contains(b));
        assert!(!tree.contains(c));
        assert_eq!(tree.children(root).unwrap(), &[keep]);
        assert_eq!(tree.node_count(), 2);

        // already gone
        tree.destroy(a).unwrap();
    }

    #[test]
    fn stale_ids_do_not_alias_reused_slots() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        tree.destroy(a).unwrap();
        let b = tree.spawn(root, NodeKind::Generic).unwrap();
        assert_eq!(a.idx(), b.idx());
        assert_eq!(tree.node(a).unwrap_err(), SceneError::StaleNode(a));
        assert!(tree.contains(b));
    }

    #[test]
    fn destroy_refuses_guarded_camera_subtree() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let rig = tree.spawn(root, NodeKind::Generic).unwrap();
        let cam = tree.spawn(rig, CameraNode::default()).unwrap();
        let hud = tree.spawn(cam, NodeKind::Generic).unwrap();
        tree.guard_camera(cam);

        let in_use = |node| SceneError::CameraInUse { node, camera: cam };
        assert_eq!(tree.destroy(cam), Err(in_use(cam)));
        assert_eq!(tree.destroy(rig), Err(in_use(rig)));
        assert!(tree.contains(cam));

        // nodes below the camera may still go
        tree.destroy(hud).unwrap();
        assert!(tree.children(cam).unwrap().is_empty());
    }

    #[test]
    fn spawn_under_stale_parent_fails() {
        let mut tree = SceneTree::new();
        let a = tree.spawn(tree.root(), NodeKind::Generic).unwrap();
        tree.destroy(a).unwrap();
        assert_eq!(tree.spawn(a, NodeKind::Generic), Err(SceneError::StaleNode(a)));
    }

    #[test]
    fn breadth_first_order() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(root, NodeKind::Generic).unwrap();
        let a1 = tree.spawn(a, NodeKind::Generic).unwrap();
        let b1 = tree.spawn(b, NodeKind::Generic).unwrap();
        let a2 = tree.spawn(a, NodeKind::Generic).unwrap();
        let a11 = tree.spawn(a1, NodeKind::Generic).unwrap();
        assert_eq!(
            tree.descendants_breadth_first(root).unwrap(),
            vec![a, b, a1, a2, b1, a11]
        );
    }

    // ── reparenting ───────────────────────────────────────────────────────

    #[test]
    fn reparent_rejects_cycles_and_self() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(a, NodeKind::Generic).unwrap();
        let c = tree.spawn(b, NodeKind::Generic).unwrap();

        assert_eq!(tree.set_parent(a, a), Err(SceneError::ReparentToSelf(a)));
        assert_eq!(
            tree.set_parent(a, c),
            Err(SceneError::ReparentIntoDescendant { node: a, parent: c })
        );
        assert!(matches!(tree.set_parent(root, a), Err(SceneError::RootIsFixed(_))));
        assert_eq!(tree.children(root).unwrap(), &[a]);
    }

    #[test]
    fn reparent_to_stale_parent_fails() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let gone = tree.spawn(root, NodeKind::Generic).unwrap();
        tree.destroy(gone).unwrap();
        assert_eq!(tree.set_parent(a, gone), Err(SceneError::StaleNode(gone)));
        assert_eq!(tree.parent(a).unwrap(), Some(root));
    }

    #[test]
    fn reparent_moves_to_end_of_new_parent() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(root, NodeKind::Generic).unwrap();
        let x = tree.spawn(b, NodeKind::Generic).unwrap();

        tree.set_parent(a, b).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[b]);
        assert_eq!(tree.children(b).unwrap(), &[x, a]);
        assert_eq!(tree.parent(a).unwrap(), Some(b));
    }

    #[test]
    fn reparent_preserves_global_pose() {
        let mut rng = StdRng::seed_from_u64(0xA4B0);
        for _ in 0..200 {
            let mut tree = SceneTree::new();
            let root = tree.root();
            let old_parent = tree.spawn(root, NodeKind::Generic).unwrap();
            let node = tree.spawn(old_parent, NodeKind::Generic).unwrap();
            let grand = tree.spawn(root, NodeKind::Generic).unwrap();
            let new_parent = tree.spawn(grand, NodeKind::Generic).unwrap();

            for id in [old_parent, node, grand, new_parent] {
                set_pose(
                    &mut tree,
                    id,
                    rng.random_range(-50.0..50.0),
                    rng.random_range(-50.0..50.0),
                    rng.random_range(-360.0..360.0),
                    rng.random_range(0.25..4.0),
                );
            }

            let before = tree.global_transform(node).unwrap();
            tree.set_parent(node, new_parent).unwrap();
            let after = tree.global_transform(node).unwrap();

            let tol = 1.0e-3 * before.position().length().max(1.0);
            assert!(
                (after.position() - before.position()).length() <= tol,
                "{before:?} vs {after:?}"
            );
            assert!(angle_eq(after.rotation(), before.rotation()), "{before:?} vs {after:?}");
            assert!(approx_eq(after.scale(), before.scale()), "{before:?} vs {after:?}");
        }
    }

    // ── global pose ───────────────────────────────────────────────────────

    #[test]
    fn global_pose_of_deep_chain() {
        let mut tree = SceneTree::new();
        let mut tip = tree.root();
        for _ in 0..5_000 {
            tip = tree.spawn(tip, NodeKind::Generic).unwrap();
            tree.node_mut(tip).unwrap().set_position((1.0, 0.0)).unwrap();
        }
        assert_vec_near(tree.global_position(tip).unwrap(), Vec2::new(5_000.0, 0.0));
    }

    #[test]
    fn global_pose_composes_chain() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(a, NodeKind::Generic).unwrap();
        set_pose(&mut tree, a, 10.0, 0.0, 90.0, 2.0);
        set_pose(&mut tree, b, 1.0, 0.0, 45.0, 1.5);

        assert_vec_near(tree.global_position(b).unwrap(), Vec2::new(10.0, 2.0));
        assert!(approx_eq(tree.global_rotation(b).unwrap(), 135.0));
        assert!(approx_eq(tree.global_scale(b).unwrap(), 3.0));
        assert_eq!(tree.local_to_global(root).unwrap(), Matrix3::IDENTITY);
    }

    #[test]
    fn global_rotation_is_normalized() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(a, NodeKind::Generic).unwrap();
        set_pose(&mut tree, a, 0.0, 0.0, 170.0, 1.0);
        set_pose(&mut tree, b, 0.0, 0.0, 30.0, 1.0);
        assert!(approx_eq(tree.global_rotation(b).unwrap(), -160.0));
    }

    #[test]
    fn global_to_local_inverts_global() {
        let mut tree = SceneTree::new();
        let a = tree.spawn(tree.root(), NodeKind::Generic).unwrap();
        set_pose(&mut tree, a, 3.0, -2.0, 30.0, 0.5);
        let p = Vec2::new(7.0, 11.0);
        let world = tree.local_to_global(a).unwrap().transform_point(p);
        assert_vec_near(tree.global_to_local(a).unwrap().transform_point(world), p);
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_skips_children_spawned_by_hook() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let parent = tree.spawn(root, NodeKind::Generic).unwrap();
        let visits = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&visits);
        let spawner = move |id: NodeId, tree: &mut SceneTree, _dt: f32| {
            let child = tree.spawn(id, NodeKind::Generic).unwrap();
            let log = Rc::clone(&log);
            tree.node_mut(child)
                .unwrap()
                .set_behavior(move |c: NodeId, _: &mut SceneTree, _: f32| log.borrow_mut().push(c));
        };
        tree.node_mut(parent).unwrap().set_behavior(spawner);

        tree.update(root, 0.016).unwrap();
        assert!(visits.borrow().is_empty());
        assert_eq!(tree.children(parent).unwrap().len(), 1);

        tree.update(root, 0.016).unwrap();
        // the first child is updated now; the second was spawned this frame
        assert_eq!(visits.borrow().len(), 1);
        assert_eq!(tree.children(parent).unwrap().len(), 2);
    }

    #[test]
    fn update_survives_sibling_destruction() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(root, NodeKind::Generic).unwrap();
        let c = tree.spawn(root, NodeKind::Generic).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));

        tree.node_mut(a)
            .unwrap()
            .set_behavior(move |_: NodeId, tree: &mut SceneTree, _: f32| {
                tree.destroy(b).unwrap();
            });
        let log = Rc::clone(&seen);
        tree.node_mut(c)
            .unwrap()
            .set_behavior(move |id: NodeId, _: &mut SceneTree, _: f32| log.borrow_mut().push(id));

        tree.update(root, 0.1).unwrap();
        assert_eq!(*seen.borrow(), vec![c]);
        assert_eq!(tree.children(root).unwrap(), &[a, c]);
    }

    #[test]
    fn hook_may_destroy_its_own_node() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        tree.spawn(a, NodeKind::Generic).unwrap();
        tree.node_mut(a)
            .unwrap()
            .set_behavior(|id: NodeId, tree: &mut SceneTree, _: f32| tree.destroy(id).unwrap());

        tree.update(root, 0.1).unwrap();
        assert!(!tree.contains(a));
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn hook_is_restored_after_running() {
        struct Spin;
        impl Behavior for Spin {
            fn update(&mut self, node: NodeId, tree: &mut SceneTree, dt: f32) {
                tree.node_mut(node).unwrap().rotate(90.0 * dt).unwrap();
            }
        }

        let mut tree = SceneTree::new();
        let a = tree.spawn(tree.root(), NodeKind::Generic).unwrap();
        tree.node_mut(a).unwrap().set_behavior(Spin);
        tree.update(a, 1.0).unwrap();
        tree.update(a, 1.0).unwrap();
        assert!(tree.node(a).unwrap().has_behavior());
        assert_eq!(tree.node(a).unwrap().rotation(), -180.0);
    }

    #[test]
    fn hook_may_clear_itself() {
        let mut tree = SceneTree::new();
        let a = tree.spawn(tree.root(), NodeKind::Generic).unwrap();
        let runs = Rc::new(Cell::new(0));

        let count = Rc::clone(&runs);
        tree.node_mut(a)
            .unwrap()
            .set_behavior(move |id: NodeId, tree: &mut SceneTree, _: f32| {
                count.set(count.get() + 1);
                tree.node_mut(id).unwrap().clear_behavior();
            });

        tree.update(a, 0.1).unwrap();
        tree.update(a, 0.1).unwrap();
        assert_eq!(runs.get(), 1);
        assert!(!tree.node(a).unwrap().has_behavior());
    }

    #[test]
    fn hook_may_replace_itself() {
        let mut tree = SceneTree::new();
        let a = tree.spawn(tree.root(), NodeKind::Generic).unwrap();
        tree.node_mut(a)
            .unwrap()
            .set_behavior(|id: NodeId, tree: &mut SceneTree, _: f32| {
                tree.node_mut(id)
                    .unwrap()
                    .set_behavior(|id: NodeId, tree: &mut SceneTree, _: f32| {
                        tree.node_mut(id).unwrap().translate(1.0, 0.0).unwrap();
                    });
            });

        tree.update(a, 0.1).unwrap();
        assert_eq!(tree.node(a).unwrap().position(), Vec2::zero());
        tree.update(a, 0.1).unwrap();
        tree.update(a, 0.1).unwrap();
        assert_eq!(tree.node(a).unwrap().position(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn child_moved_by_earlier_sibling_updates_once() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let a = tree.spawn(root, NodeKind::Generic).unwrap();
        let b = tree.spawn(root, NodeKind::Generic).unwrap();
        let c = tree.spawn(root, NodeKind::Generic).unwrap();
        let runs = Rc::new(Cell::new(0));

        tree.node_mut(a)
            .unwrap()
            .set_behavior(move |_: NodeId, tree: &mut SceneTree, _: f32| {
                if tree.parent(c).unwrap() != Some(b) {
                    tree.set_parent(c, b).unwrap();
                }
            });
        let count = Rc::clone(&runs);
        tree.node_mut(c)
            .unwrap()
            .set_behavior(move |_: NodeId, _: &mut SceneTree, _: f32| count.set(count.get() + 1));

        tree.update(root, 0.1).unwrap();
        assert_eq!(tree.parent(c).unwrap(), Some(b));
        assert_eq!(tree.children(root).unwrap(), &[a, b]);
        assert_eq!(runs.get(), 1);

        tree.update(root, 0.1).unwrap();
        assert_eq!(runs.get(), 2);
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn hidden_ancestor_hides_subtree_without_touching_flags() {
        let mut tree = SceneTree::new();
        let root = tree.root();
        let group = tree.spawn(root, NodeKind::Generic).unwrap();
        let child = tree.spawn(group, square()).unwrap();
        let grandchild = tree.spawn(child, square()).unwrap();

        let mut list = DrawList::new();
        tree.draw(root, CoordFrame2D::identity(), &mut list).unwrap();
        assert_eq!(list.len(), 2);

        tree.node_mut(group).unwrap().show(false);
        list.clear();
        tree.draw(root, CoordFrame2D::identity(), &mut list).unwrap();
        assert!(list.is_empty());
        assert!(tree.node(child).unwrap().is_showing());
        assert!(tree.node(grandchild).unwrap().is_showing());
    }

    #[test]
    fn draw_accumulates_frames() {
        let mut tree = SceneTree::new();
        let a = tree.spawn(tree.root(), NodeKind::Generic).unwrap();
        let b = tree.spawn(a, square()).unwrap();
        set_pose(&mut tree, a, 5.0, 0.0, 90.0, 2.0);
        set_pose(&mut tree, b, 1.0, 0.0, 0.0, 1.0);

        let mut list = DrawList::new();
        tree.draw(tree.root(), CoordFrame2D::identity(), &mut list).unwrap();
        let DrawCmd::FillPolygon(cmd) = &list.items()[0] else {
            panic!("expected a filled polygon, got {:?}", list.items());
        };
        assert_vec_near(cmd.transform.transform_point(Vec2::zero()), Vec2::new(5.0, 2.0));
    }
}
