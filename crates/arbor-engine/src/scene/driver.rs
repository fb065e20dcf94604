use log::{debug, trace, warn};

use crate::coords::Vec2;
use crate::draw::DrawList;
use crate::error::{Result, SceneError};
use crate::math::CoordFrame2D;
use crate::time::{FrameClock, FrameTime};
use crate::tree::{CameraNode, NodeId, SceneTree};

use super::SceneConfig;

/// A scene tree together with its active camera and frame clock.
///
/// The external driver calls [`reshape`](Self::reshape) on resize and
/// [`draw`](Self::draw) once per tick.
#[derive(Debug)]
pub struct Scene {
    tree: SceneTree,
    camera: NodeId,
    clock: FrameClock,
}

impl Scene {
    /// A scene with a unit viewport and an unclamped clock.
    pub fn new() -> Self {
        let mut tree = SceneTree::new();
        let camera = tree.spawn_under_root(CameraNode::default());
        tree.guard_camera(camera);
        Self {
            tree,
            camera,
            clock: SceneConfig::default().frame_clock(),
        }
    }

    pub fn with_config(config: SceneConfig) -> Result<Self> {
        let mut tree = SceneTree::new();
        let camera = tree.spawn_under_root(CameraNode::new(config.viewport)?);
        tree.guard_camera(camera);
        Ok(Self {
            tree,
            camera,
            clock: config.frame_clock(),
        })
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// The active camera.
    #[inline]
    pub fn camera(&self) -> NodeId {
        self.camera
    }

    #[inline]
    pub fn tree(&self) -> &SceneTree {
        &self.tree
    }

    /// Mutable tree access. The active camera and its ancestors cannot be
    /// destroyed through it; swap cameras with [`set_camera`](Self::set_camera).
    #[inline]
    pub fn tree_mut(&mut self) -> &mut SceneTree {
        &mut self.tree
    }

    pub fn aspect_ratio(&self) -> Result<f32> {
        Ok(self.tree.camera(self.camera)?.aspect_ratio())
    }

    /// Forwards a surface resize to the active camera.
    pub fn reshape(&mut self, width: f32, height: f32) -> Result<()> {
        if let Err(err) = self.tree.reshape_camera(self.camera, width, height) {
            warn!("scene: reshape to {width}x{height} rejected: {err}");
            return Err(err);
        }
        debug!("scene: reshaped to {width}x{height}");
        Ok(())
    }

    /// Runs one frame with `dt` measured by the scene's monotonic clock.
    pub fn draw(&mut self, list: &mut DrawList) -> Result<FrameTime> {
        let time = self.clock.tick();
        self.draw_with_delta(list, time.dt)?;
        Ok(time)
    }

    /// Runs one frame with an explicit `dt`, in seconds.
    ///
    /// `list` is cleared, receives the camera's view matrix, then the draw
    /// commands of every visible node. The view is taken before the update,
    /// so camera motion made by hooks shows up on the next frame.
    pub fn draw_with_delta(&mut self, list: &mut DrawList, dt: f32) -> Result<()> {
        list.clear();
        list.set_view(self.tree.view_matrix(self.camera)?);

        let root = self.tree.root();
        self.tree.update(root, dt)?;
        self.tree.draw(root, CoordFrame2D::identity(), list)?;

        trace!("scene: frame dt={dt:.4}s, {} draw commands", list.len());
        Ok(())
    }

    /// Makes `camera` the active camera, destroying the previous camera and
    /// everything attached to it.
    ///
    /// Installing the active camera again is a no-op. A candidate living
    /// under the active camera is refused, since the cascade would take it
    /// down too.
    pub fn set_camera(&mut self, camera: NodeId) -> Result<()> {
        self.tree.camera(camera)?;
        let current = self.camera;
        if camera == current {
            return Ok(());
        }
        if self.tree.is_ancestor(current, camera) {
            let err = SceneError::CameraInsideCamera { candidate: camera, current };
            warn!("scene: {err}");
            return Err(err);
        }

        self.tree.guard_camera(camera);
        if let Err(err) = self.tree.destroy(current) {
            self.tree.guard_camera(current);
            return Err(err);
        }
        self.camera = camera;
        debug!("scene: camera {current} replaced by {camera}");
        Ok(())
    }

    /// Every node below the root hit by the world-space `point`, in
    /// breadth-first order.
    pub fn collision(&self, point: Vec2) -> Result<Vec<NodeId>> {
        let mut hits = Vec::new();
        for id in self.tree.descendants_breadth_first(self.tree.root())? {
            if self.tree.collides(id, point)? {
                hits.push(id);
            }
        }
        Ok(hits)
    }

    /// Maps a view-space point to world space through the active camera.
    pub fn from_view(&self, x: f32, y: f32) -> Result<Vec2> {
        self.tree.from_view(self.camera, x, y)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
