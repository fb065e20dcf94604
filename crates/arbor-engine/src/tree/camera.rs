use crate::coords::Vec2;
use crate::error::{Result, SceneError};
use crate::math::{CoordFrame2D, Matrix3, Vector3};

use super::{CameraNode, NodeId, SceneTree};

impl SceneTree {
    /// The camera payload of `id`.
    pub fn camera(&self, id: NodeId) -> Result<&CameraNode> {
        self.node(id)?.as_camera().ok_or(SceneError::NotACamera(id))
    }

    /// Forwards a surface resize to camera `id`.
    pub fn reshape_camera(&mut self, id: NodeId, width: f32, height: f32) -> Result<()> {
        self.node_mut(id)?
            .as_camera_mut()
            .ok_or(SceneError::NotACamera(id))?
            .reshape(width, height)
    }

    /// World to view: undoes the aspect ratio, then the camera's global
    /// scale, rotation and position, in that order.
    pub fn view_matrix(&self, id: NodeId) -> Result<Matrix3> {
        let aspect = self.camera(id)?.aspect_ratio();
        let pose = self.global_transform(id)?;
        let p = pose.position();
        let s = pose.scale();
        Ok(CoordFrame2D::identity()
            .scale(1.0 / aspect, 1.0)
            .scale(1.0 / s, 1.0 / s)
            .rotate(-pose.rotation())
            .translate(-p.x, -p.y)
            .matrix())
    }

    /// View to world: the inverse of [`view_matrix`](Self::view_matrix).
    pub fn view_to_world(&self, id: NodeId) -> Result<Matrix3> {
        let aspect = self.camera(id)?.aspect_ratio();
        let pose = self.global_transform(id)?;
        Ok(pose.to_matrix() * Matrix3::scale(aspect, 1.0))
    }

    /// Maps a view-space point (e.g. a normalised pointer position) to world
    /// space through camera `id`.
    pub fn from_view(&self, id: NodeId, x: f32, y: f32) -> Result<Vec2> {
        let world = self.view_to_world(id)? * Vector3::new(x, y, 1.0);
        Ok(world.to_point())
    }
}
