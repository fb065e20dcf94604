//! Scene tree: nodes, their local poses and the traversals over them.
//!
//! Responsibilities:
//! - own nodes in a generational arena; parents own their child lists
//! - compose and decompose global poses (TRS only)
//! - pose-preserving reparenting with cycle rejection
//! - per-frame `update` / `draw` traversals and per-kind hit tests

mod behavior;
mod camera;
mod collide;
mod id;
mod kind;
mod node;
mod scene_tree;

pub use behavior::Behavior;
pub use id::NodeId;
pub use kind::{
    CIRCLE_SEGMENTS, CameraNode, CircleNode, LINE_HIT_TOLERANCE, LineHitRule, LineNode, NodeKind,
    PolygonNode,
};
pub use node::SceneNode;
pub use scene_tree::SceneTree;
