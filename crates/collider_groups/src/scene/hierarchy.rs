//! Scene hierarchy trait
//!
//! The collector and the gizmo renderer never own scene data. They see the
//! host scene through this trait, which a game engine, an editor or the
//! in-memory [`SceneTree`](super::SceneTree) can implement.

use crate::foundation::collections::{ColliderId, NodeId};
use crate::foundation::math::Transform;
use crate::physics::ColliderShape;

/// Collider attached to a scene node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderComponent {
    /// Node the collider is attached to
    pub node: NodeId,
    /// Local-space shape
    pub shape: ColliderShape,
}

/// Read access to a scene hierarchy
///
/// Every accessor returns `None` for handles that no longer resolve, so
/// callers can hold handles across scene edits and detect staleness.
pub trait SceneHierarchy {
    /// All colliders in the subtree rooted at `root` (root included), in
    /// depth-first pre-order. Colliders on inactive nodes, or below them,
    /// are only reported when `include_inactive` is set.
    fn collect_colliders(&self, root: NodeId, include_inactive: bool) -> Vec<ColliderId>;

    /// Resolve a collider handle
    fn collider(&self, id: ColliderId) -> Option<&ColliderComponent>;

    /// Node name
    fn name(&self, node: NodeId) -> Option<&str>;

    /// Node tag
    fn tag(&self, node: NodeId) -> Option<&str>;

    /// Layer index of the node
    fn layer(&self, node: NodeId) -> Option<u8>;

    /// Parent of the node, `None` for roots and removed nodes
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// World transform of the node, with lossy scale
    fn world_transform(&self, node: NodeId) -> Option<Transform>;

    /// Node owning a collider
    fn collider_node(&self, id: ColliderId) -> Option<NodeId> {
        self.collider(id).map(|c| c.node)
    }
}
