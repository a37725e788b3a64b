//! Debug module for collider gizmo visualization

pub mod draw;
pub mod collider_gizmos;

pub use draw::{DebugDrawList, DebugShape, GizmoDrawer};
pub use collider_gizmos::ColliderGizmoRenderer;
