//! Scene access
//!
//! ## Architecture
//!
//! ```text
//! Host scene (engine, editor, SceneTree)
//!      ↓  SceneHierarchy
//! ColliderCollector / ColliderGizmoRenderer
//! ```

mod hierarchy;
mod scene_tree;

pub use hierarchy::{ColliderComponent, SceneHierarchy};
pub use scene_tree::{SceneError, SceneNode, SceneTree, UNTAGGED};
