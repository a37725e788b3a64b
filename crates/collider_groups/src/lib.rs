//! # Collider Groups
//!
//! Groups the colliders of a scene hierarchy into named collections, filters
//! them by tag and layer, and draws debug gizmos for the selected groups.
//!
//! ## Features
//!
//! - **Grouping**: by parent/subgroup name, by tag, or by layer
//! - **Filtering**: tag allow-list and layer mask
//! - **Stable display state**: group color and toggles survive rescans by key
//! - **Gizmos**: wireframe and solid primitives through a host drawer trait
//!
//! ## Quick Start
//!
//! ```rust
//! use collider_groups::prelude::*;
//!
//! let mut scene = SceneTree::new();
//! let root = scene.create_root("Colliders");
//! let group = scene.create_child(root, "Group 1").unwrap();
//! let subgroup = scene.create_child(group, "group 1.1").unwrap();
//! let leaf = scene.create_child(subgroup, "collider 1").unwrap();
//! scene.attach_collider(leaf, ColliderShape::sphere(0.5)).unwrap();
//!
//! let mut collector = ColliderCollector::new(root, GroupingSettings::default());
//! collector.rescan(&scene);
//! collector.group_mut("Group 1/group 1.1").unwrap().is_selected = true;
//!
//! let mut renderer = ColliderGizmoRenderer::new();
//! renderer.show();
//! let mut draw_list = DebugDrawList::new();
//! renderer.draw_collector(&collector, &scene, &mut draw_list);
//! assert_eq!(draw_list.shape_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod debug;
pub mod foundation;
pub mod grouping;
pub mod physics;
pub mod scene;

#[cfg(test)]
mod tests;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        debug::{ColliderGizmoRenderer, DebugDrawList, DebugShape, GizmoDrawer},
        foundation::{
            collections::{ColliderId, NodeId},
            color::Color,
            math::{Quat, Transform, Vec3},
        },
        grouping::{
            ColliderCollector, ColliderFilter, ColliderGroup, GroupDisplayState, GroupingMode,
            GroupingSettings,
        },
        physics::{ColliderShape, LayerMask},
        scene::{SceneError, SceneHierarchy, SceneTree},
    };
}
