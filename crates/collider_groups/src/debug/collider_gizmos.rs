//! Collider group gizmo rendering
//!
//! Draws the colliders of every selected group through a [`GizmoDrawer`].
//! The renderer only reads the groups and the scene; it is meant to run once
//! per frame while the collector is left untouched.

use log::trace;

use crate::foundation::collections::ColliderId;
use crate::grouping::{ColliderCollector, ColliderGroup};
use crate::physics::ColliderShape;
use crate::scene::SceneHierarchy;

use super::draw::GizmoDrawer;

/// Gizmo renderer for collider groups
#[derive(Debug, Clone, Default)]
pub struct ColliderGizmoRenderer {
    visible: bool,
}

impl ColliderGizmoRenderer {
    /// Create a hidden renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Start drawing gizmos. No-op when already visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Stop drawing gizmos. No-op when already hidden.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Are gizmos currently drawn?
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Would [`show`](Self::show) change anything? Lets a host enable only
    /// the button that applies.
    pub fn can_show(&self) -> bool {
        !self.visible
    }

    /// Draw the selected groups of a collector
    pub fn draw_collector<S, D>(&self, collector: &ColliderCollector, scene: &S, drawer: &mut D) -> usize
    where
        S: SceneHierarchy + ?Sized,
        D: GizmoDrawer + ?Sized,
    {
        self.draw(collector.groups(), scene, drawer)
    }

    /// Draw every selected group. Colliders that no longer resolve in the
    /// scene are skipped.
    ///
    /// Returns the number of primitives issued.
    pub fn draw<S, D>(&self, groups: &[ColliderGroup], scene: &S, drawer: &mut D) -> usize
    where
        S: SceneHierarchy + ?Sized,
        D: GizmoDrawer + ?Sized,
    {
        if !self.visible {
            return 0;
        }

        let mut issued = 0;
        for group in groups.iter().filter(|g| g.is_selected) {
            drawer.set_color(group.gizmo_color);

            for &collider in group.colliders() {
                issued += draw_collider(group, collider, scene, drawer);
            }
        }
        issued
    }
}

fn draw_collider<S, D>(group: &ColliderGroup, id: ColliderId, scene: &S, drawer: &mut D) -> usize
where
    S: SceneHierarchy + ?Sized,
    D: GizmoDrawer + ?Sized,
{
    let Some(collider) = scene.collider(id) else {
        trace!("Skipping stale collider {id:?} in group '{}'", group.name());
        return 0;
    };
    let Some(world) = scene.world_transform(collider.node) else {
        trace!("Skipping collider {id:?} on removed node");
        return 0;
    };

    drawer.set_transform(world.position, world.rotation, world.scale);

    let mut issued = 0;
    if group.show_wireframe {
        issued += draw_shape(&collider.shape, true, drawer);
    }
    if group.show_solid {
        issued += draw_shape(&collider.shape, false, drawer);
    }
    issued
}

/// Issue the primitive for one shape. Capsules are drawn as a sphere of the
/// capsule radius; `Other` draws nothing.
fn draw_shape<D: GizmoDrawer + ?Sized>(shape: &ColliderShape, wireframe: bool, drawer: &mut D) -> usize {
    match *shape {
        ColliderShape::Box { center, size } => {
            if wireframe {
                drawer.draw_wire_cube(center, size);
            } else {
                drawer.draw_cube(center, size);
            }
            1
        }
        ColliderShape::Sphere { center, radius } | ColliderShape::Capsule { center, radius, .. } => {
            if wireframe {
                drawer.draw_wire_sphere(center, radius);
            } else {
                drawer.draw_sphere(center, radius);
            }
            1
        }
        ColliderShape::Other => 0,
    }
}
