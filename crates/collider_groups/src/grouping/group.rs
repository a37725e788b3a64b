//! Collider groups and their user-editable display state

use crate::foundation::collections::ColliderId;
use crate::foundation::color::Color;

/// Per-group display settings edited by the user.
///
/// These are never recomputed by a scan; they are carried over by key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupDisplayState {
    /// Gizmo tint
    pub gizmo_color: Color,
    /// Draw this group when gizmos are shown
    pub is_selected: bool,
    /// Draw wireframe primitives
    pub show_wireframe: bool,
    /// Draw solid primitives
    pub show_solid: bool,
}

impl Default for GroupDisplayState {
    fn default() -> Self {
        Self {
            gizmo_color: Color::GREEN,
            is_selected: false,
            show_wireframe: true,
            show_solid: true,
        }
    }
}

/// Colliders sharing one grouping key
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderGroup {
    name: String,
    colliders: Vec<ColliderId>,
    /// Gizmo tint
    pub gizmo_color: Color,
    /// Draw this group when gizmos are shown
    pub is_selected: bool,
    /// Draw wireframe primitives
    pub show_wireframe: bool,
    /// Draw solid primitives
    pub show_solid: bool,
}

impl ColliderGroup {
    pub(crate) fn new(name: String, state: GroupDisplayState) -> Self {
        Self {
            name,
            colliders: Vec::new(),
            gizmo_color: state.gizmo_color,
            is_selected: state.is_selected,
            show_wireframe: state.show_wireframe,
            show_solid: state.show_solid,
        }
    }

    pub(crate) fn push(&mut self, collider: ColliderId) {
        self.colliders.push(collider);
    }

    /// Grouping key, unique within a collector
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in discovery order
    pub fn colliders(&self) -> &[ColliderId] {
        &self.colliders
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// True when the group has no members
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Copy of the display settings
    pub fn display_state(&self) -> GroupDisplayState {
        GroupDisplayState {
            gizmo_color: self.gizmo_color,
            is_selected: self.is_selected,
            show_wireframe: self.show_wireframe,
            show_solid: self.show_solid,
        }
    }

    /// Overwrite the display settings
    pub fn apply_display_state(&mut self, state: GroupDisplayState) {
        self.gizmo_color = state.gizmo_color;
        self.is_selected = state.is_selected;
        self.show_wireframe = state.show_wireframe;
        self.show_solid = state.show_solid;
    }
}
