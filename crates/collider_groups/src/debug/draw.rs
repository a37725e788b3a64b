//! Debug drawing primitives
//!
//! [`GizmoDrawer`] is the immediate-mode interface the host renderer exposes:
//! a current color, a current transform, and four primitives. The
//! [`DebugDrawList`] implementation records what was drawn instead of
//! rasterizing it, for headless hosts and tests.

use crate::foundation::color::Color;
use crate::foundation::math::{Point3, Quat, Transform, Vec3};

/// Immediate-mode gizmo primitives provided by the host
pub trait GizmoDrawer {
    /// Color for subsequent primitives
    fn set_color(&mut self, color: Color);

    /// Transform for subsequent primitives
    fn set_transform(&mut self, position: Vec3, rotation: Quat, scale: Vec3);

    /// Wireframe box with full edge lengths `size`
    fn draw_wire_cube(&mut self, center: Vec3, size: Vec3);

    /// Solid box with full edge lengths `size`
    fn draw_cube(&mut self, center: Vec3, size: Vec3);

    /// Wireframe sphere
    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32);

    /// Solid sphere
    fn draw_sphere(&mut self, center: Vec3, radius: f32);
}

/// A recorded primitive with the color and transform active when it was drawn
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Box at local center with full size
    Box {
        center: Vec3,
        size: Vec3,
        color: Color,
        transform: Transform,
        wireframe: bool,
    },

    /// Sphere at local center with radius
    Sphere {
        center: Vec3,
        radius: f32,
        color: Color,
        transform: Transform,
        wireframe: bool,
    },
}

impl DebugShape {
    /// Color the shape was drawn with
    pub fn color(&self) -> Color {
        match self {
            DebugShape::Box { color, .. } | DebugShape::Sphere { color, .. } => *color,
        }
    }

    /// Whether the shape was drawn as wireframe
    pub fn is_wireframe(&self) -> bool {
        match self {
            DebugShape::Box { wireframe, .. } | DebugShape::Sphere { wireframe, .. } => *wireframe,
        }
    }

    /// Shape center in world space
    pub fn world_center(&self) -> Vec3 {
        let (center, transform) = match self {
            DebugShape::Box { center, transform, .. }
            | DebugShape::Sphere { center, transform, .. } => (center, transform),
        };
        transform
            .to_matrix()
            .transform_point(&Point3::from(*center))
            .coords
    }
}

/// Recording gizmo drawer
#[derive(Debug, Clone)]
pub struct DebugDrawList {
    shapes: Vec<DebugShape>,
    color: Color,
    transform: Transform,
}

impl DebugDrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            color: Color::WHITE,
            transform: Transform::identity(),
        }
    }

    /// Recorded shapes in draw order
    pub fn shapes(&self) -> &[DebugShape] {
        &self.shapes
    }

    /// Get the number of recorded shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Drop all recorded shapes and reset color and transform
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.color = Color::WHITE;
        self.transform = Transform::identity();
    }

    fn push_box(&mut self, center: Vec3, size: Vec3, wireframe: bool) {
        self.shapes.push(DebugShape::Box {
            center,
            size,
            color: self.color,
            transform: self.transform,
            wireframe,
        });
    }

    fn push_sphere(&mut self, center: Vec3, radius: f32, wireframe: bool) {
        self.shapes.push(DebugShape::Sphere {
            center,
            radius,
            color: self.color,
            transform: self.transform,
            wireframe,
        });
    }
}

impl Default for DebugDrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl GizmoDrawer for DebugDrawList {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_transform(&mut self, position: Vec3, rotation: Quat, scale: Vec3) {
        self.transform = Transform { position, rotation, scale };
    }

    fn draw_wire_cube(&mut self, center: Vec3, size: Vec3) {
        self.push_box(center, size, true);
    }

    fn draw_cube(&mut self, center: Vec3, size: Vec3) {
        self.push_box(center, size, false);
    }

    fn draw_wire_sphere(&mut self, center: Vec3, radius: f32) {
        self.push_sphere(center, radius, true);
    }

    fn draw_sphere(&mut self, center: Vec3, radius: f32) {
        self.push_sphere(center, radius, false);
    }
}
