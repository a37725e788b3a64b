//! Collider shape definitions
//!
//! Shapes are stored in the local space of the node that owns them; the
//! node's world transform places them in the scene.

use crate::foundation::math::Vec3;

/// Axis a capsule is aligned with in local space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapsuleDirection {
    /// Local X axis
    X,
    /// Local Y axis
    #[default]
    Y,
    /// Local Z axis
    Z,
}

/// Collision shape kinds (stored in LOCAL SPACE)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Oriented box with full edge lengths
    Box {
        /// Local center offset
        center: Vec3,
        /// Full size along each axis
        size: Vec3,
    },
    /// Sphere
    Sphere {
        /// Local center offset
        center: Vec3,
        /// Radius
        radius: f32,
    },
    /// Capsule (cylinder capped by two hemispheres)
    Capsule {
        /// Local center offset
        center: Vec3,
        /// Radius of the caps and the cylinder
        radius: f32,
        /// Total height including the caps
        height: f32,
        /// Alignment axis
        direction: CapsuleDirection,
    },
    /// Any shape the gizmo renderer has no primitive for (meshes, terrain, ...)
    Other,
}

impl ColliderShape {
    /// Unit box centered on the node
    pub fn cuboid(size: Vec3) -> Self {
        Self::Box { center: Vec3::zeros(), size }
    }

    /// Sphere centered on the node
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { center: Vec3::zeros(), radius }
    }

    /// Y-aligned capsule centered on the node
    pub fn capsule(radius: f32, height: f32) -> Self {
        Self::Capsule {
            center: Vec3::zeros(),
            radius,
            height,
            direction: CapsuleDirection::Y,
        }
    }

    /// Builder pattern: Set the local center offset (no-op for `Other`)
    pub fn with_center(mut self, offset: Vec3) -> Self {
        match &mut self {
            Self::Box { center, .. }
            | Self::Sphere { center, .. }
            | Self::Capsule { center, .. } => *center = offset,
            Self::Other => {}
        }
        self
    }

    /// Short name used in log output
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
            Self::Capsule { .. } => "capsule",
            Self::Other => "other",
        }
    }
}
