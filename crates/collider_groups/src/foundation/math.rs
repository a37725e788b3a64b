//! Math utilities and types
//!
//! Provides the math types used to place collider gizmos in world space.

pub use nalgebra::{
    Vector3, Vector4,
    Matrix3, Matrix4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder pattern: Set rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Combine this (parent) transform with a child's local transform.
    ///
    /// The resulting scale is the "lossy" world scale: the diagonal of the
    /// combined rotation-scale matrix expressed in the combined rotation's
    /// frame. Shear from rotated children under non-uniform parents is dropped.
    pub fn combine(&self, other: &Transform) -> Transform {
        let rotation = self.rotation * other.rotation;
        let rotation_scale = self.rotation.to_rotation_matrix().into_inner()
            * Mat3::from_diagonal(&self.scale)
            * other.rotation.to_rotation_matrix().into_inner()
            * Mat3::from_diagonal(&other.scale);
        let local = rotation.to_rotation_matrix().into_inner().transpose() * rotation_scale;

        Transform {
            position: self.position + self.rotation * (self.scale.component_mul(&other.position)),
            rotation,
            scale: Vec3::new(local.m11, local.m22, local.m33),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_combine_scales_child_offset() {
        let parent = Transform::from_position(Vec3::new(1.0, 0.0, 0.0))
            .with_scale(Vec3::new(2.0, 2.0, 2.0));
        let child = Transform::from_position(Vec3::new(0.0, 1.0, 0.0))
            .with_scale(Vec3::new(0.5, 1.0, 3.0));

        let world = parent.combine(&child);

        assert_relative_eq!(world.position, Vec3::new(1.0, 2.0, 0.0));
        assert_relative_eq!(world.scale, Vec3::new(1.0, 2.0, 6.0));
    }

    #[test]
    fn test_combine_rotated_child_under_non_uniform_parent() {
        let parent = Transform::identity().with_scale(Vec3::new(2.0, 1.0, 1.0));
        let quarter_turn = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2);
        let child = Transform::identity().with_rotation(quarter_turn);

        let world = parent.combine(&child);

        // Child X lies along parent Y (unscaled), child Y along parent X (doubled)
        assert_relative_eq!(world.scale, Vec3::new(1.0, 2.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_combine_applies_parent_rotation() {
        let quarter_turn = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2);
        let parent = Transform::identity().with_rotation(quarter_turn);
        let child = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));

        let world = parent.combine(&child);

        assert_relative_eq!(world.position, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_identity_matrix() {
        assert_relative_eq!(Transform::identity().to_matrix(), Mat4::identity());
    }
}
