//! RGBA gizmo colors

use serde::{Deserialize, Serialize};

use super::math::Vec4;

/// Linear RGBA color used to tint collider gizmos
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Color {
    /// Opaque red
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    /// Opaque green, the default group color
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    /// Opaque blue
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);
    /// Opaque cyan
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create a color from all four channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Convert to a shader-friendly vector
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GREEN
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_green() {
        assert_eq!(Color::default(), Color::GREEN);
    }

    #[test]
    fn test_vec4_conversion() {
        let c = Color::RED.with_alpha(0.25);
        assert_eq!(Color::from(c.to_vec4()), c);
    }
}
