//! Collision layer masks used to filter colliders
//!
//! A scene node sits on exactly one layer, identified by an index in `0..32`.
//! A [`LayerMask`] is a set of such layers packed into a `u32`.

use serde::{Deserialize, Serialize};

/// Number of addressable layers
pub const LAYER_COUNT: u8 = 32;

/// Bitmask over the 32 collision layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// No layers
    pub const NONE: LayerMask = LayerMask(0);

    /// All layers
    pub const ALL: LayerMask = LayerMask(0xFFFF_FFFF);

    /// Mask containing a single layer. Out-of-range indices yield an empty mask.
    pub fn layer(index: u8) -> Self {
        if index < LAYER_COUNT {
            LayerMask(1 << index)
        } else {
            LayerMask::NONE
        }
    }

    /// Helper to create a mask from multiple layer indices
    ///
    /// # Example
    /// ```
    /// use collider_groups::physics::LayerMask;
    ///
    /// let mask = LayerMask::from_layers(&[0, 3, 8]);
    /// assert!(mask.contains_layer(3));
    /// assert!(!mask.contains_layer(4));
    /// ```
    pub fn from_layers(layers: &[u8]) -> Self {
        layers
            .iter()
            .fold(LayerMask::NONE, |acc, &layer| acc | LayerMask::layer(layer))
    }

    /// Does this mask include the given layer index?
    pub fn contains_layer(self, index: u8) -> bool {
        (self.0 & LayerMask::layer(index).0) != 0
    }

    /// True when no layer is set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        LayerMask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for LayerMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
