//! Tag and layer filtering of colliders

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::foundation::collections::ColliderId;
use crate::physics::LayerMask;
use crate::scene::SceneHierarchy;

/// Tag allow-list and layer mask a collider must satisfy to be grouped.
///
/// Each check only applies when its `use_*` flag is set; with both flags off
/// every collider passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderFilter {
    /// Enable the tag allow-list
    pub use_tag_filter: bool,
    /// Tags accepted when the tag filter is on
    pub allowed_tags: BTreeSet<String>,
    /// Enable the layer mask
    pub use_layer_filter: bool,
    /// Layers accepted when the layer filter is on
    pub allowed_layers: LayerMask,
}

impl Default for ColliderFilter {
    fn default() -> Self {
        Self {
            use_tag_filter: false,
            allowed_tags: BTreeSet::new(),
            use_layer_filter: false,
            allowed_layers: LayerMask::ALL,
        }
    }
}

impl ColliderFilter {
    /// Filter that accepts everything
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Builder pattern: enable the tag filter with the given allow-list
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.use_tag_filter = true;
        self.allowed_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder pattern: enable the layer filter with the given mask
    pub fn with_layers(mut self, mask: LayerMask) -> Self {
        self.use_layer_filter = true;
        self.allowed_layers = mask;
        self
    }

    /// Check raw tag/layer values against the filter
    pub fn accepts(&self, tag: &str, layer: u8) -> bool {
        if self.use_tag_filter && !self.allowed_tags.contains(tag) {
            return false;
        }

        if self.use_layer_filter && !self.allowed_layers.contains_layer(layer) {
            return false;
        }

        true
    }

    /// Does the collider pass the filter? Colliders whose node no longer
    /// resolves never pass.
    pub fn passes<S: SceneHierarchy + ?Sized>(&self, scene: &S, collider: ColliderId) -> bool {
        let Some(node) = scene.collider_node(collider) else {
            return false;
        };
        match (scene.tag(node), scene.layer(node)) {
            (Some(tag), Some(layer)) => self.accepts(tag, layer),
            _ => false,
        }
    }
}
