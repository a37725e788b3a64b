//! Grouping configuration edited by the host inspector

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::physics::LAYER_COUNT;

use super::filter::ColliderFilter;
use super::key::GroupingMode;

/// Settings a collector scans with.
///
/// Loadable from TOML or RON:
///
/// ```toml
/// mode = "ByTag"
/// layer_names = ["Default", "TransparentFX"]
///
/// [filter]
/// use_tag_filter = true
/// allowed_tags = ["Solid", "Ground"]
/// use_layer_filter = false
/// allowed_layers = 4294967295
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingSettings {
    /// Key policy
    pub mode: GroupingMode,
    /// Tag/layer filter
    pub filter: ColliderFilter,
    /// Optional layer names indexed by layer, used for `ByLayer` keys
    pub layer_names: Vec<String>,
}

impl GroupingSettings {
    /// Create settings with the given mode and an accept-all filter
    pub fn new(mode: GroupingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Builder pattern: Set the filter
    pub fn with_filter(mut self, filter: ColliderFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Builder pattern: Name a layer
    pub fn with_layer_name(mut self, layer: u8, name: impl Into<String>) -> Self {
        let index = usize::from(layer);
        if self.layer_names.len() <= index {
            self.layer_names.resize(index + 1, String::new());
        }
        self.layer_names[index] = name.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.layer_names.len() > usize::from(LAYER_COUNT) {
            return Err(format!(
                "{} layer names given, at most {} layers exist",
                self.layer_names.len(),
                LAYER_COUNT
            ));
        }
        Ok(())
    }
}

impl Config for GroupingSettings {}
