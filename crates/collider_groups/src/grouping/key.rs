//! Grouping key derivation
//!
//! The key decides which group a collider lands in. With the default
//! [`GroupingMode::ByParentName`] the scene is expected to follow the
//! "Group → subgroup → collider" layout:
//!
//! ```text
//! root (scanning node)
//! ├── Group 1
//! │   ├── group 1.1
//! │   │   ├── collider 1
//! │   │   └── collider 2
//! │   └── group 1.2
//! │       └── collider 1
//! └── Group 2
//!     └── ...
//! ```
//!
//! Every collider under `group 1.1` gets the key `"Group 1/group 1.1"`.

use serde::{Deserialize, Serialize};

use crate::foundation::collections::{ColliderId, NodeId};
use crate::scene::SceneHierarchy;

/// Policy used to compute a collider's group key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroupingMode {
    /// Key from the names of the node and its ancestors below the scanning root
    #[default]
    ByParentName,
    /// Key is the node tag
    ByTag,
    /// Key is the layer name, or the layer index when the layer is unnamed
    ByLayer,
}

impl GroupingMode {
    /// Compute the group key of `collider`, relative to the scanning `root`.
    ///
    /// Returns `None` only when the collider or its node no longer resolves.
    pub fn derive_key<S: SceneHierarchy + ?Sized>(
        self,
        scene: &S,
        root: NodeId,
        collider: ColliderId,
        layer_names: &[String],
    ) -> Option<String> {
        let node = scene.collider_node(collider)?;

        match self {
            GroupingMode::ByTag => scene.tag(node).map(str::to_string),
            GroupingMode::ByLayer => scene.layer(node).map(|layer| layer_key(layer, layer_names)),
            GroupingMode::ByParentName => {
                let own = scene.name(node)?;
                let parent = scene.parent(node).filter(|&p| p != root);
                let grandparent = parent
                    .and_then(|p| scene.parent(p))
                    .filter(|&g| g != root);

                Some(parent_name_key(
                    own,
                    parent.and_then(|p| scene.name(p)),
                    grandparent.and_then(|g| scene.name(g)),
                ))
            }
        }
    }
}

/// Key rule for [`GroupingMode::ByParentName`].
///
/// `parent` and `grandparent` must already be `None` when the ancestor is
/// missing or is the scanning root. A grandparent replaces the whole key with
/// `grandparent/parent`, dropping the node's own name, so all leaves of one
/// subgroup share a key.
pub fn parent_name_key(own: &str, parent: Option<&str>, grandparent: Option<&str>) -> String {
    match (parent, grandparent) {
        (Some(parent), Some(grandparent)) => format!("{grandparent}/{parent}"),
        (Some(parent), None) => format!("{parent}/{own}"),
        (None, _) => own.to_string(),
    }
}

/// Key rule for [`GroupingMode::ByLayer`]. Empty names count as unnamed.
pub fn layer_key(layer: u8, layer_names: &[String]) -> String {
    match layer_names.get(usize::from(layer)) {
        Some(name) if !name.is_empty() => name.clone(),
        _ => layer.to_string(),
    }
}
