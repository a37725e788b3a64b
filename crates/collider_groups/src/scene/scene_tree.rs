//! In-memory scene tree
//!
//! A small parent/child hierarchy of named nodes carrying colliders. Nodes and
//! colliders live in slot maps, so removing a node invalidates every handle
//! that pointed into its subtree.

use crate::foundation::collections::{ColliderId, HandleMap, NodeId};
use crate::foundation::math::Transform;
use crate::physics::ColliderShape;

use super::hierarchy::{ColliderComponent, SceneHierarchy};

/// Tag given to nodes that were never tagged
pub const UNTAGGED: &str = "Untagged";

/// Scene tree errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Node handle does not resolve
    #[error("Scene node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Collider handle does not resolve
    #[error("Collider not found: {0:?}")]
    ColliderNotFound(ColliderId),

    /// Reparenting would make a node its own ancestor
    #[error("Cannot parent {node:?} under its own descendant {new_parent:?}")]
    CycleDetected {
        /// Node being moved
        node: NodeId,
        /// Requested parent
        new_parent: NodeId,
    },
}

/// A node in the scene tree
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    tag: String,
    layer: u8,
    active: bool,
    local_transform: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    colliders: Vec<ColliderId>,
}

impl SceneNode {
    fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            tag: UNTAGGED.to_string(),
            layer: 0,
            active: true,
            local_transform: Transform::identity(),
            parent,
            children: Vec::new(),
            colliders: Vec::new(),
        }
    }

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Layer index
    pub fn layer(&self) -> u8 {
        self.layer
    }

    /// Local active flag (ignores ancestors)
    pub fn is_active_self(&self) -> bool {
        self.active
    }

    /// Transform relative to the parent
    pub fn local_transform(&self) -> &Transform {
        &self.local_transform
    }

    /// Parent node
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Attached colliders in attachment order
    pub fn colliders(&self) -> &[ColliderId] {
        &self.colliders
    }
}

/// Slot-map backed scene hierarchy
#[derive(Debug, Default)]
pub struct SceneTree {
    nodes: HandleMap<NodeId, SceneNode>,
    colliders: HandleMap<ColliderId, ColliderComponent>,
    roots: Vec<NodeId>,
}

impl SceneTree {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a top-level node
    pub fn create_root(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.nodes.insert(SceneNode::new(name, None));
        self.roots.push(id);
        id
    }

    /// Create a node under `parent`
    pub fn create_child(&mut self, parent: NodeId, name: impl Into<String>) -> Result<NodeId, SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::NodeNotFound(parent));
        }
        let id = self.nodes.insert(SceneNode::new(name, Some(parent)));
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Attach a collider to a node
    pub fn attach_collider(&mut self, node: NodeId, shape: ColliderShape) -> Result<ColliderId, SceneError> {
        if !self.nodes.contains_key(node) {
            return Err(SceneError::NodeNotFound(node));
        }
        let id = self.colliders.insert(ColliderComponent { node, shape });
        self.node_mut(node)?.colliders.push(id);
        Ok(id)
    }

    /// Detach and destroy a collider
    pub fn remove_collider(&mut self, id: ColliderId) -> Result<(), SceneError> {
        let collider = self.colliders.remove(id).ok_or(SceneError::ColliderNotFound(id))?;
        if let Some(node) = self.nodes.get_mut(collider.node) {
            node.colliders.retain(|&c| c != id);
        }
        Ok(())
    }

    /// Destroy a node, its descendants and every collider among them.
    ///
    /// Returns the number of nodes removed.
    pub fn remove_node(&mut self, id: NodeId) -> Result<usize, SceneError> {
        let parent = self.node(id).ok_or(SceneError::NodeNotFound(id))?.parent;
        self.detach(id, parent);

        let mut removed = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                for collider in node.colliders {
                    self.colliders.remove(collider);
                }
                stack.extend(node.children);
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Move a node under a new parent, or to the top level with `None`.
    /// The local transform is kept as is.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> Result<(), SceneError> {
        let old_parent = self.node(id).ok_or(SceneError::NodeNotFound(id))?.parent;

        if let Some(target) = new_parent {
            if !self.nodes.contains_key(target) {
                return Err(SceneError::NodeNotFound(target));
            }
            if self.is_ancestor_or_self(id, target) {
                return Err(SceneError::CycleDetected { node: id, new_parent: target });
            }
        }

        self.detach(id, old_parent);
        match new_parent {
            Some(target) => self.node_mut(target)?.children.push(id),
            None => self.roots.push(id),
        }
        self.node_mut(id)?.parent = new_parent;
        Ok(())
    }

    /// Rename a node
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), SceneError> {
        self.node_mut(id)?.name = name.into();
        Ok(())
    }

    /// Change a node's tag
    pub fn set_tag(&mut self, id: NodeId, tag: impl Into<String>) -> Result<(), SceneError> {
        self.node_mut(id)?.tag = tag.into();
        Ok(())
    }

    /// Change a node's layer index
    pub fn set_layer(&mut self, id: NodeId, layer: u8) -> Result<(), SceneError> {
        self.node_mut(id)?.layer = layer;
        Ok(())
    }

    /// Enable or disable a node (and, implicitly, its subtree)
    pub fn set_active(&mut self, id: NodeId, active: bool) -> Result<(), SceneError> {
        self.node_mut(id)?.active = active;
        Ok(())
    }

    /// Replace a node's local transform
    pub fn set_local_transform(&mut self, id: NodeId, transform: Transform) -> Result<(), SceneError> {
        self.node_mut(id)?.local_transform = transform;
        Ok(())
    }

    /// Resolve a node handle
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    /// True when the node and all of its ancestors are active
    pub fn is_active_in_hierarchy(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get(node_id) {
                Some(node) if node.active => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Top-level nodes in creation order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live colliders
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound(id))
    }

    fn detach(&mut self, id: NodeId, parent: Option<NodeId>) {
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent) => parent.children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }
}

impl SceneHierarchy for SceneTree {
    fn collect_colliders(&self, root: NodeId, include_inactive: bool) -> Vec<ColliderId> {
        let mut found = Vec::new();
        if !include_inactive && !self.is_active_in_hierarchy(root) {
            return found;
        }

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !include_inactive && !node.active {
                continue;
            }
            found.extend_from_slice(&node.colliders);
            // Reverse so children pop in insertion order
            stack.extend(node.children.iter().rev());
        }
        found
    }

    fn collider(&self, id: ColliderId) -> Option<&ColliderComponent> {
        self.colliders.get(id)
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.name.as_str())
    }

    fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.tag.as_str())
    }

    fn layer(&self, node: NodeId) -> Option<u8> {
        self.nodes.get(node).map(|n| n.layer)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn world_transform(&self, node: NodeId) -> Option<Transform> {
        let mut chain = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            let n = self.nodes.get(id)?;
            chain.push(n.local_transform);
            current = n.parent;
        }

        Some(
            chain
                .iter()
                .rev()
                .fold(Transform::identity(), |world, local| world.combine(local)),
        )
    }
}
