//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generational handle to a node in a scene hierarchy.
    ///
    /// A handle to a removed node never resolves again, even if its slot
    /// is reused by a newer node.
    pub struct NodeId;

    /// Generational handle to a collider attached to a scene node
    pub struct ColliderId;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;
