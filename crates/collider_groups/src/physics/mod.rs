//! Collider shapes and collision layers

pub mod collision_layers;
pub mod shape;

pub use collision_layers::{LayerMask, LAYER_COUNT};
pub use shape::{CapsuleDirection, ColliderShape};
