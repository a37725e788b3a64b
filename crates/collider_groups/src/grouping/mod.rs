//! Collider grouping engine
//!
//! ```text
//! SceneHierarchy ─→ ColliderFilter ─→ GroupingMode::derive_key ─→ GroupReconciler
//!                          (driven by ColliderCollector::rescan)
//! ```

pub mod collector;
pub mod filter;
pub mod group;
pub mod key;
pub mod reconcile;
pub mod settings;

pub use collector::ColliderCollector;
pub use filter::ColliderFilter;
pub use group::{ColliderGroup, GroupDisplayState};
pub use key::{layer_key, parent_name_key, GroupingMode};
pub use reconcile::GroupReconciler;
pub use settings::GroupingSettings;
