//! Rebuilding a group list while keeping display state by key

use std::collections::HashMap;

use log::debug;

use crate::foundation::collections::ColliderId;

use super::group::{ColliderGroup, GroupDisplayState};

/// Builds a fresh group list from `(key, collider)` pairs.
///
/// Display state of the previous list is snapshotted by value when the
/// reconciler is created. A group created for a key that existed before
/// takes that key's state, any other key starts from the defaults. Keys
/// that are never inserted again simply disappear.
#[derive(Debug, Default)]
pub struct GroupReconciler {
    previous: HashMap<String, GroupDisplayState>,
    groups: Vec<ColliderGroup>,
    index: HashMap<String, usize>,
    restored: usize,
}

impl GroupReconciler {
    /// Start a rebuild, snapshotting the display state of `previous`
    pub fn from_previous(previous: &[ColliderGroup]) -> Self {
        Self {
            previous: previous
                .iter()
                .map(|group| (group.name().to_string(), group.display_state()))
                .collect(),
            ..Self::default()
        }
    }

    /// Add a collider to the group for `key`, creating it on first sight
    pub fn insert(&mut self, key: String, collider: ColliderId) {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let state = match self.previous.get(&key) {
                    Some(&state) => {
                        self.restored += 1;
                        state
                    }
                    None => GroupDisplayState::default(),
                };
                let slot = self.groups.len();
                self.index.insert(key.clone(), slot);
                self.groups.push(ColliderGroup::new(key, state));
                slot
            }
        };
        self.groups[slot].push(collider);
    }

    /// Finish the rebuild, returning groups in first-seen order
    pub fn finish(self) -> Vec<ColliderGroup> {
        debug!(
            "Reconciled {} groups ({} restored, {} dropped)",
            self.groups.len(),
            self.restored,
            self.previous.len() - self.restored
        );
        self.groups
    }
}
