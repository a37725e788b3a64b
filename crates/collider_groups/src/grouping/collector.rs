//! Collider collection and grouping
//!
//! A [`ColliderCollector`] owns the flat list of colliders that passed the
//! filter and the group list built from them. Both are thrown away and
//! rebuilt by every [`ColliderCollector::rescan`]; only the per-group display
//! state survives, carried over by key.

use log::{debug, trace};

use crate::foundation::collections::{ColliderId, NodeId};
use crate::scene::SceneHierarchy;

use super::group::ColliderGroup;
use super::reconcile::GroupReconciler;
use super::settings::GroupingSettings;

/// Scans a subtree for colliders and groups them
#[derive(Debug, Clone)]
pub struct ColliderCollector {
    root: NodeId,
    settings: GroupingSettings,
    groups: Vec<ColliderGroup>,
    colliders: Vec<ColliderId>,
}

impl ColliderCollector {
    /// Create a collector scanning the subtree under `root`. Nothing is
    /// collected until the first [`rescan`](Self::rescan).
    pub fn new(root: NodeId, settings: GroupingSettings) -> Self {
        Self {
            root,
            settings,
            groups: Vec::new(),
            colliders: Vec::new(),
        }
    }

    /// Scanning root
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Current settings
    pub fn settings(&self) -> &GroupingSettings {
        &self.settings
    }

    /// Mutable settings. Changes take effect on the next rescan.
    pub fn settings_mut(&mut self) -> &mut GroupingSettings {
        &mut self.settings
    }

    /// Replace the settings and rescan immediately
    pub fn apply_settings<S: SceneHierarchy + ?Sized>(&mut self, settings: GroupingSettings, scene: &S) {
        self.settings = settings;
        self.rescan(scene);
    }

    /// Rebuild the collider list and the groups from the scene.
    ///
    /// Inactive branches are scanned too. Calling this repeatedly on an
    /// unchanged scene yields identical groups, members and order.
    pub fn rescan<S: SceneHierarchy + ?Sized>(&mut self, scene: &S) {
        let mut reconciler = GroupReconciler::from_previous(&self.groups);
        self.colliders.clear();
        self.groups.clear();

        let found = scene.collect_colliders(self.root, true);
        let total = found.len();

        for collider in found {
            if !self.settings.filter.passes(scene, collider) {
                trace!("Collider {collider:?} rejected by filter");
                continue;
            }

            let Some(key) = self.settings.mode.derive_key(
                scene,
                self.root,
                collider,
                &self.settings.layer_names,
            ) else {
                continue;
            };

            self.colliders.push(collider);
            reconciler.insert(key, collider);
        }

        self.groups = reconciler.finish();
        debug!(
            "Rescan by {:?}: {}/{} colliders in {} groups",
            self.settings.mode,
            self.colliders.len(),
            total,
            self.groups.len()
        );
    }

    /// Groups in first-seen order
    pub fn groups(&self) -> &[ColliderGroup] {
        &self.groups
    }

    /// Groups with editable display state
    pub fn groups_mut(&mut self) -> &mut [ColliderGroup] {
        &mut self.groups
    }

    /// Colliders that passed the filter, in discovery order
    pub fn colliders(&self) -> &[ColliderId] {
        &self.colliders
    }

    /// Look up a group by key
    pub fn group(&self, name: &str) -> Option<&ColliderGroup> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Look up a group by key for editing
    pub fn group_mut(&mut self, name: &str) -> Option<&mut ColliderGroup> {
        self.groups.iter_mut().find(|g| g.name() == name)
    }

    /// Groups flagged for drawing
    pub fn selected_groups(&self) -> impl Iterator<Item = &ColliderGroup> {
        self.groups.iter().filter(|g| g.is_selected)
    }

    /// Select or deselect every group
    pub fn set_all_selected(&mut self, selected: bool) {
        for group in &mut self.groups {
            group.is_selected = selected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::color::Color;
    use crate::grouping::{ColliderFilter, GroupDisplayState, GroupingMode};
    use crate::physics::ColliderShape;
    use crate::scene::SceneTree;

    /// root/A/B/{leaf1, leaf2}, root/A/C/leaf, root/solo
    fn scene() -> (SceneTree, NodeId, NodeId) {
        let mut scene = SceneTree::new();
        let root = scene.create_root("root");
        let a = scene.create_child(root, "A").unwrap();
        let b = scene.create_child(a, "B").unwrap();
        let c = scene.create_child(a, "C").unwrap();
        let shape = ColliderShape::sphere(1.0);
        for name in ["leaf1", "leaf2"] {
            let leaf = scene.create_child(b, name).unwrap();
            scene.attach_collider(leaf, shape).unwrap();
        }
        let leaf = scene.create_child(c, "leaf").unwrap();
        scene.set_tag(leaf, "Trigger").unwrap();
        scene.attach_collider(leaf, shape).unwrap();
        let solo = scene.create_child(root, "solo").unwrap();
        scene.set_tag(solo, "Solid").unwrap();
        scene.attach_collider(solo, shape).unwrap();
        (scene, root, c)
    }

    fn names(collector: &ColliderCollector) -> Vec<&str> {
        collector.groups().iter().map(ColliderGroup::name).collect()
    }

    #[test]
    fn test_rescan_groups_by_subgroup() {
        let (scene, root, _) = scene();
        let mut collector = ColliderCollector::new(root, GroupingSettings::default());
        collector.rescan(&scene);

        assert_eq!(names(&collector), ["A/B", "A/C", "solo"]);
        assert_eq!(collector.group("A/B").unwrap().len(), 2);
        assert_eq!(collector.colliders().len(), 4);
    }

    #[test]
    fn test_rescan_is_deterministic() {
        let (scene, root, _) = scene();
        let mut collector = ColliderCollector::new(root, GroupingSettings::default());
        collector.rescan(&scene);
        let first = collector.groups().to_vec();
        collector.rescan(&scene);

        assert_eq!(collector.groups(), first.as_slice());
    }

    #[test]
    fn test_filtered_collider_is_nowhere() {
        let (scene, root, _) = scene();
        let settings = GroupingSettings::default()
            .with_filter(ColliderFilter::default().with_tags(["Untagged", "Solid"]));
        let mut collector = ColliderCollector::new(root, settings);
        collector.rescan(&scene);

        assert!(collector.group("A/C").is_none());
        assert_eq!(collector.colliders().len(), 3);
    }

    #[test]
    fn test_display_state_survives_rescan() {
        let (mut scene, root, c) = scene();
        let mut collector = ColliderCollector::new(root, GroupingSettings::default());
        collector.rescan(&scene);

        let group = collector.group_mut("A/B").unwrap();
        group.is_selected = true;
        group.gizmo_color = Color::RED;
        collector.group_mut("A/C").unwrap().is_selected = true;

        scene.remove_node(c).unwrap();
        collector.rescan(&scene);

        let group = collector.group("A/B").unwrap();
        assert!(group.is_selected);
        assert_eq!(group.gizmo_color, Color::RED);
        assert!(collector.group("A/C").is_none());
        assert_eq!(collector.groups().len(), 2);
    }

    #[test]
    fn test_dropped_key_comes_back_with_defaults() {
        let (mut scene, root, c) = scene();
        let mut collector = ColliderCollector::new(root, GroupingSettings::default());
        collector.rescan(&scene);
        collector.group_mut("A/C").unwrap().is_selected = true;

        scene.set_name(c, "C-renamed").unwrap();
        collector.rescan(&scene);
        assert!(collector.group("A/C").is_none());

        scene.set_name(c, "C").unwrap();
        collector.rescan(&scene);
        assert!(!collector.group("A/C").unwrap().is_selected);
    }

    #[test]
    fn test_new_key_defaults() {
        let (scene, root, _) = scene();
        let mut collector = ColliderCollector::new(root, GroupingSettings::default());
        collector.rescan(&scene);

        for group in collector.groups() {
            assert_eq!(group.display_state(), GroupDisplayState::default());
        }
    }

    #[test]
    fn test_apply_settings_regroups() {
        let (scene, root, _) = scene();
        let mut collector = ColliderCollector::new(root, GroupingSettings::default());
        collector.rescan(&scene);

        collector.apply_settings(GroupingSettings::new(GroupingMode::ByTag), &scene);
        assert_eq!(names(&collector), ["Untagged", "Trigger", "Solid"]);
    }

    #[test]
    fn test_empty_scene() {
        let mut scene = SceneTree::new();
        let root = scene.create_root("root");
        let mut collector = ColliderCollector::new(root, GroupingSettings::default());
        collector.rescan(&scene);

        assert!(collector.groups().is_empty());
        assert!(collector.colliders().is_empty());
    }

    #[test]
    fn test_select_all() {
        let (scene, root, _) = scene();
        let mut collector = ColliderCollector::new(root, GroupingSettings::default());
        collector.rescan(&scene);

        collector.set_all_selected(true);
        assert_eq!(collector.selected_groups().count(), 3);
        collector.set_all_selected(false);
        assert_eq!(collector.selected_groups().count(), 0);
    }
}
