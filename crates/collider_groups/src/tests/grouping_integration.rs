//! End-to-end grouping and drawing over the nested "Group → subgroup →
//! collider" layout

use crate::prelude::*;
use approx::assert_relative_eq;

struct Level {
    scene: SceneTree,
    root: NodeId,
    group_1: NodeId,
    door: NodeId,
}

/// ```text
/// Colliders
/// ├── Group 1
/// │   ├── group 1.1   box, sphere, capsule
/// │   └── group 1.2   (inactive) box
/// └── Group 2
///     └── group 2.1   door [Trigger, layer 2]
/// ```
fn level() -> Level {
    let mut scene = SceneTree::new();
    let root = scene.create_root("Colliders");
    scene
        .set_local_transform(root, Transform::from_position(Vec3::new(0.0, 10.0, 0.0)))
        .unwrap();

    let group_1 = scene.create_child(root, "Group 1").unwrap();
    let sub_11 = scene.create_child(group_1, "group 1.1").unwrap();
    let shapes = [
        ColliderShape::cuboid(Vec3::new(1.0, 1.0, 1.0)),
        ColliderShape::sphere(0.5),
        ColliderShape::capsule(0.25, 2.0),
    ];
    for (i, shape) in shapes.into_iter().enumerate() {
        let leaf = scene.create_child(sub_11, format!("collider {}", i + 1)).unwrap();
        scene.set_tag(leaf, "Solid").unwrap();
        scene
            .set_local_transform(leaf, Transform::from_position(Vec3::new(i as f32, 0.0, 0.0)))
            .unwrap();
        scene.attach_collider(leaf, shape).unwrap();
    }

    let sub_12 = scene.create_child(group_1, "group 1.2").unwrap();
    let hidden = scene.create_child(sub_12, "collider 1").unwrap();
    scene.set_tag(hidden, "Solid").unwrap();
    scene
        .attach_collider(hidden, ColliderShape::cuboid(Vec3::new(2.0, 2.0, 2.0)))
        .unwrap();
    scene.set_active(sub_12, false).unwrap();

    let group_2 = scene.create_child(root, "Group 2").unwrap();
    let sub_21 = scene.create_child(group_2, "group 2.1").unwrap();
    let door = scene.create_child(sub_21, "door").unwrap();
    scene.set_tag(door, "Trigger").unwrap();
    scene.set_layer(door, 2).unwrap();
    scene.attach_collider(door, ColliderShape::sphere(1.0)).unwrap();

    Level { scene, root, group_1, door }
}

fn group_names(collector: &ColliderCollector) -> Vec<String> {
    collector.groups().iter().map(|g| g.name().to_string()).collect()
}

#[test]
fn test_inactive_branches_are_grouped() {
    let level = level();
    let mut collector = ColliderCollector::new(level.root, GroupingSettings::default());
    collector.rescan(&level.scene);

    assert_eq!(
        group_names(&collector),
        ["Group 1/group 1.1", "Group 1/group 1.2", "Group 2/group 2.1"]
    );
    assert_eq!(collector.group("Group 1/group 1.1").unwrap().len(), 3);
    assert_eq!(collector.colliders().len(), 5);
}

#[test]
fn test_tag_filter_excludes_trigger_everywhere() {
    let level = level();
    let settings = GroupingSettings::default().with_filter(ColliderFilter::default().with_tags(["Solid"]));
    let mut collector = ColliderCollector::new(level.root, settings);
    collector.rescan(&level.scene);

    assert!(collector.group("Group 2/group 2.1").is_none());
    for &id in collector.colliders() {
        let node = level.scene.collider_node(id).unwrap();
        assert_ne!(node, level.door);
    }
}

#[test]
fn test_layer_mode_and_filter() {
    let level = level();
    let settings = GroupingSettings::new(GroupingMode::ByLayer)
        .with_layer_name(2, "Interactables")
        .with_filter(ColliderFilter::default().with_layers(LayerMask::layer(2)));
    let mut collector = ColliderCollector::new(level.root, settings);
    collector.rescan(&level.scene);

    assert_eq!(group_names(&collector), ["Interactables"]);
}

#[test]
fn test_state_round_trip_through_settings_change() {
    let level = level();
    let mut collector = ColliderCollector::new(level.root, GroupingSettings::default());
    collector.rescan(&level.scene);
    {
        let group = collector.group_mut("Group 1/group 1.1").unwrap();
        group.is_selected = true;
        group.gizmo_color = Color::RED;
        group.show_solid = false;
    }

    // Switching mode away and back drops the key in between
    collector.apply_settings(GroupingSettings::new(GroupingMode::ByTag), &level.scene);
    assert_eq!(group_names(&collector), ["Solid", "Trigger"]);
    collector.apply_settings(GroupingSettings::default(), &level.scene);
    assert!(!collector.group("Group 1/group 1.1").unwrap().is_selected);

    let group = collector.group_mut("Group 1/group 1.1").unwrap();
    group.is_selected = true;
    group.gizmo_color = Color::RED;
    collector.rescan(&level.scene);
    collector.rescan(&level.scene);

    let group = collector.group("Group 1/group 1.1").unwrap();
    assert!(group.is_selected);
    assert_eq!(group.gizmo_color, Color::RED);
    assert!(group.show_wireframe);
}

#[test]
fn test_draw_places_gizmos_in_world_space() {
    let level = level();
    let mut collector = ColliderCollector::new(level.root, GroupingSettings::default());
    collector.rescan(&level.scene);
    let group = collector.group_mut("Group 1/group 1.1").unwrap();
    group.is_selected = true;
    group.show_solid = false;
    group.gizmo_color = Color::CYAN;

    let mut renderer = ColliderGizmoRenderer::new();
    renderer.show();
    let mut list = DebugDrawList::new();
    let issued = renderer.draw_collector(&collector, &level.scene, &mut list);

    assert_eq!(issued, 3);
    assert!(list.shapes().iter().all(|s| s.color() == Color::CYAN && s.is_wireframe()));
    assert_relative_eq!(list.shapes()[2].world_center(), Vec3::new(2.0, 10.0, 0.0));
}

#[test]
fn test_draw_tolerates_removed_nodes() {
    let mut level = level();
    let mut collector = ColliderCollector::new(level.root, GroupingSettings::default());
    collector.rescan(&level.scene);
    collector.set_all_selected(true);

    level.scene.remove_node(level.group_1).unwrap();

    let mut renderer = ColliderGizmoRenderer::new();
    renderer.show();
    let mut list = DebugDrawList::new();
    let issued = renderer.draw_collector(&collector, &level.scene, &mut list);

    // Only the door survives: wireframe + solid sphere
    assert_eq!(issued, 2);
    assert_eq!(collector.groups().len(), 3);

    collector.rescan(&level.scene);
    assert_eq!(group_names(&collector), ["Group 2/group 2.1"]);
    assert!(collector.group("Group 2/group 2.1").unwrap().is_selected);
}
