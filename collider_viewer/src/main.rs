//! Collider group viewer
//!
//! Builds a sample level laid out as "Group → subgroup → collider", groups it
//! with settings read from an optional `.toml`/`.ron` file, and prints the
//! gizmos one frame would draw.
//!
//! ```text
//! collider_viewer [settings.toml]
//! ```

use collider_groups::foundation::logging;
use collider_groups::prelude::*;
use log::info;

#[derive(thiserror::Error, Debug)]
enum ViewerError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build scene: {0}")]
    Scene(#[from] SceneError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

fn build_level() -> Result<(SceneTree, NodeId), SceneError> {
    let mut scene = SceneTree::new();
    let root = scene.create_root("Level Colliders");

    for g in 1..=2 {
        let group = scene.create_child(root, format!("Group {g}"))?;
        scene.set_local_transform(group, Transform::from_position(Vec3::new(g as f32 * 10.0, 0.0, 0.0)))?;

        for s in 1..=2 {
            let subgroup = scene.create_child(group, format!("group {g}.{s}"))?;
            scene.set_local_transform(subgroup, Transform::from_position(Vec3::new(0.0, 0.0, s as f32 * 4.0)))?;

            for c in 1..=3 {
                let leaf = scene.create_child(subgroup, format!("gameobject collider {c}"))?;
                scene.set_local_transform(leaf, Transform::from_position(Vec3::new(c as f32, 0.0, 0.0)))?;
                let shape = match c {
                    1 => ColliderShape::cuboid(Vec3::new(1.0, 2.0, 1.0)),
                    2 => ColliderShape::sphere(0.75),
                    _ => ColliderShape::capsule(0.4, 1.8),
                };
                scene.attach_collider(leaf, shape)?;
                if s == 2 {
                    scene.set_tag(leaf, "Trigger")?;
                    scene.set_layer(leaf, 2)?;
                }
            }
        }
    }

    Ok((scene, root))
}

fn load_settings() -> Result<GroupingSettings, ViewerError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading grouping settings from {path}");
            GroupingSettings::load_from_file(&path)?
        }
        None => GroupingSettings::default(),
    };
    settings.validate().map_err(ViewerError::InvalidSettings)?;
    Ok(settings)
}

fn run() -> Result<(), ViewerError> {
    let settings = load_settings()?;
    let (scene, root) = build_level()?;
    info!(
        "Scene has {} nodes and {} colliders",
        scene.node_count(),
        scene.collider_count()
    );

    let mut collector = ColliderCollector::new(root, settings);
    collector.rescan(&scene);

    let palette = [Color::GREEN, Color::RED, Color::BLUE, Color::YELLOW, Color::CYAN];
    for (group, color) in collector.groups_mut().iter_mut().zip(palette.iter().cycle()) {
        group.is_selected = true;
        group.gizmo_color = *color;
    }

    for group in collector.groups() {
        info!("Group '{}': {} colliders", group.name(), group.len());
    }

    let mut renderer = ColliderGizmoRenderer::new();
    renderer.show();
    let mut draw_list = DebugDrawList::new();
    let issued = renderer.draw_collector(&collector, &scene, &mut draw_list);
    info!("Frame issued {issued} gizmo primitives");

    for shape in draw_list.shapes() {
        let center = shape.world_center();
        let kind = match shape {
            DebugShape::Box { .. } => "box",
            DebugShape::Sphere { .. } => "sphere",
        };
        let style = if shape.is_wireframe() { "wire" } else { "solid" };
        info!(
            "  {style} {kind} at ({:.2}, {:.2}, {:.2})",
            center.x, center.y, center.z
        );
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level("info");
    run()?;
    Ok(())
}
