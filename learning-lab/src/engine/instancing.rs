//! Animated grid of boxes sharing one mesh and one material.
//!
//! Every cell carries its index; its transform is a pure function of the
//! time since the scene mounted and that index, so frames are reproducible.
//! Shared handles let the renderer batch all cells into instanced draws.

use bevy::prelude::*;
use constants::scene_layout::{
    INSTANCE_BOB_AMPLITUDE, INSTANCE_BOB_PHASE, INSTANCE_BOX_SIZE, INSTANCE_COLOUR,
    INSTANCE_METALLIC, INSTANCE_ROUGHNESS, INSTANCE_SPIN_PHASE, INSTANCE_SPIN_RATE,
};

use crate::engine::assets::lab_manifest::InstancedGridSettings;

/// Grid dimensions plus the elapsed time at which the grid was mounted.
#[derive(Component, Debug, Clone, Copy)]
pub struct InstancedGrid {
    pub layout: InstancedGridSettings,
    pub mounted_at: f32,
}

/// Cell index of one instance inside its `InstancedGrid` parent.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridInstance(pub usize);

/// Transform of cell `index` at `t` seconds after mount.
pub fn instance_transform(t: f32, index: usize, layout: &InstancedGridSettings) -> Transform {
    let columns = layout.columns.max(1) as usize;
    let column = (index % columns) as f32;
    let row = (index / columns) as f32;
    let x_offset = (layout.columns as f32 - 1.0) * 0.5;
    let z_offset = (layout.rows as f32 - 1.0) * 0.5;

    let i = index as f32;
    let y = (t + i * INSTANCE_BOB_PHASE).sin() * INSTANCE_BOB_AMPLITUDE;
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        INSTANCE_SPIN_RATE.x * t + i * INSTANCE_SPIN_PHASE,
        INSTANCE_SPIN_RATE.y * t + i * INSTANCE_SPIN_PHASE,
        0.0,
    );

    Transform::from_xyz(
        (column - x_offset) * layout.spacing,
        y,
        (row - z_offset) * layout.spacing,
    )
    .with_rotation(rotation)
}

/// Spawn the grid under `parent`. All cells share one mesh and one material handle.
pub fn spawn_instanced_grid(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    parent: Entity,
    layout: InstancedGridSettings,
    mounted_at: f32,
) -> Entity {
    let mesh = meshes.add(Cuboid::from_size(INSTANCE_BOX_SIZE));
    let material = materials.add(StandardMaterial {
        base_color: INSTANCE_COLOUR,
        metallic: INSTANCE_METALLIC,
        perceptual_roughness: INSTANCE_ROUGHNESS,
        ..default()
    });

    let grid = commands
        .spawn((
            Name::new("Instanced grid"),
            InstancedGrid { layout, mounted_at },
            Transform::default(),
            Visibility::default(),
            ChildOf(parent),
        ))
        .id();

    let Some(count) = layout.cell_count() else {
        warn!(
            "Instanced grid of {}x{} cells is too large, skipping",
            layout.columns, layout.rows
        );
        return grid;
    };
    for index in 0..count {
        commands.spawn((
            GridInstance(index),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            instance_transform(0.0, index, &layout),
            ChildOf(grid),
        ));
    }

    debug!("Spawned instanced grid with {count} cells");
    grid
}

pub fn animate_instanced_grid(
    time: Res<Time>,
    grids: Query<&InstancedGrid>,
    mut instances: Query<(&GridInstance, &ChildOf, &mut Transform)>,
) {
    let now = time.elapsed_secs();
    for (instance, child_of, mut transform) in &mut instances {
        let Ok(grid) = grids.get(child_of.parent()) else {
            continue;
        };
        *transform = instance_transform(now - grid.mounted_at, instance.0, &grid.layout);
    }
}
