use bevy::prelude::*;
use constants::render_settings::PBR_AMBIENT_BRIGHTNESS;
use constants::scene_layout::{PBR_GROUND_COLOUR, PBR_GROUND_SIZE, PBR_SUN_POSITION};

use crate::engine::assets::lab_manifest::LabManifest;
use crate::engine::core::app_state::LabTab;
use crate::engine::instancing::spawn_instanced_grid;
use crate::engine::scene::grid::spawn_grid_helper;
use crate::engine::scene::lifecycle::spawn_scene_root;

pub fn spawn_pbr_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    manifest: Res<LabManifest>,
    time: Res<Time>,
) {
    let root = spawn_scene_root(&mut commands, LabTab::Pbr);

    commands.insert_resource(AmbientLight {
        brightness: PBR_AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(PBR_SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        ChildOf(root),
    ));

    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(PBR_GROUND_SIZE, PBR_GROUND_SIZE),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: PBR_GROUND_COLOUR,
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
        ChildOf(root),
    ));

    spawn_grid_helper(
        &mut commands,
        &mut meshes,
        &mut materials,
        root,
        PBR_GROUND_SIZE,
    );

    spawn_instanced_grid(
        &mut commands,
        &mut meshes,
        &mut materials,
        root,
        manifest.instanced_grid,
        time.elapsed_secs(),
    );
}
