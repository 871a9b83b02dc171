use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use constants::render_settings::PANO_AMBIENT_BRIGHTNESS;
use constants::scene_layout::{
    PANO_BOXES, PANO_GROUND_COLOUR, PANO_GROUND_HEIGHT, PANO_GROUND_SIZE,
    PANO_POINT_LIGHT_POSITION,
};

use crate::engine::assets::lab_manifest::LabManifest;
use crate::engine::core::app_state::LabTab;
use crate::engine::point_cloud::PointCloud;
use crate::engine::render::clip_material::{ClipMaterial, clip_material};
use crate::engine::scene::lifecycle::spawn_scene_root;
use crate::engine::scene::panorama::spawn_panorama;
use crate::tools::clipping::{ClipHeight, spawn_clip_indicator};
use crate::tools::ray::PickSurface;

const POINT_LIGHT_INTENSITY: f32 = 1_500_000.0;
const POINT_LIGHT_RANGE: f32 = 60.0;

pub fn spawn_pano_measure_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut clip_materials: ResMut<Assets<ClipMaterial>>,
    asset_server: Res<AssetServer>,
    manifest: Res<LabManifest>,
    clip_height: Res<ClipHeight>,
) {
    let root = spawn_scene_root(&mut commands, LabTab::PanoMeasure);

    commands.insert_resource(AmbientLight {
        brightness: PANO_AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        Name::new("Point light"),
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            // Shadow passes ignore the clip plane
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(PANO_POINT_LIGHT_POSITION),
        ChildOf(root),
    ));

    spawn_panorama(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        root,
        &manifest.panorama_path,
    );

    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(PANO_GROUND_SIZE, PANO_GROUND_SIZE),
        )),
        MeshMaterial3d(clip_materials.add(clip_material(StandardMaterial {
            base_color: PANO_GROUND_COLOUR,
            ..default()
        }))),
        Transform::from_xyz(0.0, PANO_GROUND_HEIGHT, 0.0),
        PickSurface::quad(PANO_GROUND_SIZE, PANO_GROUND_SIZE),
        ChildOf(root),
    ));

    for (index, scene_box) in PANO_BOXES.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Box {index}")),
            Mesh3d(meshes.add(Cuboid::from_size(scene_box.size))),
            MeshMaterial3d(clip_materials.add(clip_material(StandardMaterial {
                base_color: scene_box.colour,
                ..default()
            }))),
            Transform::from_translation(scene_box.centre),
            PickSurface::cuboid(scene_box.size),
            ChildOf(root),
        ));
    }

    // Mesh is generated by rebuild_point_clouds on the next update
    commands.spawn((
        Name::new("Point cloud"),
        PointCloud {
            count: manifest.point_cloud.count,
            seed: manifest.point_cloud.seed,
        },
        Mesh3d::default(),
        MeshMaterial3d(clip_materials.add(clip_material(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        }))),
        Transform::default(),
        NotShadowCaster,
        ChildOf(root),
    ));

    spawn_clip_indicator(
        &mut commands,
        &mut meshes,
        &mut materials,
        root,
        clip_height.value(),
    );
}
