use bevy::prelude::*;
use constants::render_settings::GLTF_AMBIENT_BRIGHTNESS;

use crate::engine::assets::lab_manifest::LabManifest;
use crate::engine::core::app_state::LabTab;
use crate::engine::loading::model_loader::spawn_model;
use crate::engine::scene::lifecycle::spawn_scene_root;
use crate::engine::scene::panorama::spawn_panorama;

pub fn spawn_gltf_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    manifest: Res<LabManifest>,
) {
    let root = spawn_scene_root(&mut commands, LabTab::Gltf);

    // Stands in for a sky/ground hemisphere light
    commands.insert_resource(AmbientLight {
        brightness: GLTF_AMBIENT_BRIGHTNESS,
        ..default()
    });

    spawn_panorama(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        root,
        &manifest.panorama_path,
    );

    spawn_model(&mut commands, &asset_server, root, &manifest.model_path);
}
