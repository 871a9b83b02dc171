use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use constants::render_settings::PANORAMA_RADIUS;

#[derive(Component)]
pub struct PanoramaBackdrop;

/// Equirectangular image on an inside-out sphere around the origin.
pub fn spawn_panorama(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    parent: Entity,
    image_path: &str,
) -> Entity {
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(image_path.to_string())),
        unlit: true,
        // Seen from inside
        cull_mode: None,
        ..default()
    });

    commands
        .spawn((
            Name::new("Panorama"),
            PanoramaBackdrop,
            Mesh3d(meshes.add(Sphere::new(PANORAMA_RADIUS).mesh().uv(64, 32))),
            MeshMaterial3d(material),
            // Mirror so the image reads left-to-right from inside
            Transform::from_scale(Vec3::new(-1.0, 1.0, 1.0)),
            NotShadowCaster,
            NotShadowReceiver,
            ChildOf(parent),
        ))
        .id()
}
