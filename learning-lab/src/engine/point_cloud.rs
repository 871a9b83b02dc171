//! Procedural point cloud for the measurement scene.
//!
//! Points fill a cylindrical shell around the origin and are coloured by height.
//! The mesh is regenerated only when the requested point count or seed changes.

use std::f32::consts::{PI, TAU};

use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToComponents;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use constants::scene_layout::{
    POINT_CLOUD_HEIGHT_SPAN, POINT_CLOUD_LIGHTNESS, POINT_CLOUD_MIN_RADIUS,
    POINT_CLOUD_RADIUS_SPAN, POINT_CLOUD_SATURATION,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Requested point cloud. A different `count` or `seed` triggers a rebuild.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub count: usize,
    pub seed: Option<u64>,
}

/// CPU-side vertex data. Colours are sRGB in [0, 1].
#[derive(Debug, Clone, Default)]
pub struct PointCloudBuffers {
    pub positions: Vec<[f32; 3]>,
    pub colours: Vec<[f32; 3]>,
}

impl PointCloudBuffers {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Hue follows height: the bottom of the shell maps to 0, the top to 1.
pub fn height_colour(y: f32) -> [f32; 3] {
    let half_span = POINT_CLOUD_HEIGHT_SPAN * 0.5;
    let hue = ((y + half_span) / POINT_CLOUD_HEIGHT_SPAN).clamp(0.0, 1.0);
    let colour = Color::hsl(hue * 360.0, POINT_CLOUD_SATURATION, POINT_CLOUD_LIGHTNESS).to_srgba();
    [colour.red, colour.green, colour.blue]
}

pub fn generate_point_cloud<R: Rng + ?Sized>(count: usize, rng: &mut R) -> PointCloudBuffers {
    let mut buffers = PointCloudBuffers {
        positions: Vec::with_capacity(count),
        colours: Vec::with_capacity(count),
    };

    for _ in 0..count {
        let r = rng.random::<f32>() * POINT_CLOUD_RADIUS_SPAN + POINT_CLOUD_MIN_RADIUS;
        let theta = rng.random::<f32>() * TAU;
        let phi = rng.random::<f32>() * PI;
        let y = (rng.random::<f32>() - 0.5) * POINT_CLOUD_HEIGHT_SPAN;

        let x = r * phi.sin() * theta.cos();
        let z = r * phi.sin() * theta.sin();

        buffers.positions.push([x, y, z]);
        buffers.colours.push(height_colour(y));
    }

    buffers
}

/// Point list mesh with linear vertex colours.
pub fn point_cloud_mesh(buffers: &PointCloudBuffers) -> Mesh {
    let colours: Vec<[f32; 4]> = buffers
        .colours
        .iter()
        .map(|&[r, g, b]| LinearRgba::from(Srgba::rgb(r, g, b)).to_f32_array())
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, buffers.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh
}

fn build_buffers(cloud: &PointCloud) -> PointCloudBuffers {
    match cloud.seed {
        Some(seed) => generate_point_cloud(cloud.count, &mut StdRng::seed_from_u64(seed)),
        None => generate_point_cloud(cloud.count, &mut rand::rng()),
    }
}

/// Parameters the attached mesh was generated from.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct BuiltPointCloud(PointCloud);

pub fn rebuild_point_clouds(
    mut commands: Commands,
    mut clouds: Query<
        (Entity, &PointCloud, &mut Mesh3d, Option<&BuiltPointCloud>),
        Changed<PointCloud>,
    >,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    for (entity, cloud, mut mesh, built) in &mut clouds {
        // Touched without a new count or seed
        if built.is_some_and(|built| built.0 == *cloud) {
            continue;
        }
        let buffers = build_buffers(cloud);
        debug!("Generated point cloud with {} points", buffers.len());
        mesh.0 = meshes.add(point_cloud_mesh(&buffers));
        commands.entity(entity).insert(BuiltPointCloud(cloud.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exactly_count_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let buffers = generate_point_cloud(1_000, &mut rng);
        assert_eq!(buffers.positions.len(), 1_000);
        assert_eq!(buffers.colours.len(), 1_000);

        assert!(generate_point_cloud(0, &mut rng).is_empty());
    }

    #[test]
    fn points_stay_inside_the_shell() {
        let mut rng = StdRng::seed_from_u64(42);
        let buffers = generate_point_cloud(5_000, &mut rng);
        let max_radius = POINT_CLOUD_MIN_RADIUS + POINT_CLOUD_RADIUS_SPAN;

        for (position, colour) in buffers.positions.iter().zip(&buffers.colours) {
            assert!(position.iter().all(|v| v.is_finite()));
            assert!(Vec2::new(position[0], position[2]).length() <= max_radius + 1e-3);
            assert!(position[1] >= -3.0 && position[1] < 3.0);
            assert!(colour.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn same_seed_gives_same_cloud() {
        let a = generate_point_cloud(100, &mut StdRng::seed_from_u64(3));
        let b = generate_point_cloud(100, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.colours, b.colours);
    }

    #[test]
    fn hue_runs_from_bottom_to_top() {
        // Bottom and top of the shell both land on red (hue 0 and 360).
        let bottom = height_colour(-3.0);
        assert!(bottom[0] > bottom[1] && bottom[0] > bottom[2]);
        // Middle of the shell is cyan.
        let middle = height_colour(0.0);
        assert!(middle[0] < middle[1] && middle[0] < middle[2]);
    }

    #[test]
    fn mesh_is_rebuilt_only_when_the_cloud_changes() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .add_systems(Update, rebuild_point_clouds);

        let cloud = app
            .world_mut()
            .spawn((
                PointCloud {
                    count: 64,
                    seed: Some(1),
                },
                Mesh3d::default(),
            ))
            .id();

        app.update();
        let first = app.world().get::<Mesh3d>(cloud).unwrap().0.clone();
        let meshes = app.world().resource::<Assets<Mesh>>();
        assert_eq!(
            meshes.get(&first).unwrap().count_vertices(),
            64
        );

        app.update();
        assert_eq!(app.world().get::<Mesh3d>(cloud).unwrap().0, first);

        // Mutable access with the same parameters keeps the mesh
        app.world_mut().get_mut::<PointCloud>(cloud).unwrap().count = 64;
        app.update();
        assert_eq!(app.world().get::<Mesh3d>(cloud).unwrap().0, first);
        assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 1);

        app.world_mut().get_mut::<PointCloud>(cloud).unwrap().count = 128;
        app.update();
        let second = app.world().get::<Mesh3d>(cloud).unwrap().0.clone();
        assert_ne!(second, first);
        let meshes = app.world().resource::<Assets<Mesh>>();
        assert_eq!(meshes.get(&second).unwrap().count_vertices(), 128);
    }
}
