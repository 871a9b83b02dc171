/// Flat line-list grid helper with a highlighted centre cross
use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToComponents;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use constants::scene_layout::{GRID_CENTRE_LINE_COLOUR, GRID_HELPER_DIVISIONS, GRID_LINE_COLOUR};

// Lifted off the ground plane to avoid z-fighting
const GRID_LIFT: f32 = 0.001;

#[derive(Component)]
pub struct GroundGrid;

/// Line endpoints and vertex colours of a square grid of `size` split into `divisions`.
///
/// Produces `divisions + 1` lines along each axis. The line through the origin
/// uses `centre` when `divisions` is even.
pub fn grid_line_vertices(
    size: f32,
    divisions: u32,
    centre: Color,
    line: Color,
) -> (Vec<[f32; 3]>, Vec<[f32; 4]>) {
    let half = size * 0.5;
    let step = size / divisions.max(1) as f32;
    let centre_index = divisions / 2;
    let centre = centre.to_linear().to_f32_array();
    let line = line.to_linear().to_f32_array();

    let line_count = (divisions as usize + 1) * 4;
    let mut positions = Vec::with_capacity(line_count);
    let mut colours = Vec::with_capacity(line_count);

    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        // Line along X at z = k, then along Z at x = k
        positions.extend_from_slice(&[
            [-half, 0.0, k],
            [half, 0.0, k],
            [k, 0.0, -half],
            [k, 0.0, half],
        ]);
        let colour = if i == centre_index { centre } else { line };
        colours.extend_from_slice(&[colour; 4]);
    }

    (positions, colours)
}

pub fn grid_helper_mesh(size: f32, divisions: u32) -> Mesh {
    let (positions, colours) =
        grid_line_vertices(size, divisions, GRID_CENTRE_LINE_COLOUR, GRID_LINE_COLOUR);

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh
}

/// Spawn the grid helper under `parent`.
pub fn spawn_grid_helper(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    parent: Entity,
    size: f32,
) -> Entity {
    // Vertex colours carry the line colours, the material only switches off lighting
    let grid_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Name::new("Grid helper"),
            Mesh3d(meshes.add(grid_helper_mesh(size, GRID_HELPER_DIVISIONS))),
            MeshMaterial3d(grid_material),
            Transform::from_xyz(0.0, GRID_LIFT, 0.0),
            NoFrustumCulling,
            GroundGrid,
            ChildOf(parent),
        ))
        .id()
}
