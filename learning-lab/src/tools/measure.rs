use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::{
    DRAW_LINE_WIDTH, FIRST_MARKER_COLOUR, MEASURE_LINE_COLOUR, MEASURE_MARKER_RADIUS,
    MIN_DRAW_LINE_LENGTH, SECOND_MARKER_COLOUR,
};

use crate::engine::core::app_state::LabTab;
use crate::engine::render::clip_material::{ClipMaterial, clip_material};
use crate::engine::scene::lifecycle::LabSceneRoot;
use crate::tools::ray::{PickSurface, nearest_hit, projection_ray};
use crate::ui::pointer_over_ui;

/// Points kept by the tool. A new pick beyond this drops the oldest.
pub const MAX_MEASURE_POINTS: usize = 2;

/// A completed two-point measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub start: Vec3,
    pub end: Vec3,
    pub distance: f32,
}

/// Rolling window of the most recent picked points.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct MeasureTool {
    points: Vec<Vec3>,
}

impl MeasureTool {
    pub fn record(&mut self, point: Vec3) {
        self.points.push(point);
        if self.points.len() > MAX_MEASURE_POINTS {
            let excess = self.points.len() - MAX_MEASURE_POINTS;
            self.points.drain(..excess);
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Euclidean distance, only once two points exist.
    pub fn distance(&self) -> Option<f32> {
        self.current().map(|m| m.distance)
    }

    pub fn current(&self) -> Option<Measurement> {
        match self.points.as_slice() {
            [start, end] => Some(Measurement {
                start: *start,
                end: *end,
                distance: start.distance(*end),
            }),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Marker colour by pick order: first green, second red.
pub fn marker_colour(index: usize) -> Color {
    if index == 0 {
        FIRST_MARKER_COLOUR
    } else {
        SECOND_MARKER_COLOUR
    }
}

/// Marker spheres and the connecting line. Rebuilt from `MeasureTool` on change.
#[derive(Component)]
pub struct MeasureVisual;

// Input: each left press picks the nearest surface under the cursor
pub fn measure_tool_system(
    mut measure_tool: ResMut<MeasureTool>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Projection), With<Camera3d>>,
    surfaces: Query<(&GlobalTransform, &PickSurface)>,
    ui_interactions: Query<&Interaction>,
) {
    if !mouse.just_pressed(MouseButton::Left) || pointer_over_ui(&ui_interactions) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xform, projection)) = cameras.single() else {
        return;
    };
    let Some(ray) = projection_ray(cursor_pos, window.size(), projection, cam_xform) else {
        return;
    };

    // Nothing under the cursor leaves the state as it was
    let Some(hit) = nearest_hit(ray, surfaces.iter()) else {
        return;
    };

    measure_tool.record(hit);
    debug!("Measure pick at {hit}");

    if let Some(m) = measure_tool.current() {
        let payload = serde_json::json!({
            "start": m.start.to_array(),
            "end": m.end.to_array(),
            "distance": m.distance,
        });
        info!("measure_completed {payload}");
    }
}

// Renderer: clears previous visuals and rebuilds them from state
pub fn update_measure_render(
    mut commands: Commands,
    measure_tool: Res<MeasureTool>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ClipMaterial>>,
    roots: Query<(Entity, &LabSceneRoot)>,
    existing: Query<Entity, With<MeasureVisual>>,
) {
    if !measure_tool.is_changed() {
        return;
    }

    for e in &existing {
        commands.entity(e).despawn();
    }

    // Visuals live under the measurement scene so they clip and unmount with it
    let Some(root) = roots
        .iter()
        .find_map(|(entity, root)| (root.0 == LabTab::PanoMeasure).then_some(entity))
    else {
        return;
    };

    let marker_mesh = meshes.add(Sphere::new(MEASURE_MARKER_RADIUS));
    for (index, point) in measure_tool.points().iter().enumerate() {
        commands.spawn((
            Name::new(format!("Measure marker {index}")),
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(materials.add(clip_material(StandardMaterial {
                base_color: marker_colour(index),
                ..default()
            }))),
            Transform::from_translation(*point),
            NotShadowCaster,
            MeasureVisual,
            ChildOf(root),
        ));
    }

    let Some(measurement) = measure_tool.current() else {
        return;
    };
    if measurement.distance <= MIN_DRAW_LINE_LENGTH {
        return;
    }

    let dir = measurement.end - measurement.start;
    let midpoint = (measurement.start + measurement.end) * 0.5;
    let rot = Quat::from_rotation_arc(Vec3::X, dir.normalize());
    commands.spawn((
        Name::new("Measure line"),
        Mesh3d(meshes.add(Cuboid::new(
            measurement.distance,
            DRAW_LINE_WIDTH,
            DRAW_LINE_WIDTH,
        ))),
        MeshMaterial3d(materials.add(clip_material(StandardMaterial {
            base_color: MEASURE_LINE_COLOUR,
            unlit: true,
            ..default()
        }))),
        Transform::from_translation(midpoint).with_rotation(rot),
        NotShadowCaster,
        MeasureVisual,
        ChildOf(root),
    ));
}

/// Measurements never survive an unmount.
pub fn reset_measure_tool(mut measure_tool: ResMut<MeasureTool>) {
    measure_tool.clear();
}
