use bevy::prelude::*;

/// Thickness of the cuboid drawn between two measurement points.
pub const DRAW_LINE_WIDTH: f32 = 0.02;

/// Radius of the sphere marking a measurement point.
pub const MEASURE_MARKER_RADIUS: f32 = 0.05;

/// Segments shorter than this are not drawn.
pub const MIN_DRAW_LINE_LENGTH: f32 = 0.001;

pub const FIRST_MARKER_COLOUR: Color = Color::srgb(0.133, 0.773, 0.369);
pub const SECOND_MARKER_COLOUR: Color = Color::srgb(0.937, 0.267, 0.267);
pub const MEASURE_LINE_COLOUR: Color = Color::srgb(0.992, 0.878, 0.278);

/// Axis gizmo colours (X, Y, Z).
pub const AXIS_COLOURS: [Color; 3] = [
    Color::srgb(0.937, 0.267, 0.267),
    Color::srgb(0.133, 0.773, 0.369),
    Color::srgb(0.231, 0.510, 0.965),
];

/// Distance in pixels from the bottom-right corner to the axis gizmo origin.
pub const AXIS_GIZMO_MARGIN: Vec2 = Vec2::new(80.0, 80.0);

/// Distance in front of the camera at which the axis gizmo is drawn.
pub const AXIS_GIZMO_DEPTH: f32 = 2.0;

/// Arrow length of the axis gizmo at `AXIS_GIZMO_DEPTH`.
pub const AXIS_GIZMO_LENGTH: f32 = 0.12;

/// Radius of the inside-out sphere the panorama is projected onto.
pub const PANORAMA_RADIUS: f32 = 400.0;

/// Ambient brightness per scene.
pub const PBR_AMBIENT_BRIGHTNESS: f32 = 400.0;
pub const GLTF_AMBIENT_BRIGHTNESS: f32 = 900.0;
pub const PANO_AMBIENT_BRIGHTNESS: f32 = 500.0;
