use bevy::prelude::*;

/// Box used for every instanced grid cell.
pub const INSTANCE_BOX_SIZE: Vec3 = Vec3::new(1.0, 0.2, 1.0);
pub const INSTANCE_COLOUR: Color = Color::srgb(0.490, 0.827, 0.988);
pub const INSTANCE_METALLIC: f32 = 0.2;
pub const INSTANCE_ROUGHNESS: f32 = 0.6;

/// Vertical oscillation amplitude of the instanced grid.
pub const INSTANCE_BOB_AMPLITUDE: f32 = 0.3;
/// Per-index phase offset of the vertical oscillation.
pub const INSTANCE_BOB_PHASE: f32 = 0.1;
/// Spin rates around X and Y in radians per second.
pub const INSTANCE_SPIN_RATE: Vec2 = Vec2::new(0.2, 0.3);
/// Per-index phase offset of the spin.
pub const INSTANCE_SPIN_PHASE: f32 = 0.01;

/// PBR scene ground plane and grid helper.
pub const PBR_GROUND_SIZE: f32 = 200.0;
pub const PBR_GROUND_COLOUR: Color = Color::srgb(0.043, 0.059, 0.086);
pub const GRID_HELPER_DIVISIONS: u32 = 200;
pub const GRID_CENTRE_LINE_COLOUR: Color = Color::srgb(0.231, 0.510, 0.965);
pub const GRID_LINE_COLOUR: Color = Color::srgb(0.122, 0.161, 0.216);

pub const PBR_SUN_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);
pub const PANO_POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 8.0, 5.0);

/// Measurement scene ground plane.
pub const PANO_GROUND_SIZE: f32 = 30.0;
pub const PANO_GROUND_HEIGHT: f32 = -0.5;
pub const PANO_GROUND_COLOUR: Color = Color::srgb(0.122, 0.161, 0.216);

/// A box in the measurement scene: centre, full size and colour.
pub struct SceneBox {
    pub centre: Vec3,
    pub size: Vec3,
    pub colour: Color,
}

pub const PANO_BOXES: [SceneBox; 3] = [
    SceneBox {
        centre: Vec3::new(0.0, 0.5, 0.0),
        size: Vec3::new(2.0, 1.0, 1.0),
        colour: Color::srgb(0.310, 0.275, 0.898),
    },
    SceneBox {
        centre: Vec3::new(3.0, 1.5, 0.0),
        size: Vec3::new(1.0, 2.0, 1.0),
        colour: Color::srgb(0.937, 0.267, 0.267),
    },
    SceneBox {
        centre: Vec3::new(-3.0, 2.0, 0.0),
        size: Vec3::new(1.5, 1.0, 1.5),
        colour: Color::srgb(0.133, 0.773, 0.369),
    },
];

/// Point cloud shell: horizontal radius range and vertical spread.
pub const POINT_CLOUD_MIN_RADIUS: f32 = 5.0;
pub const POINT_CLOUD_RADIUS_SPAN: f32 = 10.0;
pub const POINT_CLOUD_HEIGHT_SPAN: f32 = 6.0;
pub const POINT_CLOUD_SATURATION: f32 = 0.6;
pub const POINT_CLOUD_LIGHTNESS: f32 = 0.5;
