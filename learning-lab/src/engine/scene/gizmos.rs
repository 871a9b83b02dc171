use bevy::prelude::*;
use constants::render_settings::{
    AXIS_COLOURS, AXIS_GIZMO_DEPTH, AXIS_GIZMO_LENGTH, AXIS_GIZMO_MARGIN,
};

use crate::tools::ray::camera_ray;

/// Where the axis triad sits on screen for a viewport of `viewport_size`.
pub fn axis_gizmo_anchor(viewport_size: Vec2) -> Vec2 {
    (viewport_size - AXIS_GIZMO_MARGIN).max(Vec2::ZERO)
}

/// World-aligned X/Y/Z arrows pinned to the bottom-right of the viewport.
pub fn draw_axis_gizmo(
    mut gizmos: Gizmos,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(viewport_size) = camera.logical_viewport_size() else {
        return;
    };
    let Some(ray) = camera_ray(axis_gizmo_anchor(viewport_size), camera, camera_transform) else {
        return;
    };

    let origin = ray.get_point(AXIS_GIZMO_DEPTH);
    for (axis, colour) in [Vec3::X, Vec3::Y, Vec3::Z].into_iter().zip(AXIS_COLOURS) {
        gizmos
            .arrow(origin, origin + axis * AXIS_GIZMO_LENGTH, colour)
            .with_tip_length(AXIS_GIZMO_LENGTH * 0.3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_stays_inside_small_viewports() {
        assert_eq!(
            axis_gizmo_anchor(Vec2::new(1280.0, 720.0)),
            Vec2::new(1200.0, 640.0)
        );
        assert_eq!(axis_gizmo_anchor(Vec2::new(40.0, 40.0)), Vec2::ZERO);
    }
}
