use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::engine::assets::lab_manifest::LabManifest;
use crate::ui::pointer_over_ui;

const ORBIT_SENSITIVITY: f32 = 0.005;
const PITCH_LIMIT: f32 = 1.55;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 200.0;
const ZOOM_STEP: f32 = 0.1;
const LERP_RATE: f32 = 12.0;

/// Orbit camera state: a focus point plus spherical offset.
///
/// `yaw` is measured around +Y from +Z, `pitch` upwards from the XZ plane.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl ViewportCamera {
    /// Orbit state that places the eye at `position` looking at `focus_point`.
    pub fn looking_at(position: Vec3, focus_point: Vec3) -> Self {
        let offset = position - focus_point;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let (yaw, pitch) = if offset.length_squared() > f32::EPSILON {
            let dir = offset.normalize();
            (dir.x.atan2(dir.z), dir.y.clamp(-1.0, 1.0).asin())
        } else {
            (0.0, 0.0)
        };

        Self {
            focus_point,
            distance,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn eye_position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus_point
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    pub fn target_transform(&self) -> Transform {
        Transform::from_translation(self.eye_position()).looking_at(self.focus_point, Vec3::Y)
    }

    /// Drag right swings the eye left around the focus, drag down raises it.
    pub fn orbit(&mut self, mouse_delta: Vec2) {
        self.yaw -= mouse_delta.x * ORBIT_SENSITIVITY;
        self.pitch =
            (self.pitch + mouse_delta.y * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive scroll moves closer. Each line step scales distance by `ZOOM_STEP`.
    pub fn zoom(&mut self, scroll_lines: f32) {
        let factor = (1.0 - scroll_lines * ZOOM_STEP).max(0.1);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Move the focus so the point under the cursor tracks the drag.
    pub fn pan(&mut self, mouse_delta: Vec2, fov: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let world_per_pixel = 2.0 * self.distance * (fov * 0.5).tan() / viewport_height;
        let rotation = self.target_transform().rotation;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.focus_point += (-mouse_delta.x * right + mouse_delta.y * up) * world_per_pixel;
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::looking_at(LabManifest::default().camera_position(), Vec3::ZERO)
    }
}

pub fn camera_controller(
    mut camera_query: Query<(&mut Transform, &Camera, &Projection), With<Camera3d>>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    ui_interactions: Query<&Interaction>,
    time: Res<Time>,
) {
    let Ok((mut camera_transform, camera, projection)) = camera_query.single_mut() else {
        return;
    };

    // Read mouse motion
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if !pointer_over_ui(&ui_interactions) {
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            viewport_camera.orbit(mouse_delta);
        }

        if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
            let fov = match projection {
                Projection::Perspective(perspective) => perspective.fov,
                _ => LabManifest::default().camera_fov(),
            };
            let viewport_height = camera.logical_viewport_size().map_or(0.0, |size| size.y);
            viewport_camera.pan(mouse_delta, fov, viewport_height);
        }

        if scroll_accum.abs() > f32::EPSILON {
            viewport_camera.zoom(scroll_accum);
        }
    }

    let target = viewport_camera.target_transform();
    let lerp_speed = (LERP_RATE * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform
        .translation
        .lerp(target.translation, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, lerp_speed);
}

/// Snap the camera back to the manifest pose. Runs on every scene mount.
pub fn reset_viewport_camera(
    manifest: Res<LabManifest>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera3d>>,
) {
    *viewport_camera = ViewportCamera::looking_at(manifest.camera_position(), Vec3::ZERO);

    for (mut transform, mut projection) in &mut camera_query {
        *transform = viewport_camera.target_transform();
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = manifest.camera_fov();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn orbit_state_reproduces_start_position() {
        let start = Vec3::new(6.0, 5.0, 8.0);
        let camera = ViewportCamera::looking_at(start, Vec3::ZERO);
        let eye = camera.eye_position();

        assert_relative_eq!(eye.x, start.x, epsilon = 1e-4);
        assert_relative_eq!(eye.y, start.y, epsilon = 1e-4);
        assert_relative_eq!(eye.z, start.z, epsilon = 1e-4);
        assert_relative_eq!(camera.distance, 125f32.sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = ViewportCamera::default();
        for _ in 0..200 {
            camera.zoom(3.0);
        }
        assert_relative_eq!(camera.distance, MIN_DISTANCE);

        for _ in 0..200 {
            camera.zoom(-3.0);
        }
        assert_relative_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn orbit_never_flips_over_the_pole() {
        let mut camera = ViewportCamera::default();
        camera.orbit(Vec2::new(0.0, 10_000.0));
        assert_relative_eq!(camera.pitch, PITCH_LIMIT);
        camera.orbit(Vec2::new(0.0, -20_000.0));
        assert_relative_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn pan_keeps_distance_and_moves_focus() {
        let mut camera = ViewportCamera::default();
        let before = camera.clone();
        camera.pan(Vec2::new(100.0, 0.0), 55f32.to_radians(), 720.0);

        assert_relative_eq!(camera.distance, before.distance);
        assert!(camera.focus_point.distance(before.focus_point) > 0.0);
        // Horizontal drag stays horizontal.
        assert_relative_eq!(camera.focus_point.y, 0.0, epsilon = 1e-5);
    }
}
