use bevy::prelude::*;
use bevy::render::camera::CameraProjection;

/// Oriented box a pointer ray can land on. `size` is the full extent in local space;
/// a zero extent on one axis gives a flat quad.
#[derive(Component, Debug, Clone, Copy)]
pub struct PickSurface {
    pub size: Vec3,
}

impl PickSurface {
    pub fn cuboid(size: Vec3) -> Self {
        Self { size }
    }

    /// Horizontal quad in the local XZ plane.
    pub fn quad(width: f32, depth: f32) -> Self {
        Self {
            size: Vec3::new(width, 0.0, depth),
        }
    }
}

/// Window cursor position (top-left origin) to normalised device coordinates.
pub fn cursor_to_ndc(cursor: Vec2, viewport_size: Vec2) -> Option<Vec2> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (cursor.x / viewport_size.x) * 2.0 - 1.0,
        -(cursor.y / viewport_size.y) * 2.0 + 1.0,
    ))
}

/// Ray leaving the near plane through `ndc`. Works for reverse-z perspective
/// (near plane at depth 1) as well as orthographic projections.
pub fn ray_from_ndc(ndc: Vec2, world_from_clip: Mat4) -> Option<Ray3d> {
    let near = world_from_clip.project_point3(ndc.extend(1.0));
    let further = world_from_clip.project_point3(ndc.extend(0.5));
    if !near.is_finite() || !further.is_finite() {
        return None;
    }
    let direction = Dir3::new(further - near).ok()?;
    Some(Ray3d::new(near, direction))
}

/// Camera ray through a window cursor position.
pub fn camera_ray(
    cursor: Vec2,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Ray3d> {
    let ndc = cursor_to_ndc(cursor, camera.logical_viewport_size()?)?;
    ray_from_ndc(ndc, world_from_clip(camera_transform, camera.clip_from_view()))
}

/// Ray through `cursor` for a camera filling a viewport of `viewport_size`,
/// built from the projection component rather than the camera's computed state.
pub fn projection_ray(
    cursor: Vec2,
    viewport_size: Vec2,
    projection: &Projection,
    camera_transform: &GlobalTransform,
) -> Option<Ray3d> {
    let ndc = cursor_to_ndc(cursor, viewport_size)?;
    ray_from_ndc(
        ndc,
        world_from_clip(camera_transform, projection.get_clip_from_view()),
    )
}

fn world_from_clip(camera_transform: &GlobalTransform, clip_from_view: Mat4) -> Mat4 {
    camera_transform.compute_matrix() * clip_from_view.inverse()
}

/// Ray parameter of the first hit against a box transformed by `xf`.
pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];

        if direction == 0.0 {
            // Parallel to this slab: either always inside it or never.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (mut t0, mut t1) = ((min[axis] - origin) * inv, (max[axis] - origin) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

/// World-space point of the closest surface the ray hits.
pub fn nearest_hit<'a>(
    ray: Ray3d,
    surfaces: impl IntoIterator<Item = (&'a GlobalTransform, &'a PickSurface)>,
) -> Option<Vec3> {
    surfaces
        .into_iter()
        .filter_map(|(xf, surface)| ray_hits_obb(ray.origin, *ray.direction, xf, surface.size))
        .min_by(f32::total_cmp)
        .map(|t| ray.get_point(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn down_ray(x: f32, z: f32) -> Ray3d {
        Ray3d::new(Vec3::new(x, 10.0, z), Dir3::NEG_Y)
    }

    #[test]
    fn ndc_spans_the_viewport() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(cursor_to_ndc(Vec2::ZERO, size), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(cursor_to_ndc(size, size), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(cursor_to_ndc(size * 0.5, size), Some(Vec2::ZERO));
        assert_eq!(cursor_to_ndc(Vec2::ONE, Vec2::ZERO), None);
    }

    #[test]
    fn centre_ray_follows_camera_forward() {
        let clip_from_view =
            Mat4::perspective_infinite_reverse_rh(55f32.to_radians(), 16.0 / 9.0, 0.1);
        let world_from_view = Transform::from_xyz(0.0, 2.0, 5.0).compute_matrix();
        let ray = ray_from_ndc(Vec2::ZERO, world_from_view * clip_from_view.inverse()).unwrap();

        assert_relative_eq!(ray.direction.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.direction.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ray.direction.z, -1.0, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.z, 4.9, epsilon = 1e-4);

        let right = ray_from_ndc(Vec2::new(1.0, 0.0), world_from_view * clip_from_view.inverse())
            .unwrap();
        assert!(right.direction.x > 0.0);
    }

    #[test]
    fn projection_ray_looks_down_from_above() {
        let projection = Projection::Perspective(PerspectiveProjection {
            aspect_ratio: 16.0 / 9.0,
            ..default()
        });
        let camera = GlobalTransform::from(
            Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
        );
        let viewport = Vec2::new(1280.0, 720.0);

        let ray = projection_ray(viewport * 0.5, viewport, &projection, &camera).unwrap();
        assert_relative_eq!(ray.direction.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(ray.origin.x, 0.0, epsilon = 1e-4);
        assert!(projection_ray(Vec2::ZERO, Vec2::ZERO, &projection, &camera).is_none());
    }

    #[test]
    fn slab_test_reports_entry_distance() {
        let t = ray_aabb_hit_t(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, -Vec3::ONE, Vec3::ONE);
        assert_eq!(t, Some(9.0));
        assert_eq!(
            ray_aabb_hit_t(Vec3::new(5.0, 10.0, 0.0), Vec3::NEG_Y, -Vec3::ONE, Vec3::ONE),
            None
        );
        // Origin inside the box: the exit distance is the first surface crossed.
        assert_eq!(
            ray_aabb_hit_t(Vec3::ZERO, Vec3::X, -Vec3::ONE, Vec3::ONE),
            Some(1.0)
        );
        // Box behind the ray.
        assert_eq!(
            ray_aabb_hit_t(Vec3::new(0.0, 10.0, 0.0), Vec3::Y, -Vec3::ONE, Vec3::ONE),
            None
        );
    }

    #[test]
    fn flat_quad_is_hit_on_its_plane() {
        let xf = GlobalTransform::from(Transform::from_xyz(0.0, -0.5, 0.0));
        let size = Vec3::new(30.0, 0.0, 30.0);
        let t = ray_hits_obb(Vec3::new(1.0, 10.0, 2.0), Vec3::NEG_Y, &xf, size);
        assert_eq!(t, Some(10.5));
    }

    #[test]
    fn rotated_box_uses_its_local_frame() {
        let xf = GlobalTransform::from(
            Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
        );
        // Local X now points along (1, 0, -1), so the thin slab covers that diagonal only.
        let size = Vec3::new(2.0, 2.0, 0.2);
        assert!(ray_hits_obb(Vec3::new(0.9, 10.0, 0.9), Vec3::NEG_Y, &xf, size).is_none());
        assert!(ray_hits_obb(Vec3::new(0.6, 10.0, -0.6), Vec3::NEG_Y, &xf, size).is_some());
    }

    #[test]
    fn nearest_hit_prefers_the_closest_surface() {
        let ground = (
            GlobalTransform::from(Transform::from_xyz(0.0, -0.5, 0.0)),
            PickSurface::quad(30.0, 30.0),
        );
        let tall_box = (
            GlobalTransform::from(Transform::from_xyz(3.0, 1.5, 0.0)),
            PickSurface::cuboid(Vec3::new(1.0, 2.0, 1.0)),
        );
        let surfaces = [ground, tall_box];

        let on_box = nearest_hit(down_ray(3.0, 0.0), surfaces.iter().map(|(x, s)| (x, s))).unwrap();
        assert_relative_eq!(on_box.y, 2.5, epsilon = 1e-5);

        let on_ground =
            nearest_hit(down_ray(-5.0, 4.0), surfaces.iter().map(|(x, s)| (x, s))).unwrap();
        assert_relative_eq!(on_ground.y, -0.5, epsilon = 1e-5);
        assert_relative_eq!(on_ground.x, -5.0, epsilon = 1e-5);

        assert!(nearest_hit(down_ray(100.0, 0.0), surfaces.iter().map(|(x, s)| (x, s))).is_none());
    }
}
