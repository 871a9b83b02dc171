use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use constants::clipping::{
    CLIP_HEIGHT_DEFAULT, CLIP_HEIGHT_MAX, CLIP_HEIGHT_MIN, CLIP_HEIGHT_STEPS_PER_UNIT,
    CLIP_INDICATOR_COLOUR, CLIP_INDICATOR_OPACITY, CLIP_INDICATOR_SIZE,
};

use crate::engine::render::clip_material::ClipTarget;
use crate::engine::scene::lifecycle::LabSceneRoot;
use crate::tools::ray::PickSurface;

/// Height of the horizontal clip plane. Always within
/// [`CLIP_HEIGHT_MIN`, `CLIP_HEIGHT_MAX`] and on a 0.1 step.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ClipHeight(f32);

impl ClipHeight {
    /// Clamp and snap `value`. NaN maps to the default height.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        let clamped = value.clamp(CLIP_HEIGHT_MIN, CLIP_HEIGHT_MAX);
        let snapped = (clamped * CLIP_HEIGHT_STEPS_PER_UNIT).round() / CLIP_HEIGHT_STEPS_PER_UNIT;
        // +0.0 turns -0.0 into 0.0
        Self(snapped + 0.0)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn set(&mut self, value: f32) {
        *self = Self::new(value);
    }

    /// Position along the slider track, 0 at the minimum and 1 at the maximum.
    pub fn fraction(&self) -> f32 {
        (self.0 - CLIP_HEIGHT_MIN) / (CLIP_HEIGHT_MAX - CLIP_HEIGHT_MIN)
    }

    pub fn from_fraction(fraction: f32) -> Self {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        Self::new(CLIP_HEIGHT_MIN + fraction * (CLIP_HEIGHT_MAX - CLIP_HEIGHT_MIN))
    }

    /// Move by whole slider steps.
    pub fn step_by(&self, steps: i32) -> Self {
        Self::new(self.0 + steps as f32 / CLIP_HEIGHT_STEPS_PER_UNIT)
    }
}

impl Default for ClipHeight {
    fn default() -> Self {
        Self(CLIP_HEIGHT_DEFAULT)
    }
}

/// Plane `(0, 1, 0, -h)`: everything below `h` is discarded.
pub fn clip_plane_for_height(height: f32) -> Vec4 {
    Vec4::new(0.0, 1.0, 0.0, -height)
}

/// Visit `root` and all its descendants, parents before children.
pub fn walk_depth_first(root: Entity, children: &Query<&Children>, mut visit: impl FnMut(Entity)) {
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        visit(entity);
        if let Ok(kids) = children.get(entity) {
            stack.extend(kids.iter().rev());
        }
    }
}

/// Push the current plane into every clip-capable material under the scene root.
///
/// Runs when the height changes and when new `M` renderables appear, so
/// streamed-in meshes pick up the active plane as well.
pub fn apply_clip_plane<M: Material + ClipTarget>(
    clip_height: Res<ClipHeight>,
    roots: Query<Entity, With<LabSceneRoot>>,
    children: Query<&Children>,
    targets: Query<&MeshMaterial3d<M>>,
    added: Query<(), Added<MeshMaterial3d<M>>>,
    mut materials: ResMut<Assets<M>>,
) {
    if !clip_height.is_changed() && added.is_empty() {
        return;
    }

    let plane = clip_plane_for_height(clip_height.value());
    let mut updated = 0;
    for root in &roots {
        walk_depth_first(root, &children, |entity| {
            let Ok(handle) = targets.get(entity) else {
                return;
            };
            let Some(material) = materials.get_mut(&handle.0) else {
                return;
            };
            material.set_clip_plane(plane);
            updated += 1;
        });
    }

    if updated > 0 {
        debug!(
            "Clip plane at {:.2} applied to {updated} materials",
            clip_height.value()
        );
    }
}

/// Translucent quad marking the clip height. Not clipped; picks land on it at the
/// clip height instead of on the hidden geometry below.
#[derive(Component)]
pub struct ClipIndicator;

pub fn spawn_clip_indicator(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    parent: Entity,
    height: f32,
) -> Entity {
    let material = materials.add(StandardMaterial {
        base_color: CLIP_INDICATOR_COLOUR.with_alpha(CLIP_INDICATOR_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands
        .spawn((
            Name::new("Clip indicator"),
            ClipIndicator,
            Mesh3d(meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(CLIP_INDICATOR_SIZE, CLIP_INDICATOR_SIZE),
            )),
            MeshMaterial3d(material),
            Transform::from_xyz(0.0, height, 0.0),
            PickSurface::quad(CLIP_INDICATOR_SIZE, CLIP_INDICATOR_SIZE),
            NotShadowCaster,
            NotShadowReceiver,
            ChildOf(parent),
        ))
        .id()
}

pub fn follow_clip_indicator(
    clip_height: Res<ClipHeight>,
    mut indicators: Query<&mut Transform, With<ClipIndicator>>,
) {
    for mut transform in &mut indicators {
        if transform.translation.y != clip_height.value() {
            transform.translation.y = clip_height.value();
        }
    }
}
