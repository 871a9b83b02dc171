/// PBR material extension carrying one world-space clip plane.
use bevy::{
    pbr::{ExtendedMaterial, MaterialExtension},
    prelude::*,
    render::render_resource::{AsBindGroup, ShaderRef},
};

const CLIP_PLANE_SHADER_PATH: &str = "shaders/clip_plane.wgsl";

/// Standard PBR shading with fragments below the clip plane discarded.
pub type ClipMaterial = ExtendedMaterial<StandardMaterial, ClipPlaneExtension>;

/// Plane packed as `(normal.xyz, constant)`. Bindings start at 100 so they never
/// collide with the base material.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone)]
pub struct ClipPlaneExtension {
    #[uniform(100)]
    pub plane: Vec4,
}

impl Default for ClipPlaneExtension {
    fn default() -> Self {
        // Horizontal plane through the origin.
        Self {
            plane: Vec4::new(0.0, 1.0, 0.0, 0.0),
        }
    }
}

impl MaterialExtension for ClipPlaneExtension {
    fn fragment_shader() -> ShaderRef {
        CLIP_PLANE_SHADER_PATH.into()
    }
}

/// Materials that accept an active clip plane.
///
/// The material holds exactly one plane: setting a new one replaces the old.
pub trait ClipTarget {
    fn set_clip_plane(&mut self, plane: Vec4);
    fn clip_plane(&self) -> Vec4;
}

impl ClipTarget for ClipMaterial {
    fn set_clip_plane(&mut self, plane: Vec4) {
        self.extension.plane = plane;
    }

    fn clip_plane(&self) -> Vec4 {
        self.extension.plane
    }
}

/// Wrap a standard material so it takes part in height clipping.
pub fn clip_material(base: StandardMaterial) -> ClipMaterial {
    ExtendedMaterial {
        base,
        extension: ClipPlaneExtension::default(),
    }
}

pub struct ClipMaterialPlugin;

impl Plugin for ClipMaterialPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<ClipMaterial>::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_plane_replaces_previous_one() {
        let mut material = clip_material(StandardMaterial::default());
        material.set_clip_plane(Vec4::new(0.0, 1.0, 0.0, -1.0));
        material.set_clip_plane(Vec4::new(0.0, 1.0, 0.0, 2.5));
        assert_eq!(material.clip_plane(), Vec4::new(0.0, 1.0, 0.0, 2.5));
    }
}
