use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Point cloud generation parameters for the measurement scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloudSettings {
    pub count: usize,
    /// Fixed RNG seed. `None` samples a fresh layout on every mount.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Cell layout of the animated instanced grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstancedGridSettings {
    pub columns: u32,
    pub rows: u32,
    pub spacing: f32,
}

impl InstancedGridSettings {
    /// Number of cells, `None` when `columns * rows` overflows.
    pub fn cell_count(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows).map(|cells| cells as usize)
    }
}

/// Start pose of the viewport camera, applied on every scene mount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub fov_degrees: f32,
}

/// Runtime lab configuration as a Bevy asset. Mirrors `lab.manifest.json` exactly.
#[derive(Asset, Debug, Clone, PartialEq, Serialize, Deserialize, TypePath, Resource)]
pub struct LabManifest {
    pub model_path: String,
    pub panorama_path: String,
    pub point_cloud: PointCloudSettings,
    pub instanced_grid: InstancedGridSettings,
    pub camera: CameraSettings,
}

#[derive(Debug, Error, PartialEq)]
pub enum ManifestError {
    #[error("point cloud count must be greater than zero")]
    ZeroPointCount,
    #[error("instanced grid needs at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: u32, rows: u32 },
    #[error("instanced grid of {columns}x{rows} cells is too large")]
    GridTooLarge { columns: u32, rows: u32 },
    #[error("instanced grid spacing must be positive and finite, got {0}")]
    InvalidSpacing(f32),
    #[error("camera field of view must be within (0, 180) degrees, got {0}")]
    InvalidFov(f32),
    #[error("asset path for {0} is empty")]
    EmptyAssetPath(&'static str),
}

impl Default for LabManifest {
    fn default() -> Self {
        Self {
            model_path: "models/mini-cube.gltf".to_string(),
            panorama_path: "env/pano.png".to_string(),
            point_cloud: PointCloudSettings {
                count: 30_000,
                seed: None,
            },
            instanced_grid: InstancedGridSettings {
                columns: 10,
                rows: 10,
                spacing: 1.2,
            },
            camera: CameraSettings {
                position: [6.0, 5.0, 8.0],
                fov_degrees: 55.0,
            },
        }
    }
}

impl LabManifest {
    /// Reject values the scenes cannot be built from.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.model_path.trim().is_empty() {
            return Err(ManifestError::EmptyAssetPath("model"));
        }
        if self.panorama_path.trim().is_empty() {
            return Err(ManifestError::EmptyAssetPath("panorama"));
        }
        if self.point_cloud.count == 0 {
            return Err(ManifestError::ZeroPointCount);
        }

        let grid = &self.instanced_grid;
        if grid.columns == 0 || grid.rows == 0 {
            return Err(ManifestError::EmptyGrid {
                columns: grid.columns,
                rows: grid.rows,
            });
        }
        if grid.cell_count().is_none() {
            return Err(ManifestError::GridTooLarge {
                columns: grid.columns,
                rows: grid.rows,
            });
        }
        if !grid.spacing.is_finite() || grid.spacing <= 0.0 {
            return Err(ManifestError::InvalidSpacing(grid.spacing));
        }

        let fov = self.camera.fov_degrees;
        if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
            return Err(ManifestError::InvalidFov(fov));
        }

        Ok(())
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera.position)
    }

    pub fn camera_fov(&self) -> f32 {
        self.camera.fov_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED_MANIFEST: &str = include_str!("../../../assets/lab.manifest.json");

    #[test]
    fn shipped_manifest_parses_and_validates() {
        let manifest: LabManifest = serde_json::from_str(SHIPPED_MANIFEST).unwrap();
        assert_eq!(manifest.validate(), Ok(()));
        assert_eq!(manifest.instanced_grid.cell_count(), Some(100));
        assert_eq!(manifest.point_cloud.count, 30_000);
    }

    #[test]
    fn default_manifest_is_valid() {
        assert_eq!(LabManifest::default().validate(), Ok(()));
    }

    #[test]
    fn seed_is_optional() {
        let json = r#"{
            "model_path": "models/a.gltf",
            "panorama_path": "env/b.png",
            "point_cloud": { "count": 12 },
            "instanced_grid": { "columns": 2, "rows": 3, "spacing": 1.0 },
            "camera": { "position": [1.0, 2.0, 3.0], "fov_degrees": 60.0 }
        }"#;
        let manifest: LabManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.point_cloud.seed, None);
        assert_eq!(manifest.instanced_grid.cell_count(), Some(6));
        assert_eq!(manifest.camera_position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn validation_catches_bad_values() {
        let mut manifest = LabManifest::default();
        manifest.point_cloud.count = 0;
        assert_eq!(manifest.validate(), Err(ManifestError::ZeroPointCount));

        let mut manifest = LabManifest::default();
        manifest.instanced_grid.rows = 0;
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::EmptyGrid {
                columns: 10,
                rows: 0
            })
        );

        let mut manifest = LabManifest::default();
        manifest.instanced_grid.columns = u32::MAX;
        manifest.instanced_grid.rows = 2;
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::GridTooLarge {
                columns: u32::MAX,
                rows: 2
            })
        );

        let mut manifest = LabManifest::default();
        manifest.instanced_grid.spacing = f32::NAN;
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::InvalidSpacing(_))
        ));

        let mut manifest = LabManifest::default();
        manifest.camera.fov_degrees = 180.0;
        assert_eq!(manifest.validate(), Err(ManifestError::InvalidFov(180.0)));

        let mut manifest = LabManifest::default();
        manifest.model_path = "  ".to_string();
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::EmptyAssetPath("model"))
        );
    }
}
