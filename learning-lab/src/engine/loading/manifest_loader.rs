use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::lab_manifest::LabManifest;
use crate::engine::loading::progress::LoadingProgress;

pub const MANIFEST_PATH: &str = "lab.manifest.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<LabManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading lab manifest from {MANIFEST_PATH}");
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Accept a parsed manifest, or fall back to the built-in defaults if it is unusable.
pub fn accept_manifest(manifest: &LabManifest) -> (LabManifest, bool) {
    match manifest.validate() {
        Ok(()) => (manifest.clone(), false),
        Err(err) => {
            error!("Lab manifest rejected: {err}. Using built-in defaults");
            (LabManifest::default(), true)
        }
    }
}

// Insert the manifest resource once the asset is ready or has failed
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<LabManifest>>,
) {
    if loading_progress.manifest_ready {
        return;
    }

    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };

    if let Some(manifest) = manifests.get(handle) {
        let (manifest, fell_back) = accept_manifest(manifest);
        if !fell_back {
            info!("✓ Lab manifest loaded");
        }
        commands.insert_resource(manifest);
        loading_progress.manifest_ready = true;
        loading_progress.manifest_fell_back = fell_back;
        return;
    }

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        warn!("Could not load {MANIFEST_PATH}: {err}. Using built-in defaults");
        commands.insert_resource(LabManifest::default());
        loading_progress.manifest_ready = true;
        loading_progress.manifest_fell_back = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_manifest_is_kept() {
        let mut manifest = LabManifest::default();
        manifest.point_cloud.count = 500;
        let (accepted, fell_back) = accept_manifest(&manifest);
        assert!(!fell_back);
        assert_eq!(accepted.point_cloud.count, 500);
    }

    #[test]
    fn invalid_manifest_falls_back_to_defaults() {
        let mut manifest = LabManifest::default();
        manifest.instanced_grid.columns = 0;
        let (accepted, fell_back) = accept_manifest(&manifest);
        assert!(fell_back);
        assert_eq!(accepted, LabManifest::default());
    }
}
