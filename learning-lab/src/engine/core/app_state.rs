use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Top-level lifecycle: wait for the lab manifest, then run the scenes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// The mounted scene. Only exists while `AppState::Running`.
#[derive(SubStates, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[source(AppState = AppState::Running)]
pub enum LabTab {
    #[default]
    Pbr,
    Gltf,
    PanoMeasure,
}

impl LabTab {
    pub const ALL: [LabTab; 3] = [LabTab::Pbr, LabTab::Gltf, LabTab::PanoMeasure];

    /// Label shown on the tab button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pbr => "PBR & Instancing",
            Self::Gltf => "GLTF Loader",
            Self::PanoMeasure => "360° + Measure",
        }
    }
}

#[derive(Component)]
pub struct FpsText;

// Final transition once the manifest resource is in place
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !loading_progress.manifest_ready {
        return;
    }
    if loading_progress.manifest_fell_back {
        info!("→ Running with built-in lab defaults");
    } else {
        info!("→ Manifest ready, transitioning to Running state");
    }
    next_state.set(AppState::Running);
}

pub fn log_tab_mount(tab: Res<State<LabTab>>) {
    info!("Mounted scene: {}", tab.get().label());
}
