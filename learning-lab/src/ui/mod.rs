//! In-window UI built with `bevy_ui`.
//!
//! The chrome (title, tab row, description, tips) lives for the whole run.
//! The measurement HUD with the clip slider and distance readout is mounted
//! with the "360° + Measure" tab and despawned with it.

use bevy::prelude::*;

use crate::engine::core::app_state::{AppState, LabTab};

/// Tab buttons, slider dragging, keyboard shortcuts and HUD readouts.
pub mod interactions;

/// Node trees for the chrome and the measurement HUD.
pub mod layout;

/// Marker components and palette shared by layout and interactions.
pub mod state;

use interactions::{
    clip_slider_drag, style_tab_buttons, tab_button_interaction, update_clip_readouts,
    update_distance_label,
};
use layout::{spawn_lab_chrome, spawn_pano_hud};

/// True while the pointer is over, or pressing, any interactive UI node.
pub fn pointer_over_ui(interactions: &Query<&Interaction>) -> bool {
    interactions.iter().any(|i| *i != Interaction::None)
}

pub struct LabUiPlugin;

impl Plugin for LabUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_lab_chrome)
            .add_systems(OnEnter(LabTab::PanoMeasure), spawn_pano_hud)
            .add_systems(
                Update,
                (tab_button_interaction, style_tab_buttons)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                (clip_slider_drag, update_clip_readouts, update_distance_label)
                    .chain()
                    .run_if(in_state(LabTab::PanoMeasure)),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(
                Update,
                interactions::handle_lab_keyboard_shortcuts.run_if(in_state(AppState::Running)),
            );
        }
    }
}
