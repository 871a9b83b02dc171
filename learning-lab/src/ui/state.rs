use bevy::prelude::*;

use crate::engine::core::app_state::LabTab;

// Panel and button palette
pub const PANEL_BACKGROUND: Color = Color::srgba(0.07, 0.09, 0.13, 0.85);
pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVERED: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub const BUTTON_ACTIVE: Color = Color::srgb(0.145, 0.388, 0.922);
pub const TEXT_PRIMARY: Color = Color::srgb(1.0, 1.0, 1.0);
pub const TEXT_MUTED: Color = Color::srgb(0.70, 0.74, 0.80);
pub const SLIDER_TRACK: Color = Color::srgb(0.22, 0.24, 0.28);
pub const SLIDER_THUMB: Color = Color::srgb(0.992, 0.878, 0.278);

/// Width of the slider thumb in pixels.
pub const SLIDER_THUMB_WIDTH: f32 = 14.0;

#[derive(Component)]
pub struct TabButton(pub LabTab);

#[derive(Component)]
pub struct PanoHud;

#[derive(Component)]
pub struct ClipHeightLabel;

#[derive(Component)]
pub struct ClipSliderTrack;

#[derive(Component)]
pub struct ClipSliderThumb;

#[derive(Component)]
pub struct DistanceLabel;
