use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use super::layout::{clip_height_text, distance_text, thumb_left};
use super::state::*;
use crate::engine::core::app_state::LabTab;
use crate::tools::clipping::ClipHeight;
use crate::tools::measure::MeasureTool;

// Tab buttons request the matching scene
pub fn tab_button_interaction(
    q: Query<(&Interaction, &TabButton), (Changed<Interaction>, With<Button>)>,
    current_tab: Res<State<LabTab>>,
    mut next_tab: ResMut<NextState<LabTab>>,
) {
    for (interaction, button) in &q {
        if *interaction == Interaction::Pressed && *current_tab.get() != button.0 {
            info!("Tab selected: {}", button.0.label());
            next_tab.set(button.0);
        }
    }
}

pub fn tab_button_colour(interaction: Interaction, active: bool) -> Color {
    match interaction {
        Interaction::Pressed => BUTTON_PRESSED,
        Interaction::Hovered if !active => BUTTON_HOVERED,
        _ if active => BUTTON_ACTIVE,
        _ => BUTTON_IDLE,
    }
}

// Active tab stays highlighted, others react to hover
pub fn style_tab_buttons(
    mut q: Query<(&Interaction, &TabButton, &mut BackgroundColor)>,
    current_tab: Res<State<LabTab>>,
) {
    for (interaction, button, mut bg) in &mut q {
        let colour = tab_button_colour(*interaction, *current_tab.get() == button.0);
        bg.set_if_neq(BackgroundColor(colour));
    }
}

/// Horizontal cursor position on the track as a fraction from the left edge.
///
/// `RelativeCursorPosition` is centred on the node, so the track spans [-0.5, 0.5].
pub fn slider_fraction(normalized_x: f32) -> f32 {
    (normalized_x + 0.5).clamp(0.0, 1.0)
}

// Pressing or dragging on the track sets the clip height
pub fn clip_slider_drag(
    tracks: Query<(&Interaction, &RelativeCursorPosition), With<ClipSliderTrack>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut clip_height: ResMut<ClipHeight>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }

    for (interaction, cursor) in &tracks {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(normalized) = cursor.normalized else {
            continue;
        };
        clip_height.set_if_neq(ClipHeight::from_fraction(slider_fraction(normalized.x)));
    }
}

pub fn update_clip_readouts(
    clip_height: Res<ClipHeight>,
    mut labels: Query<&mut Text, With<ClipHeightLabel>>,
    mut thumbs: Query<&mut Node, With<ClipSliderThumb>>,
) {
    if !clip_height.is_changed() {
        return;
    }
    for mut text in &mut labels {
        text.0 = clip_height_text(&clip_height);
    }
    for mut node in &mut thumbs {
        node.left = thumb_left(&clip_height);
    }
}

pub fn update_distance_label(
    measure_tool: Res<MeasureTool>,
    mut labels: Query<&mut Text, With<DistanceLabel>>,
) {
    if !measure_tool.is_changed() {
        return;
    }
    for mut text in &mut labels {
        text.0 = distance_text(&measure_tool);
    }
}

/// Digit keys pick a tab, Up/Down step the clip height in the measurement tab.
pub fn tab_for_key(key: KeyCode) -> Option<LabTab> {
    match key {
        KeyCode::Digit1 => Some(LabTab::Pbr),
        KeyCode::Digit2 => Some(LabTab::Gltf),
        KeyCode::Digit3 => Some(LabTab::PanoMeasure),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn handle_lab_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_tab: Res<State<LabTab>>,
    mut next_tab: ResMut<NextState<LabTab>>,
    mut clip_height: ResMut<ClipHeight>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(tab) = tab_for_key(*key) {
            if *current_tab.get() != tab {
                info!("Tab selected: {}", tab.label());
                next_tab.set(tab);
            }
        }
    }

    if *current_tab.get() != LabTab::PanoMeasure {
        return;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        let stepped = clip_height.step_by(1);
        clip_height.set_if_neq(stepped);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        let stepped = clip_height.step_by(-1);
        clip_height.set_if_neq(stepped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::app_state::AppState;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn slider_fraction_covers_the_track() {
        assert_eq!(slider_fraction(-0.5), 0.0);
        assert_eq!(slider_fraction(0.0), 0.5);
        assert_eq!(slider_fraction(0.5), 1.0);
        assert_eq!(slider_fraction(0.9), 1.0);
    }

    #[test]
    fn active_tab_keeps_its_highlight() {
        assert_eq!(tab_button_colour(Interaction::None, true), BUTTON_ACTIVE);
        assert_eq!(tab_button_colour(Interaction::Hovered, true), BUTTON_ACTIVE);
        assert_eq!(tab_button_colour(Interaction::Hovered, false), BUTTON_HOVERED);
        assert_eq!(tab_button_colour(Interaction::None, false), BUTTON_IDLE);
    }

    #[test]
    fn digit_keys_map_to_tabs() {
        assert_eq!(tab_for_key(KeyCode::Digit3), Some(LabTab::PanoMeasure));
        assert_eq!(tab_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn pressing_a_tab_button_switches_scene() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<AppState>()
            .add_sub_state::<LabTab>()
            .add_systems(Update, tab_button_interaction);
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Running);
        app.update();

        app.world_mut()
            .spawn((Button, Interaction::Pressed, TabButton(LabTab::Gltf)));
        app.update();
        app.update();

        assert_eq!(*app.world().resource::<State<LabTab>>().get(), LabTab::Gltf);
    }
}
