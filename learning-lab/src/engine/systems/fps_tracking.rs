use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::core::app_state::FpsText;

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(value) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
    else {
        return;
    };

    for mut text in &mut query {
        text.0 = format_fps(value);
    }
}

fn format_fps(value: f64) -> String {
    format!("FPS: {value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_is_shown_with_one_decimal() {
        assert_eq!(format_fps(59.94), "FPS: 59.9");
        assert_eq!(format_fps(120.0), "FPS: 120.0");
    }
}
