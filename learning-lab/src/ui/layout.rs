use bevy::prelude::*;
use bevy::ui::{FocusPolicy, RelativeCursorPosition};

use super::state::*;
use crate::engine::core::app_state::LabTab;
use crate::engine::scene::lifecycle::SceneEntity;
use crate::tools::clipping::ClipHeight;
use crate::tools::measure::MeasureTool;

const DESCRIPTION: &str = "Core 3D visualisation features: lighting and instancing, glTF ingestion \
(with an included sample), and a 360° environment with measurement and clipping.";

const TIPS: [(&str, &str); 3] = [
    (
        "Controls:",
        "drag to orbit, scroll to zoom, right-drag to pan. Keys 1-3 switch tabs.",
    ),
    (
        "Raycasting:",
        "click any two points on geometry in the \"360° + Measure\" tab to get a distance line.",
    ),
    (
        "Next steps:",
        "replace models/mini-cube.gltf with real glTF assets and drop real panoramas into assets/env.",
    ),
];

pub fn clip_height_text(height: &ClipHeight) -> String {
    format!("Clipping height: {:.2}", height.value())
}

pub fn distance_text(tool: &MeasureTool) -> String {
    match tool.distance() {
        Some(distance) => format!("Distance: {distance:.2} m"),
        None => format!("Distance: pick {} more point(s)", 2 - tool.points().len()),
    }
}

/// Thumb offset along the track for the current height.
pub fn thumb_left(height: &ClipHeight) -> Val {
    Val::Percent(height.fraction() * 100.0)
}

// Title, tab row, description and tips. Lives for the whole run.
pub fn spawn_lab_chrome(mut commands: Commands) {
    commands
        .spawn((
            Name::new("LabChrome"),
            BackgroundColor(PANEL_BACKGROUND),
            // Blocks viewport picks and camera drags under the panel
            Interaction::default(),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                max_width: Val::Px(460.0),
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(8.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Title"),
                Text::new("3D Learning Lab"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));

            parent
                .spawn((
                    Name::new("TabRow"),
                    Node {
                        display: Display::Flex,
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(8.0),
                        ..default()
                    },
                ))
                .with_children(|row| {
                    for tab in LabTab::ALL {
                        row.spawn((
                            TabButton(tab),
                            Button,
                            Name::new(format!("TabButton {}", tab.label())),
                            BackgroundColor(BUTTON_IDLE),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            Node {
                                height: Val::Px(32.0),
                                padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new(tab.label()),
                                TextFont {
                                    font_size: 15.0,
                                    ..default()
                                },
                                TextColor(TEXT_PRIMARY),
                            ));
                        });
                    }
                });

            parent.spawn((
                Name::new("Description"),
                Text::new(DESCRIPTION),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(TEXT_MUTED),
            ));
        });

    commands
        .spawn((
            Name::new("Tips"),
            BackgroundColor(PANEL_BACKGROUND),
            Interaction::default(),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                bottom: Val::Px(12.0),
                max_width: Val::Px(420.0),
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(4.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Tips"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
            for (heading, body) in TIPS {
                parent.spawn((
                    Text::new(format!("{heading} {body}")),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(TEXT_MUTED),
                ));
            }
        });
}

// Clip slider and distance readout, mounted with the measurement tab
pub fn spawn_pano_hud(
    mut commands: Commands,
    clip_height: Res<ClipHeight>,
    measure_tool: Res<MeasureTool>,
) {
    commands
        .spawn((
            PanoHud,
            SceneEntity,
            Name::new("PanoHud"),
            BackgroundColor(PANEL_BACKGROUND),
            Interaction::default(),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(12.0),
                top: Val::Px(12.0),
                width: Val::Px(280.0),
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(10.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                ClipHeightLabel,
                Text::new(clip_height_text(&clip_height)),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));

            parent
                .spawn((
                    ClipSliderTrack,
                    Name::new("ClipSlider"),
                    Interaction::default(),
                    RelativeCursorPosition::default(),
                    FocusPolicy::Block,
                    BackgroundColor(SLIDER_TRACK),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(10.0),
                        margin: UiRect::vertical(Val::Px(6.0)),
                        ..default()
                    },
                ))
                .with_children(|track| {
                    track.spawn((
                        ClipSliderThumb,
                        BackgroundColor(SLIDER_THUMB),
                        Node {
                            position_type: PositionType::Absolute,
                            left: thumb_left(&clip_height),
                            top: Val::Px(-5.0),
                            width: Val::Px(SLIDER_THUMB_WIDTH),
                            height: Val::Px(20.0),
                            margin: UiRect::left(Val::Px(-SLIDER_THUMB_WIDTH * 0.5)),
                            ..default()
                        },
                    ));
                });

            parent.spawn((
                DistanceLabel,
                Text::new(distance_text(&measure_tool)),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readouts_use_two_decimals() {
        assert_eq!(clip_height_text(&ClipHeight::new(-1.5)), "Clipping height: -1.50");

        let mut tool = MeasureTool::default();
        assert_eq!(distance_text(&tool), "Distance: pick 2 more point(s)");
        tool.record(Vec3::ZERO);
        tool.record(Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(distance_text(&tool), "Distance: 5.00 m");
    }

    #[test]
    fn thumb_tracks_the_height() {
        assert_eq!(thumb_left(&ClipHeight::new(-5.0)), Val::Percent(0.0));
        assert_eq!(thumb_left(&ClipHeight::new(5.0)), Val::Percent(100.0));
    }
}
