use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::scene::lifecycle::SceneEntity;

const PLACEHOLDER_TEXT: &str = "Loading model...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Pending,
    Loaded,
    Failed,
}

impl ModelStatus {
    pub fn from_load_state(state: Option<&LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Loaded,
            Some(LoadState::Failed(_)) => Self::Failed,
            _ => Self::Pending,
        }
    }
}

/// A glTF scene being loaded into the model tab.
#[derive(Component, Debug)]
pub struct ModelLoad {
    pub path: String,
    pub handle: Handle<Scene>,
    pub status: ModelStatus,
}

/// UI text shown while the model is still streaming in.
#[derive(Component)]
pub struct ModelPlaceholder;

/// Spawn the first scene of a glTF file under `parent`, with a loading placeholder.
pub fn spawn_model(
    commands: &mut Commands,
    asset_server: &AssetServer,
    parent: Entity,
    path: &str,
) -> Entity {
    let handle: Handle<Scene> =
        asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.to_string()));

    commands.spawn((
        Text::new(PLACEHOLDER_TEXT),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.85, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(50.0),
            left: Val::Percent(50.0),
            ..default()
        },
        ModelPlaceholder,
        SceneEntity,
    ));

    commands
        .spawn((
            Name::new(format!("Model {path}")),
            SceneRoot(handle.clone()),
            ModelLoad {
                path: path.to_string(),
                handle,
                status: ModelStatus::Pending,
            },
            ChildOf(parent),
        ))
        .id()
}

pub fn track_model_loading(
    asset_server: Res<AssetServer>,
    mut models: Query<&mut ModelLoad>,
    mut placeholders: Query<(&mut Text, &mut Node), With<ModelPlaceholder>>,
) {
    for mut model in &mut models {
        if model.status != ModelStatus::Pending {
            continue;
        }

        let state = asset_server.get_load_state(&model.handle);
        let status = ModelStatus::from_load_state(state.as_ref());
        match (status, state) {
            (ModelStatus::Loaded, _) => {
                info!("✓ Model loaded: {}", model.path);
                for (_, mut node) in &mut placeholders {
                    node.display = Display::None;
                }
            }
            (ModelStatus::Failed, Some(LoadState::Failed(err))) => {
                warn!("Model failed to load: {}: {err}", model.path);
                for (mut text, _) in &mut placeholders {
                    text.0 = format!("Could not load {}", model.path);
                }
            }
            _ => continue,
        }
        model.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_state_maps_to_status() {
        assert_eq!(ModelStatus::from_load_state(None), ModelStatus::Pending);
        assert_eq!(
            ModelStatus::from_load_state(Some(&LoadState::Loading)),
            ModelStatus::Pending
        );
        assert_eq!(
            ModelStatus::from_load_state(Some(&LoadState::Loaded)),
            ModelStatus::Loaded
        );
    }
}
