use bevy::prelude::*;

use crate::engine::core::app_state::LabTab;

/// Top-level entity owned by the mounted tab. Despawned, with its children, on unmount.
///
/// Only tag entities without a parent; children go with their root.
#[derive(Component, Debug, Default)]
pub struct SceneEntity;

/// Root of the mounted tab's 3D scene tree.
#[derive(Component, Debug)]
pub struct LabSceneRoot(pub LabTab);

pub fn spawn_scene_root(commands: &mut Commands, tab: LabTab) -> Entity {
    commands
        .spawn((
            Name::new(format!("{} scene", tab.label())),
            LabSceneRoot(tab),
            SceneEntity,
            Transform::default(),
            Visibility::default(),
        ))
        .id()
}

pub fn despawn_scene_entities(
    mut commands: Commands,
    scene_entities: Query<Entity, With<SceneEntity>>,
) {
    let mut count = 0;
    for entity in &scene_entities {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Unmounted scene: despawned {count} top-level entities");
}

pub struct SceneLifecyclePlugin;

impl Plugin for SceneLifecyclePlugin {
    fn build(&self, app: &mut App) {
        for tab in LabTab::ALL {
            app.add_systems(OnExit(tab), despawn_scene_entities);
        }
    }
}
