use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::engine::assets::lab_manifest::LabManifest;
use crate::engine::camera::viewport_camera::{ViewportCamera, camera_controller};
use crate::engine::core::app_state::{AppState, FpsText, LabTab, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, load_manifest_system, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::point_cloud::rebuild_point_clouds;
use crate::engine::render::clip_material::ClipMaterialPlugin;
use crate::engine::scene::gizmos::draw_axis_gizmo;
use crate::engine::scene::lifecycle::SceneLifecyclePlugin;
use crate::engine::systems::fps_tracking::fps_text_update_system;
// Scenes, tools and UI
use crate::scenes::LabScenesPlugin;
use crate::tools::LabToolsPlugin;
use crate::ui::LabUiPlugin;

const LOG_FILTER: &str = "info,wgpu=error,naga=warn,learning_lab=debug";
const BACKGROUND_COLOUR: Color = Color::srgb(0.043, 0.059, 0.086);

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_sub_state::<LabTab>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers LabManifest as a loadable asset type from *.manifest.json files.
        .add_plugins(JsonAssetPlugin::<LabManifest>::new(&["manifest.json"]))
        .add_plugins(ClipMaterialPlugin)
        .add_plugins(SceneLifecyclePlugin)
        .add_plugins(LabScenesPlugin)
        .add_plugins(LabToolsPlugin)
        .add_plugins(LabUiPlugin)
        .insert_resource(ClearColor(BACKGROUND_COLOUR));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ViewportCamera>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (load_manifest_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // Base runtime systems that run on all platforms and every tab.
    let runtime_systems = (camera_controller, draw_axis_gizmo, rebuild_point_clouds);

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, mut gizmo_store: ResMut<GizmoConfigStore>) {
    spawn_viewport_camera(&mut commands);

    // Keep the axis triad and measurement gizmos above scene geometry.
    let (gizmo_config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmo_config.depth_bias = -1.0;

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

fn spawn_viewport_camera(commands: &mut Commands) {
    let viewport = ViewportCamera::default();
    commands.spawn((
        Name::new("Viewport camera"),
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: LabManifest::default().camera_fov(),
            ..default()
        }),
        viewport.target_transform(),
    ));
}

fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.6, 0.65, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        level: Level::INFO,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
