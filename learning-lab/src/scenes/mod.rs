//! The three lab scenes, one per tab.
//!
//! Each scene spawns under its own `LabSceneRoot` on `OnEnter` of its tab and
//! is torn down by the scene lifecycle on `OnExit`. The camera is reset to the
//! manifest pose on every mount.

use bevy::prelude::*;

use crate::engine::camera::viewport_camera::reset_viewport_camera;
use crate::engine::core::app_state::{LabTab, log_tab_mount};
use crate::engine::instancing::animate_instanced_grid;
use crate::engine::loading::model_loader::track_model_loading;

/// glTF model with a panoramic backdrop and soft ambient light.
pub mod gltf;

/// Panorama, boxes, point cloud, clip indicator and measurement targets.
pub mod pano_measure;

/// Lit ground, grid helper and the animated instanced grid.
pub mod pbr;

pub struct LabScenesPlugin;

impl Plugin for LabScenesPlugin {
    fn build(&self, app: &mut App) {
        for tab in LabTab::ALL {
            app.add_systems(OnEnter(tab), (reset_viewport_camera, log_tab_mount));
        }

        app.add_systems(OnEnter(LabTab::Pbr), pbr::spawn_pbr_scene)
            .add_systems(OnEnter(LabTab::Gltf), gltf::spawn_gltf_scene)
            .add_systems(
                OnEnter(LabTab::PanoMeasure),
                pano_measure::spawn_pano_measure_scene,
            )
            .add_systems(
                Update,
                animate_instanced_grid.run_if(in_state(LabTab::Pbr)),
            )
            .add_systems(Update, track_model_loading.run_if(in_state(LabTab::Gltf)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use std::collections::HashSet;

    use crate::engine::assets::lab_manifest::LabManifest;
    use crate::engine::camera::viewport_camera::ViewportCamera;
    use crate::engine::core::app_state::AppState;
    use crate::engine::instancing::GridInstance;
    use crate::engine::render::clip_material::ClipMaterial;
    use crate::engine::scene::grid::GroundGrid;
    use crate::engine::scene::lifecycle::{LabSceneRoot, SceneLifecyclePlugin};
    use crate::engine::scene::panorama::PanoramaBackdrop;
    use crate::tools::LabToolsPlugin;
    use crate::tools::clipping::ClipIndicator;
    use crate::tools::measure::{MeasureTool, MeasureVisual};
    use crate::ui::layout::spawn_pano_hud;
    use crate::ui::state::PanoHud;

    /// Lab entered on the PBR tab, plus the entities that outlive every scene.
    fn mounted_lab() -> (App, HashSet<Entity>) {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_asset::<ClipMaterial>()
            .init_asset::<Image>()
            .init_asset::<Scene>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<ViewportCamera>()
            .insert_resource(LabManifest::default())
            .init_state::<AppState>()
            .add_sub_state::<LabTab>()
            .add_plugins((SceneLifecyclePlugin, LabScenesPlugin, LabToolsPlugin))
            .add_systems(OnEnter(LabTab::PanoMeasure), spawn_pano_hud);

        app.world_mut().spawn(Name::new("Viewport camera"));
        app.update();
        let persistent = all_entities(&app);

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Running);
        app.update();
        (app, persistent)
    }

    fn all_entities(app: &App) -> HashSet<Entity> {
        app.world().iter_entities().map(|e| e.id()).collect()
    }

    fn switch_to(app: &mut App, tab: LabTab) -> HashSet<Entity> {
        let before = all_entities(app);
        app.world_mut().resource_mut::<NextState<LabTab>>().set(tab);
        app.update();
        assert_eq!(*app.world().resource::<State<LabTab>>().get(), tab);
        before
    }

    fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query_filtered::<Entity, F>().iter(world).count()
    }

    fn assert_none_left(
        app: &App,
        previous: &HashSet<Entity>,
        persistent: &HashSet<Entity>,
    ) {
        let entities = app.world().entities();
        for entity in previous.difference(persistent) {
            assert!(!entities.contains(*entity), "{entity} outlived its scene");
        }
        assert!(persistent.iter().all(|entity| entities.contains(*entity)));
    }

    #[test]
    fn every_tab_switch_leaves_only_the_new_scene() {
        let (mut app, persistent) = mounted_lab();
        assert_eq!(count::<With<GroundGrid>>(&mut app), 1);
        assert_eq!(count::<With<GridInstance>>(&mut app), 100);

        let pbr_scene = switch_to(&mut app, LabTab::PanoMeasure);
        assert_none_left(&app, &pbr_scene, &persistent);
        assert_eq!(count::<With<GridInstance>>(&mut app), 0);
        assert_eq!(count::<With<DirectionalLight>>(&mut app), 0);
        assert_eq!(count::<With<PanoHud>>(&mut app), 1);
        assert_eq!(count::<With<ClipIndicator>>(&mut app), 1);
        assert_eq!(count::<With<PanoramaBackdrop>>(&mut app), 1);

        {
            let mut tool = app.world_mut().resource_mut::<MeasureTool>();
            tool.record(Vec3::ZERO);
            tool.record(Vec3::new(3.0, 4.0, 0.0));
        }
        app.update();
        assert_eq!(count::<With<MeasureVisual>>(&mut app), 3);

        let pano_scene = switch_to(&mut app, LabTab::Pbr);
        assert_none_left(&app, &pano_scene, &persistent);
        assert_eq!(count::<With<MeasureVisual>>(&mut app), 0);
        assert_eq!(count::<With<PointLight>>(&mut app), 0);
        assert_eq!(count::<With<PanoHud>>(&mut app), 0);
        assert_eq!(count::<With<PanoramaBackdrop>>(&mut app), 0);
        assert!(app.world().resource::<MeasureTool>().points().is_empty());

        let pbr_scene = switch_to(&mut app, LabTab::Gltf);
        assert_none_left(&app, &pbr_scene, &persistent);
        assert_eq!(count::<With<GridInstance>>(&mut app), 0);
        assert_eq!(count::<With<GroundGrid>>(&mut app), 0);
        assert_eq!(count::<With<DirectionalLight>>(&mut app), 0);
        assert_eq!(count::<With<PanoramaBackdrop>>(&mut app), 1);

        let world = app.world_mut();
        let roots: Vec<LabTab> = world
            .query::<&LabSceneRoot>()
            .iter(world)
            .map(|root| root.0)
            .collect();
        assert_eq!(roots, vec![LabTab::Gltf]);
    }
}
