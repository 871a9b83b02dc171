//! Interactive tools for the measurement scene.
//!
//! Provides pointer raycasting against pickable surfaces, a two-point
//! distance measurement and the height-driven clipping plane.
//!
//! ## Measure Tool
//! - **Activation**: always on while the "360° + Measure" tab is mounted
//! - **Workflow**:
//!   1. Left press casts a ray from the camera through the cursor
//!   2. The nearest `PickSurface` hit is recorded
//!   3. Only the two most recent points are kept; a third pick drops the oldest
//!   4. With two points the distance is shown and a line is drawn between them
//!   5. Markers and line are parented to the scene root and clip like the scene
//! - **Features**:
//!   - Presses over UI nodes are ignored
//!   - Misses leave the current points untouched
//!   - State is cleared when the tab unmounts
//!
//! ## Clipping Plane
//! - **Control**: HUD slider (native and WASM) or Up/Down arrows (native)
//! - **Behaviour**:
//!   - `ClipHeight` is clamped to [-5, 5] and snapped to 0.1 steps
//!   - The plane `(0, 1, 0, -h)` is written into every `ClipTarget` material
//!     found by a depth-first walk from the scene root
//!   - Re-applied on height change and when new clip-capable meshes appear
//!   - A translucent indicator quad follows the height and catches picks
//!
//! ```text
//! Slider / arrow keys
//!   └─> ClipHeight (resource, persists across tabs)
//!       ├─> apply_clip_plane::<ClipMaterial>()
//!       │   └─> walk_depth_first(LabSceneRoot) -> set_clip_plane()
//!       └─> follow_clip_indicator()
//! ```

use bevy::prelude::*;

use crate::engine::core::app_state::LabTab;
use crate::engine::render::clip_material::ClipMaterial;

/// Height-driven clipping plane state, traversal and indicator.
///
/// Writes one plane into every clip-capable material of the mounted scene.
pub mod clipping;

/// Two-point distance measurement with marker and line visuals.
///
/// Rolling two-point window fed by pointer raycasts.
pub mod measure;

/// Camera rays from cursor positions and ray–box intersection.
pub mod ray;

use clipping::{ClipHeight, apply_clip_plane, follow_clip_indicator};
use measure::{MeasureTool, measure_tool_system, reset_measure_tool, update_measure_render};

pub struct LabToolsPlugin;

impl Plugin for LabToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MeasureTool>()
            .init_resource::<ClipHeight>()
            .add_systems(
                Update,
                (
                    (measure_tool_system, update_measure_render).chain(),
                    follow_clip_indicator,
                )
                    .run_if(in_state(LabTab::PanoMeasure)),
            )
            // Runs in every tab, scenes without ClipMaterial meshes are left alone
            .add_systems(
                Update,
                apply_clip_plane::<ClipMaterial>.after(update_measure_render),
            )
            .add_systems(OnExit(LabTab::PanoMeasure), reset_measure_tool);
    }
}
