//! Scene furniture and lifecycle shared by the lab tabs.
//!
//! Provides the ground grid helper, the corner axis gizmo, the panorama
//! backdrop and the mount/unmount bookkeeping for scene entities.

/// Axis triad gizmo pinned to the viewport corner.
///
/// Draws world X, Y and Z arrows just in front of the camera so orientation stays readable.
pub mod gizmos;

/// Line-list grid helper mesh with a highlighted centre cross.
pub mod grid;

/// Scene root markers and teardown of everything a tab spawned.
pub mod lifecycle;

/// Equirectangular panorama shown on an inside-out sphere.
pub mod panorama;
