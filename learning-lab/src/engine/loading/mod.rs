//! Asset loading for the lab manifest and the scene models.
//!
//! Manages the manifest load with a fallback to built-in defaults, and tracks
//! the glTF model load so the placeholder can be hidden or replaced.

/// Lab manifest loading with validation and default fallback.
///
/// Inserts the accepted manifest as a resource before scenes are mounted.
pub mod manifest_loader;

/// glTF model spawning and load-state tracking for the model scene.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
