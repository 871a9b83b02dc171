//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with materials, scene plugins, manifest loading
/// and platform-specific configurations.
pub mod app_setup;

/// Application state machine and the tab sub-state.
///
/// Moves from manifest loading to running, where exactly one scene tab is mounted.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
