//! Runtime diagnostics shared by every scene.

/// FPS overlay updates for native builds.
///
/// Reads the smoothed frame rate from the diagnostics store into the overlay text.
pub mod fps_tracking;
