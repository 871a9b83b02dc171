//! Viewport camera system for scene navigation.
//!
//! Provides orbit camera controls around a focus point with smooth
//! interpolation, mouse input handling and a per-scene reset.

/// Viewport camera resource and controller system for scene navigation.
pub mod viewport_camera;
