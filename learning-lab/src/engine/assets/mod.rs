//! Asset type definitions for the lab configuration.

/// Lab manifest asset, loaded from JSON, with validation.
///
/// Carries the model and panorama paths, point cloud size, instanced grid layout and camera pose.
pub mod lab_manifest;
