//! Material extensions used by the lab scenes.

/// Clip-plane PBR material extension and the `ClipTarget` capability.
///
/// Wraps `StandardMaterial` with a WGSL fragment stage that discards geometry below a plane.
pub mod clip_material;
