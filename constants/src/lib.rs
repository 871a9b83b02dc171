//! Shared tuning values for the learning lab: render settings, scene layout
//! and clip plane bounds.

pub mod clipping;
pub mod render_settings;
pub mod scene_layout;
