use bevy::prelude::*;

/// Lowest clip height the slider can reach, in world units.
pub const CLIP_HEIGHT_MIN: f32 = -5.0;

/// Highest clip height the slider can reach, in world units.
pub const CLIP_HEIGHT_MAX: f32 = 5.0;

/// Slider increments per world unit (a step of 0.1).
pub const CLIP_HEIGHT_STEPS_PER_UNIT: f32 = 10.0;

/// Clip height the lab starts with.
pub const CLIP_HEIGHT_DEFAULT: f32 = 0.0;

/// Side length of the translucent indicator quad drawn at the clip height.
pub const CLIP_INDICATOR_SIZE: f32 = 20.0;

/// Opacity of the clip indicator quad.
pub const CLIP_INDICATOR_OPACITY: f32 = 0.3;

/// Colour of the clip indicator quad.
pub const CLIP_INDICATOR_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);
