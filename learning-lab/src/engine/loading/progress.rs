use bevy::prelude::*;
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_ready: bool,
    pub manifest_fell_back: bool,
}
