//! Level domain: tile grid, platforms, and the jump-through gate.

mod data;
mod loader;
mod one_way;
mod spawn;
mod systems;


pub use data::{LevelDef, PlatformDef, TileLayerDef};
pub use loader::{Level, LevelLoadError, load_level};
pub use one_way::{JumpThroughHooks, JumpThroughPlatform};
pub use spawn::{LoadedLevel, Z_PLAYERS};
pub use systems::WaypointPath;

use bevy::prelude::*;

use crate::core::FramePhase;
use crate::level::spawn::setup_level;
use crate::level::systems::move_platforms;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_level)
            .add_systems(FixedUpdate, move_platforms.in_set(FramePhase::Platforms));
    }
}
