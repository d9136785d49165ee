//! Movement domain: grounding classification and the motion controller.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    Facing, GameLayer, Grounding, JumpState, MoveIntent, Player, PlayerFacing, PlayerIndex,
    PlayerKeys, PlayerName, SpawnPoint,
};
pub use resources::{HeldKeys, MovementTuning};

use bevy::prelude::*;

use crate::core::FramePhase;
use crate::movement::bootstrap::spawn_players;
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump, clamp_fall_speed, classify_ground_contacts,
    refill_jumps, tick_held_keys,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<HeldKeys>()
            .add_systems(PostStartup, spawn_players)
            .add_systems(
                FixedUpdate,
                tick_held_keys.in_set(FramePhase::Input),
            )
            .add_systems(
                FixedUpdate,
                classify_ground_contacts.in_set(FramePhase::Contacts),
            )
            .add_systems(
                FixedUpdate,
                (
                    refill_jumps,
                    apply_jump,
                    apply_horizontal_movement,
                    clamp_fall_speed,
                )
                    .chain()
                    .in_set(FramePhase::Motion),
            );
    }
}
