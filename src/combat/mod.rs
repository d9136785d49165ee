//! Combat domain: projectiles, health, and respawn.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Health, Invincible, Projectile, ShotCooldown};
pub use events::DamageEvent;
pub use resources::CombatTuning;

use bevy::prelude::*;

use crate::core::FramePhase;
use crate::combat::systems::{
    age_projectiles, apply_damage, detect_projectile_hits, process_shooting, respawn_players,
    tick_cooldowns,
};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .add_message::<DamageEvent>()
            .add_systems(
                FixedUpdate,
                (age_projectiles, tick_cooldowns).in_set(FramePhase::Upkeep),
            )
            .add_systems(
                FixedUpdate,
                (
                    process_shooting,
                    detect_projectile_hits,
                    apply_damage,
                    respawn_players,
                )
                    .chain()
                    .in_set(FramePhase::Combat),
            );
    }
}
