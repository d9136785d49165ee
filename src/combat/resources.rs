//! Combat domain: tuning resource.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    pub max_health: i32,
    /// Frames between shots.
    pub shot_cooldown: u32,
    /// Steps a projectile lives without hitting anything.
    pub projectile_ttl: i32,
    /// Muzzle speed relative to the shooter.
    pub projectile_speed: f32,
    pub projectile_radius: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            max_health: 3,
            shot_cooldown: 10,
            projectile_ttl: 40,
            projectile_speed: 500.0,
            projectile_radius: 3.0,
        }
    }
}
