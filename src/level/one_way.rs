//! Level domain: the jump-through platform gate.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::Player;

/// Marker for platform segments that are only conditionally solid.
#[derive(Component, Debug)]
pub struct JumpThroughPlatform;

/// Collision hook gating player contacts against jump-through segments.
/// Stateless: the decision is re-derived from the player's instantaneous
/// vertical velocity on every evaluation.
#[derive(SystemParam)]
pub struct JumpThroughHooks<'w, 's> {
    platforms: Query<'w, 's, (), With<JumpThroughPlatform>>,
    players: Query<'w, 's, &'static LinearVelocity, With<Player>>,
}

impl CollisionHooks for JumpThroughHooks<'_, '_> {
    fn filter_pairs(&self, collider1: Entity, collider2: Entity, _commands: &mut Commands) -> bool {
        let player = if self.platforms.contains(collider1) {
            collider2
        } else if self.platforms.contains(collider2) {
            collider1
        } else {
            return true;
        };
        let Ok(velocity) = self.players.get(player) else {
            // Non-player contacts (projectiles don't collide with these
            // segments anyway) stay solid
            return true;
        };
        platform_contact_is_solid(velocity.y)
    }
}

/// Solid only while the player is falling onto the platform; a rising or
/// stationary player passes through from below.
pub(crate) fn platform_contact_is_solid(vertical_velocity: f32) -> bool {
    vertical_velocity < 0.0
}
