//! Movement domain: contact classification into grounding facts.
//!
//! Translates the contact pairs touching a player's body this step into
//! semantic facts: whether the player is supported, how fast the supporting
//! surface moves, the slope of the surface, and how hard the landing was.
//! Pure contact-to-fact translation; the dead-state gate lives in the
//! motion systems, not here.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Health, Projectile};
use crate::movement::{Grounding, MovementTuning, Player, PlayerName};

pub(crate) fn classify_ground_contacts(
    collisions: Collisions,
    tuning: Res<MovementTuning>,
    projectiles: Query<(), With<Projectile>>,
    velocities: Query<&LinearVelocity>,
    mut players: Query<(Entity, &PlayerName, &mut Grounding, &mut Health), With<Player>>,
) {
    for (entity, name, mut grounding, mut health) in &mut players {
        // Fresh facts every step; a skipped frame must not leave stale state.
        *grounding = Grounding::default();

        for contact in collisions.collisions_with(entity) {
            let (other, player_is_first) = if contact.collider1 == entity {
                (contact.collider2, true)
            } else {
                (contact.collider1, false)
            };
            if projectiles.contains(other) {
                continue;
            }

            for manifold in &contact.manifolds {
                let n = surface_normal(manifold.normal, player_is_first);
                if !is_ground_normal(n) {
                    continue;
                }

                // Last qualifying contact wins. With several simultaneous
                // ground contacts the winner depends on iteration order;
                // nothing downstream may rely on which one it is.
                grounding.ground_velocity = velocities
                    .get(other)
                    .map(|v| v.0)
                    .unwrap_or(Vec2::ZERO);
                grounding.landed = true;
                grounding.ground_slope = ground_slope(n);

                let impulse: f32 = manifold.points.iter().map(|p| p.normal_impulse).sum();
                let speed = landing_speed(n.y * impulse, tuning.player_mass);
                grounding.landed_hard = speed > tuning.hard_landing_speed;
                if speed > tuning.squish_speed {
                    health.take_hit(1);
                    debug!("{} squished (landing speed {:.0})", name.0, speed);
                }
            }
        }
    }
}

/// Orient the manifold normal so it points out of the surface toward the
/// player, regardless of which side of the pair the player is on.
pub(crate) fn surface_normal(manifold_normal: Vec2, player_is_first: bool) -> Vec2 {
    if player_is_first {
        -manifold_normal
    } else {
        manifold_normal
    }
}

/// A contact supports the player only when the surface points upward
/// relative to it.
pub(crate) fn is_ground_normal(n: Vec2) -> bool {
    n.y > 0.0
}

/// Tangent of the surface angle. Safe: callers guard with
/// [`is_ground_normal`], which excludes `n.y == 0`.
pub(crate) fn ground_slope(n: Vec2) -> f32 {
    n.x / n.y
}

/// Impulse accumulated along the vertical this step, per unit of player mass.
pub(crate) fn landing_speed(impulse_y: f32, mass: f32) -> f32 {
    impulse_y / mass
}
