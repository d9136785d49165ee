//! Combat domain: shooting, projectile lifetime, damage, and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::PlaySound;
use crate::combat::components::{Health, Invincible, Projectile, ShotCooldown};
use crate::combat::events::DamageEvent;
use crate::combat::resources::CombatTuning;
use crate::level::Z_PLAYERS;
use crate::movement::{
    Facing, GameLayer, HeldKeys, JumpState, MovementTuning, Player, PlayerFacing, PlayerKeys,
    PlayerName, SpawnPoint,
};
use crate::sprites::{AnimationController, MotionAnimation};

pub(crate) fn tick_cooldowns(mut players: Query<&mut ShotCooldown, With<Player>>) {
    for mut cooldown in &mut players {
        cooldown.tick();
    }
}

/// Age every projectile one step and retire the expired ones. Runs for dead
/// players' shots too; the dead-state sink stops new actions, not shots
/// already in flight.
pub(crate) fn age_projectiles(
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut Projectile)>,
) {
    for (entity, mut projectile) in &mut projectiles {
        if !projectile.is_active() {
            continue;
        }
        projectile.tick();
        if projectile.expired() {
            destroy_projectile(&mut commands, entity, &mut projectile);
        }
    }
}

/// Level-triggered shooting: fires every step the key is held once the
/// cooldown has run out.
pub(crate) fn process_shooting(
    mut commands: Commands,
    held_keys: Res<HeldKeys>,
    tuning: Res<CombatTuning>,
    mut sounds: MessageWriter<PlaySound>,
    mut players: Query<
        (
            Entity,
            &PlayerKeys,
            &PlayerFacing,
            &Position,
            &LinearVelocity,
            &Health,
            &mut ShotCooldown,
        ),
        With<Player>,
    >,
) {
    for (entity, keys, facing, position, velocity, health, mut cooldown) in &mut players {
        if health.is_dead() {
            continue;
        }
        if !held_keys.held(keys.shoot) || !cooldown.ready() {
            continue;
        }

        let spawn_at = position.0 + muzzle_offset(facing.0);
        commands.spawn((
            Projectile::new(entity, tuning.projectile_ttl),
            Sprite {
                color: Color::srgb(0.05, 0.05, 0.05),
                custom_size: Some(Vec2::splat(tuning.projectile_radius * 2.0)),
                ..default()
            },
            Transform::from_translation(spawn_at.extend(Z_PLAYERS)),
            (
                RigidBody::Dynamic,
                Collider::circle(tuning.projectile_radius),
                Friction::new(0.0),
                // Straight-line, non-ballistic flight
                GravityScale(0.0),
                LinearVelocity(velocity.0 + muzzle_velocity(facing.0, tuning.projectile_speed)),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Projectile,
                    [GameLayer::Player, GameLayer::Terrain],
                ),
            ),
        ));

        cooldown.0 = tuning.shot_cooldown;
        sounds.write(PlaySound::Gunshot);
    }
}

/// Resolve projectile-vs-player contacts reported by the last physics step.
pub(crate) fn detect_projectile_hits(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut projectiles: Query<&mut Projectile>,
    players: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile_entity, target) in pairs {
            let Ok(mut projectile) = projectiles.get_mut(projectile_entity) else {
                continue;
            };
            if !hit_connects(
                projectile.owner,
                target,
                players.contains(target),
                projectile.is_active(),
            ) {
                continue;
            }

            damage_events.write(DamageEvent {
                source: projectile.owner,
                target,
                amount: 1,
            });
            destroy_projectile(&mut commands, projectile_entity, &mut projectile);
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut targets: Query<(&mut Health, &PlayerName, Has<Invincible>), With<Player>>,
) {
    for event in damage_events.read() {
        let Ok((mut health, name, invincible)) = targets.get_mut(event.target) else {
            continue;
        };
        if invincible || health.is_dead() {
            continue;
        }
        health.take_hit(event.amount);
        if health.is_dead() {
            info!("{} was taken out", name.0);
        } else {
            debug!("{} hit, {} health left", name.0, health.current);
        }
    }
}

/// Bring a player back once the death animation has played out.
pub(crate) fn respawn_players(
    tuning: Res<MovementTuning>,
    mut players: Query<
        (
            &mut Health,
            &mut Position,
            &mut LinearVelocity,
            &mut JumpState,
            &mut ShotCooldown,
            &AnimationController,
            &SpawnPoint,
            &PlayerName,
        ),
        With<Player>,
    >,
) {
    for (mut health, mut position, mut velocity, mut jumps, mut cooldown, animation, spawn, name) in
        &mut players
    {
        if !health.is_dead() {
            continue;
        }
        if animation.current != MotionAnimation::Death || !animation.finished {
            continue;
        }
        health.reset();
        position.0 = spawn.0;
        velocity.0 = Vec2::ZERO;
        jumps.refill(tuning.max_jumps);
        cooldown.0 = 0;
        info!("{} respawned", name.0);
    }
}

/// A shot connects only with a player other than its owner, and only while
/// it is still live.
pub(crate) fn hit_connects(
    owner: Entity,
    target: Entity,
    target_is_player: bool,
    active: bool,
) -> bool {
    target_is_player && target != owner && active
}

/// Remove a projectile from play. Safe to call twice: the active flag
/// latches and the despawn tolerates an already-removed entity.
fn destroy_projectile(commands: &mut Commands, entity: Entity, projectile: &mut Projectile) {
    if projectile.deactivate() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.try_despawn();
        }
    }
}

/// Shots leave from the gun barrel, which sits ahead of the body only when
/// facing right; the sprite is drawn mirrored, not offset.
pub(crate) fn muzzle_offset(facing: Facing) -> Vec2 {
    match facing {
        Facing::Right => Vec2::new(20.0, -5.0),
        Facing::Left => Vec2::new(0.0, -5.0),
    }
}

pub(crate) fn muzzle_velocity(facing: Facing, speed: f32) -> Vec2 {
    match facing {
        Facing::Right => Vec2::new(speed, 0.0),
        Facing::Left => Vec2::new(-speed, 0.0),
    }
}
