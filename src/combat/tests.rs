//! Combat domain: unit tests for health, cooldowns, projectile lifetime, and
//! hit resolution.

use avian2d::prelude::{LinearVelocity, Position};
use bevy::prelude::{App, Entity, Update, Vec2, World};

use super::systems::{apply_damage, hit_connects, muzzle_offset, muzzle_velocity, respawn_players};
use super::{CombatTuning, DamageEvent, Health, Invincible, Projectile, ShotCooldown};
use crate::movement::{Facing, JumpState, MovementTuning, Player, PlayerName, SpawnPoint};
use crate::sprites::{AnimationController, MotionAnimation};

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[test]
fn test_health_dead_only_below_zero() {
    let mut health = Health::new(3);
    health.take_hit(1);
    assert_eq!(health.current, 2);
    assert!(!health.is_dead());

    health.take_hit(1);
    health.take_hit(1);
    // Zero health is still standing
    assert_eq!(health.current, 0);
    assert!(!health.is_dead());

    health.take_hit(1);
    assert!(health.is_dead());
}

#[test]
fn test_health_percent_never_negative() {
    let mut health = Health::new(3);
    health.take_hit(5);
    assert_eq!(health.percent(), 0.0);
    health.reset();
    assert_eq!(health.percent(), 1.0);
}

// -----------------------------------------------------------------------------
// Shot cooldown
// -----------------------------------------------------------------------------

#[test]
fn test_cooldown_floors_at_zero() {
    let mut cooldown = ShotCooldown(2);
    assert!(!cooldown.ready());
    cooldown.tick();
    cooldown.tick();
    assert!(cooldown.ready());
    cooldown.tick();
    assert_eq!(cooldown.0, 0);
}

// -----------------------------------------------------------------------------
// Projectile lifetime
// -----------------------------------------------------------------------------

#[test]
fn test_projectile_expires_when_ttl_goes_negative() {
    let tuning = CombatTuning::default();
    let mut projectile = Projectile::new(Entity::PLACEHOLDER, tuning.projectile_ttl);

    // 40 updates take the TTL to exactly zero, still alive
    for _ in 0..40 {
        projectile.tick();
        assert!(!projectile.expired());
    }

    // The 41st update is the first with a negative TTL
    projectile.tick();
    assert!(projectile.expired());
}

#[test]
fn test_projectile_destruction_is_idempotent() {
    let mut projectile = Projectile::new(Entity::PLACEHOLDER, 40);
    assert!(projectile.is_active());
    // First deactivation wins, the second is a no-op
    assert!(projectile.deactivate());
    assert!(!projectile.deactivate());
    assert!(!projectile.is_active());
}

// -----------------------------------------------------------------------------
// Hit resolution
// -----------------------------------------------------------------------------

#[test]
fn test_shot_connects_only_with_opposing_players() {
    let mut world = World::new();
    let owner = world.spawn_empty().id();
    let target = world.spawn_empty().id();

    assert!(hit_connects(owner, target, true, true));
    // Shots never hurt their owner
    assert!(!hit_connects(owner, owner, true, true));
    // Terrain and other non-player colliders do not take damage
    assert!(!hit_connects(owner, target, false, true));
    // A shot that already connected or expired is spent
    assert!(!hit_connects(owner, target, true, false));
}

#[test]
fn test_one_hit_costs_one_health() {
    let mut app = App::new();
    app.add_message::<DamageEvent>();
    app.add_systems(Update, apply_damage);

    let shooter = app
        .world_mut()
        .spawn((Player, PlayerName("Player1".to_string()), Health::new(3)))
        .id();
    let target = app
        .world_mut()
        .spawn((Player, PlayerName("Player2".to_string()), Health::new(3)))
        .id();
    app.world_mut().write_message(DamageEvent {
        source: shooter,
        target,
        amount: 1,
    });
    app.update();

    assert_eq!(app.world().get::<Health>(target).unwrap().current, 2);
    assert_eq!(app.world().get::<Health>(shooter).unwrap().current, 3);
}

#[test]
fn test_invincible_players_take_no_damage() {
    let mut app = App::new();
    app.add_message::<DamageEvent>();
    app.add_systems(Update, apply_damage);

    let shooter = app.world_mut().spawn_empty().id();
    let target = app
        .world_mut()
        .spawn((
            Player,
            PlayerName("Player2".to_string()),
            Health::new(3),
            Invincible,
        ))
        .id();
    app.world_mut().write_message(DamageEvent {
        source: shooter,
        target,
        amount: 1,
    });
    app.update();

    assert_eq!(app.world().get::<Health>(target).unwrap().current, 3);
}

// -----------------------------------------------------------------------------
// Respawn
// -----------------------------------------------------------------------------

#[test]
fn test_respawn_restores_the_full_loadout() {
    let mut app = App::new();
    app.insert_resource(MovementTuning::default());
    app.add_systems(Update, respawn_players);

    let spawn = Vec2::new(160.0, 320.0);
    let player = app
        .world_mut()
        .spawn((
            Player,
            PlayerName("Player1".to_string()),
            Health { current: -1, max: 3 },
            ShotCooldown(7),
            JumpState { remaining: 0 },
            Position(Vec2::new(50.0, 10.0)),
            LinearVelocity(Vec2::new(30.0, -40.0)),
            SpawnPoint(spawn),
            AnimationController {
                current: MotionAnimation::Death,
                frame: 6,
                timer: 0.0,
                finished: true,
            },
        ))
        .id();
    app.update();

    let world = app.world();
    assert_eq!(world.get::<Health>(player).unwrap().current, 3);
    assert_eq!(world.get::<ShotCooldown>(player).unwrap().0, 0);
    assert_eq!(world.get::<JumpState>(player).unwrap().remaining, 2);
    assert_eq!(world.get::<Position>(player).unwrap().0, spawn);
    assert_eq!(world.get::<LinearVelocity>(player).unwrap().0, Vec2::ZERO);
}

#[test]
fn test_no_respawn_before_the_death_animation_ends() {
    let mut app = App::new();
    app.insert_resource(MovementTuning::default());
    app.add_systems(Update, respawn_players);

    let player = app
        .world_mut()
        .spawn((
            Player,
            PlayerName("Player1".to_string()),
            Health { current: -1, max: 3 },
            ShotCooldown(0),
            JumpState { remaining: 0 },
            Position(Vec2::new(50.0, 10.0)),
            LinearVelocity(Vec2::ZERO),
            SpawnPoint(Vec2::new(160.0, 320.0)),
            AnimationController {
                current: MotionAnimation::Death,
                frame: 2,
                timer: 0.0,
                finished: false,
            },
        ))
        .id();
    app.update();

    let world = app.world();
    assert_eq!(world.get::<Health>(player).unwrap().current, -1);
    assert_eq!(world.get::<Position>(player).unwrap().0, Vec2::new(50.0, 10.0));
}

// -----------------------------------------------------------------------------
// Muzzle placement
// -----------------------------------------------------------------------------

#[test]
fn test_muzzle_follows_facing() {
    assert_eq!(muzzle_velocity(Facing::Right, 500.0), Vec2::new(500.0, 0.0));
    assert_eq!(muzzle_velocity(Facing::Left, 500.0), Vec2::new(-500.0, 0.0));
    // The barrel leads the body only when facing right
    assert_eq!(muzzle_offset(Facing::Right), Vec2::new(20.0, -5.0));
    assert_eq!(muzzle_offset(Facing::Left), Vec2::new(0.0, -5.0));
}
