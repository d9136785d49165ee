//! Movement domain: player bootstrap from the loaded level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::audio::FootstepTimer;
use crate::combat::{CombatTuning, Health, ShotCooldown};
use crate::level::{LoadedLevel, Z_PLAYERS};
use crate::movement::{
    GameLayer, Grounding, JumpState, MoveIntent, MovementTuning, Player, PlayerFacing, PlayerIndex,
    PlayerKeys, PlayerName, SpawnPoint,
};
use crate::sprites::{AnimationController, SHEET_CELL, SHEET_COLUMNS, SHEET_ROWS};

pub(crate) const PLAYER_COLLIDER_RADIUS: f32 = 14.0;
const PLAYER_FRICTION: f32 = 2.0;
const PLAYER_COUNT: usize = 2;

const PLAYER_BINDINGS: [PlayerKeys; 4] = [
    PlayerKeys {
        up: KeyCode::ArrowUp,
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        down: KeyCode::ArrowDown,
        shoot: KeyCode::Space,
    },
    PlayerKeys {
        up: KeyCode::KeyW,
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        down: KeyCode::KeyS,
        shoot: KeyCode::KeyE,
    },
    PlayerKeys {
        up: KeyCode::KeyI,
        left: KeyCode::KeyJ,
        right: KeyCode::KeyL,
        down: KeyCode::KeyK,
        shoot: KeyCode::KeyO,
    },
    PlayerKeys {
        up: KeyCode::Numpad5,
        left: KeyCode::Numpad1,
        right: KeyCode::Numpad3,
        down: KeyCode::Numpad2,
        shoot: KeyCode::Numpad6,
    },
];

const PLAYER_SKINS: [&str; 4] = [
    "sprites/cat_gun_lightning.png",
    "sprites/cat_gun_farmboy.png",
    "sprites/cat_gun_tiger.png",
    "sprites/cat_gun_sword.png",
];

/// Spawn the local players at the level's spawn points. Runs in
/// `PostStartup` so the level loader has already populated [`LoadedLevel`].
pub(crate) fn spawn_players(
    mut commands: Commands,
    level: Res<LoadedLevel>,
    tuning: Res<MovementTuning>,
    combat_tuning: Res<CombatTuning>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(SHEET_CELL),
        SHEET_COLUMNS,
        SHEET_ROWS,
        None,
        None,
    ));

    for index in 0..PLAYER_COUNT.min(PLAYER_BINDINGS.len()) {
        let spawn = level
            .spawn_points
            .get(index)
            .copied()
            .unwrap_or(Vec2::new(100.0, 100.0));
        let name = format!("Player{}", index + 1);
        info!("Spawning {} at {:?}", name, spawn);

        commands.spawn((
            // Identity & movement state
            (
                Player,
                PlayerIndex(index),
                PlayerName(name),
                PLAYER_BINDINGS[index],
                SpawnPoint(spawn),
                Grounding::default(),
                JumpState::new(tuning.max_jumps),
                MoveIntent::default(),
                PlayerFacing::default(),
            ),
            // Combat & presentation state
            (
                Health::new(combat_tuning.max_health),
                ShotCooldown::default(),
                AnimationController::default(),
                FootstepTimer::default(),
            ),
            // Rendering
            Sprite::from_atlas_image(
                asset_server.load(PLAYER_SKINS[index]),
                TextureAtlas {
                    layout: layout.clone(),
                    index: 0,
                },
            ),
            Transform::from_translation(spawn.extend(Z_PLAYERS)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::circle(PLAYER_COLLIDER_RADIUS),
                LockedAxes::ROTATION_LOCKED,
                Mass(tuning.player_mass),
                Friction::new(PLAYER_FRICTION),
                LinearVelocity::default(),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Terrain,
                        GameLayer::JumpThrough,
                        GameLayer::Player,
                        GameLayer::Projectile,
                    ],
                ),
            ),
        ));
    }
}
