//! Level domain: spawning tiles and platform bodies from a loaded level.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::level::loader::{Level, PlatformSpec, load_level};
use crate::level::one_way::JumpThroughPlatform;
use crate::level::systems::WaypointPath;
use crate::movement::GameLayer;

const LEVEL_PATH: &str = "assets/levels/arena.ron";
/// Rounding radius of platform segment colliders.
const PLATFORM_RADIUS: f32 = 5.0;
const PLATFORM_FRICTION: f32 = 1.0;

pub const Z_PLAYERS: f32 = 10.0;

/// Spawn points carried over from the level file for the player bootstrap.
#[derive(Resource, Debug)]
pub struct LoadedLevel {
    pub spawn_points: Vec<Vec2>,
}

/// Load the level and build the world. A level that fails to load or
/// validate aborts startup; there is nothing sensible to recover to.
pub(crate) fn setup_level(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let level = match load_level(Path::new(LEVEL_PATH)) {
        Ok(level) => level,
        Err(e) => {
            error!("{}", e);
            panic!("cannot start without a level: {}", e);
        }
    };
    info!(
        "Loaded level: {}x{} tiles, {} layers, {} platforms",
        level.width,
        level.height,
        level.layers.len(),
        level.platforms.len()
    );

    spawn_tiles(&mut commands, &level, &asset_server, &mut layouts);
    for platform in &level.platforms {
        spawn_platform(&mut commands, platform);
    }

    commands.insert_resource(LoadedLevel {
        spawn_points: level.spawn_points.clone(),
    });
}

fn spawn_tiles(
    commands: &mut Commands,
    level: &Level,
    asset_server: &AssetServer,
    layouts: &mut Assets<TextureAtlasLayout>,
) {
    let image = asset_server.load(level.tileset.clone());
    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(level.tile_size),
        level.tileset_columns,
        level.tileset_rows,
        None,
        None,
    ));
    let tile_size = level.tile_size as f32;

    for (layer_index, layer) in level.layers.iter().enumerate() {
        for (row_index, row) in layer.rows.iter().enumerate() {
            for (col_index, &tile_id) in row.iter().enumerate() {
                if tile_id == 0 {
                    continue; // empty cell
                }
                // Ids are 1-indexed in the file; range-checked by the loader
                let atlas_index = (tile_id - 1) as usize;
                commands.spawn((
                    Sprite::from_atlas_image(
                        image.clone(),
                        TextureAtlas {
                            layout: layout.clone(),
                            index: atlas_index,
                        },
                    ),
                    Transform::from_xyz(
                        col_index as f32 * tile_size + tile_size / 2.0,
                        row_index as f32 * tile_size + tile_size / 2.0,
                        layer_index as f32,
                    ),
                ));
            }
        }
    }
}

fn spawn_platform(commands: &mut Commands, platform: &PlatformSpec) {
    // One rounded-capsule part per polyline segment, all on a single body
    let parts: Vec<(Vec2, f32, Collider)> = platform
        .points
        .windows(2)
        .map(|pair| {
            (
                Vec2::ZERO,
                0.0,
                Collider::capsule_endpoints(PLATFORM_RADIUS, pair[0], pair[1]),
            )
        })
        .collect();

    let body = if platform.waypoints.is_empty() {
        RigidBody::Static
    } else {
        RigidBody::Kinematic
    };

    let mut entity = commands.spawn((
        body,
        Collider::compound(parts),
        Friction::new(PLATFORM_FRICTION),
        Transform::from_translation(platform.origin.extend(0.0)),
        CollisionLayers::new(
            if platform.jump_through {
                GameLayer::JumpThrough
            } else {
                GameLayer::Terrain
            },
            [GameLayer::Player, GameLayer::Projectile],
        ),
    ));

    if platform.jump_through {
        entity.insert((JumpThroughPlatform, ActiveCollisionHooks::FILTER_PAIRS));
    }
    if !platform.waypoints.is_empty() {
        entity.insert((
            WaypointPath::new(platform.waypoints.clone(), platform.speed),
            LinearVelocity::default(),
        ));
    }
}
