//! Level domain: loading and validation of RON level files.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{LevelDef, PlatformDef};

/// Error type for level loading failures. Any of these is fatal at startup;
/// a malformed level cannot be meaningfully played.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for LevelLoadError {}

/// A level converted into world space: tile rows bottom-to-top, y-up
/// coordinates everywhere.
#[derive(Debug, Clone)]
pub struct Level {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
    pub tileset: String,
    pub tileset_columns: u32,
    pub tileset_rows: u32,
    pub layers: Vec<TileLayer>,
    pub platforms: Vec<PlatformSpec>,
    pub spawn_points: Vec<Vec2>,
}

#[derive(Debug, Clone)]
pub struct TileLayer {
    pub name: String,
    /// Row 0 is the bottom of the map.
    pub rows: Vec<Vec<u32>>,
}

#[derive(Debug, Clone)]
pub struct PlatformSpec {
    /// Polyline vertices relative to the platform body's rest position.
    pub points: Vec<Vec2>,
    pub jump_through: bool,
    pub speed: f32,
    /// Waypoints in world space. Empty for static platforms.
    pub waypoints: Vec<Vec2>,
    /// Where the body spawns: the first waypoint, or the anchor when static.
    pub origin: Vec2,
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_level(path: &Path) -> Result<Level, LevelLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let def: LevelDef = ron_options()
        .from_str(&contents)
        .map_err(|e| LevelLoadError {
            file: file_name.clone(),
            message: format!("Parse error: {}", e),
        })?;

    Level::from_def(def).map_err(|message| LevelLoadError {
        file: file_name,
        message,
    })
}

impl Level {
    /// Validate a parsed definition and convert it into world space.
    pub fn from_def(def: LevelDef) -> Result<Level, String> {
        if def.width == 0 || def.height == 0 || def.tile_size == 0 {
            return Err("width, height, and tile_size must be positive".to_string());
        }
        if def.layers.is_empty() {
            return Err("level has no tile layers".to_string());
        }
        if def.tileset_columns == 0 || def.tileset_rows == 0 {
            return Err("tileset_columns and tileset_rows must be positive".to_string());
        }
        let max_tile = def.tileset_columns * def.tileset_rows;

        let mut layers = Vec::with_capacity(def.layers.len());
        for layer in &def.layers {
            if layer.rows.len() != def.height as usize {
                return Err(format!(
                    "layer '{}' has {} rows, expected {}",
                    layer.name,
                    layer.rows.len(),
                    def.height
                ));
            }
            for (i, row) in layer.rows.iter().enumerate() {
                if row.len() != def.width as usize {
                    return Err(format!(
                        "layer '{}' row {} has {} tiles, expected {}",
                        layer.name,
                        i,
                        row.len(),
                        def.width
                    ));
                }
                for (j, &tile_id) in row.iter().enumerate() {
                    if tile_id > max_tile {
                        return Err(format!(
                            "layer '{}' row {} column {} has tile id {}, but the tileset holds {} tiles",
                            layer.name, i, j, tile_id, max_tile
                        ));
                    }
                }
            }
            layers.push(TileLayer {
                name: layer.name.clone(),
                rows: flip_rows(&layer.rows),
            });
        }

        let map_height = (def.height * def.tile_size) as f32;
        let platforms = def
            .platforms
            .iter()
            .map(|p| platform_to_world(p, map_height))
            .collect::<Result<Vec<_>, _>>()?;

        let spawn_points = def
            .spawn_points
            .iter()
            .map(|&(x, y)| Vec2::new(x, map_height - y))
            .collect();

        Ok(Level {
            width: def.width,
            height: def.height,
            tile_size: def.tile_size,
            tileset: def.tileset.clone(),
            tileset_columns: def.tileset_columns,
            tileset_rows: def.tileset_rows,
            layers,
            platforms,
            spawn_points,
        })
    }

    pub fn map_height(&self) -> f32 {
        (self.height * self.tile_size) as f32
    }
}

/// Reverse row order so index 0 is the bottom of the map. The file stores
/// rows the way editors draw them, top first.
pub(crate) fn flip_rows(rows: &[Vec<u32>]) -> Vec<Vec<u32>> {
    rows.iter().rev().cloned().collect()
}

/// Anchor in world space: x unchanged, y flipped about the map height.
pub(crate) fn anchor_to_world(anchor: (f32, f32), map_height: f32) -> Vec2 {
    Vec2::new(anchor.0, map_height - anchor.1)
}

/// Anchor-relative points into y-up offsets.
pub(crate) fn offsets_to_world(points: &[(f32, f32)]) -> Vec<Vec2> {
    points.iter().map(|&(x, y)| Vec2::new(x, -y)).collect()
}

fn platform_to_world(def: &PlatformDef, map_height: f32) -> Result<PlatformSpec, String> {
    if def.points.len() < 2 {
        return Err(format!(
            "platform at {:?} needs at least 2 polyline points",
            def.anchor
        ));
    }
    if def.speed <= 0.0 {
        return Err(format!("platform at {:?} has non-positive speed", def.anchor));
    }

    let anchor = anchor_to_world(def.anchor, map_height);
    let waypoints: Vec<Vec2> = offsets_to_world(&def.waypoints)
        .into_iter()
        .map(|offset| anchor + offset)
        .collect();
    let origin = waypoints.first().copied().unwrap_or(anchor);

    Ok(PlatformSpec {
        points: offsets_to_world(&def.points),
        jump_through: def.jump_through,
        speed: def.speed,
        waypoints,
        origin,
    })
}
