//! Level domain: serde definitions for RON level files.
//!
//! Files are authored the way tile editors emit them: tile rows stored
//! top-to-bottom and object coordinates y-down. The loader flips both into
//! the y-up world the physics runs in.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// Tile edge length in world units.
    pub tile_size: u32,
    /// Tileset image path, relative to the asset root.
    pub tileset: String,
    pub tileset_columns: u32,
    pub tileset_rows: u32,
    /// Tile layers, drawn in order. Rows are stored top-to-bottom; tile ids
    /// are 1-indexed, 0 means draw nothing.
    pub layers: Vec<TileLayerDef>,
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    /// Player spawn points, y-down like everything else in the file.
    #[serde(default)]
    pub spawn_points: Vec<(f32, f32)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TileLayerDef {
    pub name: String,
    pub rows: Vec<Vec<u32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDef {
    /// Object anchor in the file's y-down coordinates.
    pub anchor: (f32, f32),
    /// Polyline vertices relative to the anchor.
    pub points: Vec<(f32, f32)>,
    #[serde(default)]
    pub jump_through: bool,
    #[serde(default = "default_platform_speed")]
    pub speed: f32,
    /// Waypoints relative to the anchor; a platform with any waypoints gets
    /// a kinematic body. By convention the first waypoint is (0, 0), the
    /// platform's rest position.
    #[serde(default)]
    pub waypoints: Vec<(f32, f32)>,
}

fn default_platform_speed() -> f32 {
    1.0
}
