//! Movement domain: components and physics layers for player locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid level geometry (tiles, platform segments)
    Terrain,
    /// One-way platform segments, gated by the jump-through hook
    JumpThrough,
    /// Player bodies
    Player,
    /// Fired projectiles
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// Stable slot for key bindings, skins, and HUD placement.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerIndex(pub usize);

#[derive(Component, Debug, Clone)]
pub struct PlayerName(pub String);

/// Per-player key bindings.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerKeys {
    pub up: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    #[allow(dead_code)]
    pub down: KeyCode,
    pub shoot: KeyCode,
}

/// Where this player re-enters the arena after death.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

#[derive(Component, Debug, Default)]
pub struct PlayerFacing(pub Facing);

/// Grounding facts derived from the contact graph. Recomputed from scratch
/// every fixed step; never carried across frames.
#[derive(Component, Debug, Clone, Default)]
pub struct Grounding {
    pub landed: bool,
    pub landed_hard: bool,
    pub ground_velocity: Vec2,
    /// Rise/run of the surface normal (`n.x / n.y`). Only meaningful while
    /// `landed` is set.
    pub ground_slope: f32,
}

/// Jump budget. Only the grounded-reset rule refills it.
#[derive(Component, Debug)]
pub struct JumpState {
    pub remaining: u8,
}

impl JumpState {
    pub fn new(max: u8) -> Self {
        Self { remaining: max }
    }

    pub fn refill(&mut self, max: u8) {
        self.remaining = max;
    }

    /// Spend one jump. Returns false when the budget is exhausted.
    pub fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// The horizontal speed the player is currently asking for. Written by the
/// motion controller, read by animation and footstep cadence.
#[derive(Component, Debug, Default)]
pub struct MoveIntent {
    pub target_vx: f32,
}
