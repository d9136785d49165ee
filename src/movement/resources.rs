//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub run_speed: f32,
    pub jump_speed: f32,
    /// Maximum horizontal velocity change per fixed step while airborne.
    pub air_control_step: f32,
    /// Fall speed floor; vertical velocity never goes below this.
    pub terminal_velocity: f32,
    pub max_jumps: u8,
    /// Ground slopes at or above this rise/run do not refill jumps, so
    /// near-vertical wall normals cannot restore the budget.
    pub jump_reset_slope: f32,
    /// Landing speed above which the landing counts as hard.
    pub hard_landing_speed: f32,
    /// Landing speed above which the player takes squish damage.
    pub squish_speed: f32,
    pub player_mass: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 200.0,
            jump_speed: 500.0,
            air_control_step: 10.0,
            terminal_velocity: -300.0,
            max_jumps: 2,
            jump_reset_slope: 2.0,
            hard_landing_speed: 100.0,
            squish_speed: 1000.0,
            player_mass: 5.0,
        }
    }
}

/// Per-key frames-held counters. A key is "just pressed" exactly when its
/// counter reads 1, which stays edge-triggered even though gameplay runs on
/// the fixed schedule.
#[derive(Resource, Debug, Default)]
pub struct HeldKeys {
    counters: HashMap<KeyCode, u32>,
}

impl HeldKeys {
    /// Advance all counters one fixed step: pressed keys accumulate,
    /// released keys are dropped.
    pub fn tick(&mut self, pressed: &[KeyCode]) {
        self.counters.retain(|key, _| pressed.contains(key));
        for key in pressed {
            *self.counters.entry(*key).or_insert(0) += 1;
        }
    }

    pub fn frames_held(&self, key: KeyCode) -> u32 {
        self.counters.get(&key).copied().unwrap_or(0)
    }

    pub fn held(&self, key: KeyCode) -> bool {
        self.frames_held(key) > 0
    }

    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.frames_held(key) == 1
    }
}
