//! Movement domain: the per-step motion controller.
//!
//! Each system derives its gate from `{health, landed, remaining_jumps}`.
//! Dead players (health below zero) are a sink: none of these systems touch
//! them until respawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::audio::PlaySound;
use crate::combat::Health;
use crate::movement::{
    Facing, Grounding, HeldKeys, JumpState, MoveIntent, MovementTuning, Player, PlayerFacing,
    PlayerKeys, PlayerName,
};
use bevy::ecs::message::MessageWriter;

/// Refill the jump budget while standing on shallow-enough ground. The slope
/// threshold keeps wall-contact normals from restoring jumps.
pub(crate) fn refill_jumps(
    tuning: Res<MovementTuning>,
    mut players: Query<(&Grounding, &Health, &mut JumpState), With<Player>>,
) {
    for (grounding, health, mut jumps) in &mut players {
        if health.is_dead() {
            continue;
        }
        if grounding.landed && grounding.ground_slope < tuning.jump_reset_slope {
            jumps.refill(tuning.max_jumps);
        }
    }
}

/// Edge-triggered jump: fires only on the step the key's frames-held counter
/// reads 1, so a held key never repeats.
pub(crate) fn apply_jump(
    held_keys: Res<HeldKeys>,
    tuning: Res<MovementTuning>,
    mut sounds: MessageWriter<PlaySound>,
    mut players: Query<
        (
            &PlayerKeys,
            &PlayerName,
            &Grounding,
            &Health,
            &mut JumpState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (keys, name, grounding, health, mut jumps, mut velocity) in &mut players {
        if health.is_dead() {
            continue;
        }
        if !held_keys.just_pressed(keys.up) {
            continue;
        }
        if jumps.try_consume() {
            velocity.y = grounding.ground_velocity.y + tuning.jump_speed;
            sounds.write(PlaySound::Jump);
            debug!("{} jumped, {} jumps left", name.0, jumps.remaining);
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    held_keys: Res<HeldKeys>,
    tuning: Res<MovementTuning>,
    mut players: Query<
        (
            &PlayerKeys,
            &Grounding,
            &Health,
            &mut PlayerFacing,
            &mut MoveIntent,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (keys, grounding, health, mut facing, mut intent, mut velocity) in &mut players {
        if health.is_dead() {
            continue;
        }

        // Right wins when both are held (last write).
        let mut target_vx = 0.0;
        if held_keys.held(keys.left) {
            facing.0 = Facing::Left;
            target_vx = -tuning.run_speed;
        }
        if held_keys.held(keys.right) {
            facing.0 = Facing::Right;
            target_vx = tuning.run_speed;
        }
        intent.target_vx = target_vx;

        let ground_relative = target_vx + grounding.ground_velocity.x;
        if grounding.landed {
            // Grounded motion tracks input instantly, riding whatever the
            // surface itself is doing.
            velocity.x = ground_relative;
        } else {
            velocity.x = lerp_toward(velocity.x, ground_relative, tuning.air_control_step);
        }
    }
}

pub(crate) fn clamp_fall_speed(
    tuning: Res<MovementTuning>,
    mut players: Query<(&Health, &mut LinearVelocity), With<Player>>,
) {
    for (health, mut velocity) in &mut players {
        if health.is_dead() {
            continue;
        }
        velocity.y = velocity.y.max(tuning.terminal_velocity);
    }
}

/// Clamped-step interpolation: move from `current` toward `target` by no
/// more than `max_step`.
pub(crate) fn lerp_toward(current: f32, target: f32, max_step: f32) -> f32 {
    current + (target - current).clamp(-max_step, max_step)
}
