//! Sprites domain: animation clip selection and frame playback.
//!
//! Animations are rows of a fixed-grid sprite sheet. Which clip plays falls
//! out of the same facts the motion controller derives: grounding, jump
//! budget, walk intent, and death.

use bevy::prelude::*;

use crate::combat::Health;
use crate::movement::{Facing, Grounding, JumpState, MoveIntent, Player, PlayerFacing};

pub const SHEET_CELL: u32 = 128;
pub const SHEET_COLUMNS: u32 = 8;
pub const SHEET_ROWS: u32 = 9;

/// Input speeds below this render as standing still.
const WALK_EPSILON: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionAnimation {
    #[default]
    Idle,
    Walk,
    /// Airborne with jumps left.
    Jump,
    /// Airborne with the jump budget exhausted.
    Spin,
    Death,
}

/// One row of the sheet.
#[derive(Debug, Clone, Copy)]
pub struct Clip {
    pub row: u32,
    pub frames: u32,
    pub start_frame: u32,
    pub looping: bool,
    pub frame_duration: f32,
}

pub fn clip_for(animation: MotionAnimation) -> Clip {
    match animation {
        MotionAnimation::Idle => Clip {
            row: 1,
            frames: 8,
            start_frame: 0,
            looping: true,
            frame_duration: 0.11,
        },
        MotionAnimation::Walk => Clip {
            row: 3,
            frames: 8,
            start_frame: 0,
            looping: true,
            frame_duration: 0.11,
        },
        MotionAnimation::Jump => Clip {
            row: 5,
            frames: 2,
            start_frame: 4,
            looping: true,
            frame_duration: 0.11,
        },
        MotionAnimation::Spin => Clip {
            row: 7,
            frames: 4,
            start_frame: 0,
            looping: true,
            frame_duration: 0.04,
        },
        MotionAnimation::Death => Clip {
            row: 8,
            frames: 7,
            start_frame: 0,
            looping: false,
            frame_duration: 0.11,
        },
    }
}

#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub current: MotionAnimation,
    pub frame: u32,
    pub timer: f32,
    /// Set once a non-looping clip has shown its last frame.
    pub finished: bool,
}

impl AnimationController {
    /// Switch clips, restarting playback only on an actual change.
    pub fn set_state(&mut self, animation: MotionAnimation) {
        if self.current != animation {
            self.current = animation;
            self.frame = 0;
            self.timer = 0.0;
            self.finished = false;
        }
    }
}

/// Derive the clip from motion state.
pub fn pick_animation(
    dead: bool,
    landed: bool,
    walking: bool,
    jumps_remaining: u8,
) -> MotionAnimation {
    if dead {
        MotionAnimation::Death
    } else if landed && walking {
        MotionAnimation::Walk
    } else if landed {
        MotionAnimation::Idle
    } else if jumps_remaining > 0 {
        MotionAnimation::Jump
    } else {
        MotionAnimation::Spin
    }
}

pub(crate) fn select_animations(
    mut players: Query<
        (
            &Health,
            &Grounding,
            &JumpState,
            &MoveIntent,
            &mut AnimationController,
        ),
        With<Player>,
    >,
) {
    for (health, grounding, jumps, intent, mut controller) in &mut players {
        let walking = intent.target_vx.abs() > WALK_EPSILON;
        controller.set_state(pick_animation(
            health.is_dead(),
            grounding.landed,
            walking,
            jumps.remaining,
        ));
    }
}

pub(crate) fn advance_animations(
    time: Res<Time>,
    mut query: Query<(&mut AnimationController, &mut Sprite, &PlayerFacing)>,
) {
    let dt = time.delta_secs();

    for (mut controller, mut sprite, facing) in &mut query {
        let clip = clip_for(controller.current);

        controller.timer += dt;
        while controller.timer >= clip.frame_duration {
            controller.timer -= clip.frame_duration;
            if controller.frame + 1 < clip.frames {
                controller.frame += 1;
            } else if clip.looping {
                controller.frame = 0;
            } else {
                controller.finished = true;
            }
        }

        sprite.flip_x = facing.0 == Facing::Left;
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = (clip.row * SHEET_COLUMNS + clip.start_frame + controller.frame) as usize;
        }
    }
}
