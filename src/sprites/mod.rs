//! Sprites domain: motion-state-driven sprite sheet animation.

mod animation;


pub use animation::{
    AnimationController, Clip, MotionAnimation, SHEET_CELL, SHEET_COLUMNS, SHEET_ROWS, clip_for,
    pick_animation,
};

use bevy::prelude::*;

use crate::sprites::animation::{advance_animations, select_animations};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (select_animations, advance_animations).chain());
    }
}
