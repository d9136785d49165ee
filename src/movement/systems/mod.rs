//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::classify_ground_contacts;
pub(crate) use input::tick_held_keys;
pub(crate) use movement::{apply_horizontal_movement, apply_jump, clamp_fall_speed, refill_jumps};
