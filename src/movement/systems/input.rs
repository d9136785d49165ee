//! Movement domain: input sampling into frames-held counters.

use bevy::prelude::*;

use crate::movement::HeldKeys;

pub(crate) fn tick_held_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut held_keys: ResMut<HeldKeys>,
) {
    let pressed: Vec<KeyCode> = keyboard.get_pressed().copied().collect();
    held_keys.tick(&pressed);
}
