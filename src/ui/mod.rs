//! UI domain: HUD wiring.

mod hud_players;

use bevy::prelude::*;

use crate::ui::hud_players::{spawn_player_healthbars, update_player_healthbars};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_player_healthbars, update_player_healthbars));
    }
}
