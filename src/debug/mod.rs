//! Dev tools: physics gizmos and an invincibility toggle.
//!
//! F3 toggles collider/contact rendering, F4 toggles damage immunity for
//! every player. Only compiled with the `dev-tools` feature.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::Invincible;
use crate::movement::{Player, PlayerName};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsDebugPlugin::default())
            .add_systems(Startup, disable_gizmos_by_default)
            .add_systems(Update, (toggle_gizmos, toggle_invincibility));
    }
}

fn disable_gizmos_by_default(mut store: ResMut<GizmoConfigStore>) {
    store.config_mut::<PhysicsGizmos>().0.enabled = false;
}

fn toggle_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut store: ResMut<GizmoConfigStore>) {
    if keyboard.just_pressed(KeyCode::F3) {
        let config = store.config_mut::<PhysicsGizmos>().0;
        config.enabled = !config.enabled;
        info!("Physics gizmos: {}", config.enabled);
    }
}

fn toggle_invincibility(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    players: Query<(Entity, &PlayerName, Has<Invincible>), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }
    for (entity, name, invincible) in &players {
        if invincible {
            commands.entity(entity).remove::<Invincible>();
            info!("{} is mortal again", name.0);
        } else {
            commands.entity(entity).insert(Invincible);
            info!("{} is invincible", name.0);
        }
    }
}
