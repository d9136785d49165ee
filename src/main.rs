mod audio;
mod combat;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::JumpThroughHooks;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cat Brawl".to_string(),
            resolution: (1200, 900).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default().with_collision_hooks::<JumpThroughHooks>())
    .insert_resource(Gravity(Vec2::new(0.0, -1000.0)))
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .add_plugins((
        core::CorePlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        sprites::SpritesPlugin,
        audio::AudioPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
