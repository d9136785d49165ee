//! Core domain: camera setup, camera follow, and quit handling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::Health;
use crate::movement::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Smoothly track the centroid of all living players. The interpolation
/// factor is square-root damped so the camera accelerates over long
/// distances but settles gently. Stands still when nobody is alive.
pub(crate) fn camera_follow(
    players: Query<(&Transform, &Health), With<Player>>,
    mut camera: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let mut centroid = Vec2::ZERO;
    let mut living = 0;
    for (transform, health) in &players {
        if !health.is_dead() {
            centroid += transform.translation.truncate();
            living += 1;
        }
    }
    if living == 0 {
        return;
    }
    centroid /= living as f32;

    for mut transform in &mut camera {
        let position = transform.translation.truncate();
        let distance = position.distance(centroid);
        if distance <= f32::EPSILON {
            continue;
        }
        let speed = (distance.sqrt() / 3.0).max(0.01);
        let t = (speed / distance).clamp(0.0, 1.0);
        let next = position.lerp(centroid, t);
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}

pub(crate) fn exit_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
