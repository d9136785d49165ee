//! Level domain: scripted waypoint motion for kinematic platforms.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Cyclic waypoint route for a kinematic platform.
#[derive(Component, Debug)]
pub struct WaypointPath {
    pub waypoints: Vec<Vec2>,
    pub target_index: usize,
    /// Distance covered per update step (distance-driven, not per-second).
    pub speed: f32,
}

impl WaypointPath {
    pub fn new(waypoints: Vec<Vec2>, speed: f32) -> Self {
        // Bodies spawn at the first waypoint, so head for the next one
        let target_index = if waypoints.len() > 1 { 1 } else { 0 };
        Self {
            waypoints,
            target_index,
            speed,
        }
    }
}

/// Drive each platform along its route by setting its velocity; the physics
/// step integrates the kinematic body and imparts the surface motion to
/// anyone standing on it. Runs after all per-player updates so players read
/// platform velocities from the step they were computed for.
pub(crate) fn move_platforms(
    time: Res<Time>,
    mut platforms: Query<(&Position, &mut LinearVelocity, &mut WaypointPath)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (position, mut velocity, mut path) in &mut platforms {
        if path.waypoints.is_empty() {
            continue; // stationary routes are a no-op
        }
        let current = position.0;
        let next = step_along_path(current, &mut *path);
        velocity.0 = (next - current) / dt;
    }
}

/// One step of waypoint pursuit: advance toward the current target by at
/// most `speed`; once within `speed` of it, snap there and retarget the next
/// waypoint cyclically on the following step.
pub(crate) fn step_along_path(current: Vec2, path: &mut WaypointPath) -> Vec2 {
    let Some(&target) = path.waypoints.get(path.target_index) else {
        return current;
    };
    let distance = current.distance(target);
    if distance < path.speed {
        path.target_index = (path.target_index + 1) % path.waypoints.len();
        return target;
    }
    current.lerp(target, path.speed / distance)
}
