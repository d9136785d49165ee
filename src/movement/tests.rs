//! Movement domain: unit tests for grounding facts and the motion controller.

use bevy::prelude::{KeyCode, Vec2};

use super::systems::collisions::{ground_slope, is_ground_normal, landing_speed, surface_normal};
use super::systems::movement::lerp_toward;
use super::{Grounding, HeldKeys, JumpState, MovementTuning};

// -----------------------------------------------------------------------------
// Contact classification
// -----------------------------------------------------------------------------

#[test]
fn test_flat_ground_normal_qualifies() {
    let n = Vec2::new(0.0, 1.0);
    assert!(is_ground_normal(n));
    assert_eq!(ground_slope(n), 0.0);
}

#[test]
fn test_slope_is_rise_over_run() {
    // 45 degree ramp
    let n = Vec2::new(0.5, 0.5);
    assert!(is_ground_normal(n));
    assert_eq!(ground_slope(n), 1.0);
}

#[test]
fn test_wall_and_ceiling_normals_do_not_qualify() {
    // Horizontal normal: the n.y > 0 guard also makes the slope division safe
    assert!(!is_ground_normal(Vec2::new(1.0, 0.0)));
    assert!(!is_ground_normal(Vec2::new(-1.0, 0.0)));
    // Ceiling
    assert!(!is_ground_normal(Vec2::new(0.0, -1.0)));
}

#[test]
fn test_surface_normal_points_toward_player() {
    // Manifold normals point from the first collider to the second; standing
    // on flat ground must come out as (0, 1) from either side of the pair.
    let from_player_into_floor = Vec2::new(0.0, -1.0);
    assert_eq!(surface_normal(from_player_into_floor, true), Vec2::Y);
    let from_floor_into_player = Vec2::new(0.0, 1.0);
    assert_eq!(surface_normal(from_floor_into_player, false), Vec2::Y);
}

#[test]
fn test_landing_speed_thresholds() {
    let tuning = MovementTuning::default();
    let mass = tuning.player_mass;

    let soft = landing_speed(90.0 * mass, mass);
    assert!(soft <= tuning.hard_landing_speed);

    let hard = landing_speed(150.0 * mass, mass);
    assert!(hard > tuning.hard_landing_speed);
    assert!(hard <= tuning.squish_speed);

    let squish = landing_speed(1001.0 * mass, mass);
    assert!(squish > tuning.squish_speed);
}

#[test]
fn test_grounding_default_is_airborne() {
    // The classifier starts from this value every step; a frame with no
    // qualifying contacts must read as airborne with no stale facts.
    let grounding = Grounding::default();
    assert!(!grounding.landed);
    assert!(!grounding.landed_hard);
    assert_eq!(grounding.ground_velocity, Vec2::ZERO);
    assert_eq!(grounding.ground_slope, 0.0);
}

// -----------------------------------------------------------------------------
// Jump budget
// -----------------------------------------------------------------------------

#[test]
fn test_jump_budget_exhausts_and_never_goes_negative() {
    let mut jumps = JumpState::new(2);
    assert!(jumps.try_consume());
    assert!(jumps.try_consume());
    assert_eq!(jumps.remaining, 0);
    // Third jump with no ground contact in between has no effect
    assert!(!jumps.try_consume());
    assert_eq!(jumps.remaining, 0);
}

#[test]
fn test_jump_budget_refills_to_max() {
    let mut jumps = JumpState::new(2);
    jumps.try_consume();
    jumps.refill(2);
    assert_eq!(jumps.remaining, 2);
}

#[test]
fn test_press_held_three_frames_jumps_once() {
    // Jump key transitions pressed -> held for three frames: exactly one
    // impulse is applied and exactly one jump is spent.
    let tuning = MovementTuning::default();
    let mut keys = HeldKeys::default();
    let mut jumps = JumpState::new(tuning.max_jumps);
    let ground_velocity = Vec2::new(0.0, 30.0);
    let mut velocity_y = 0.0;
    let mut impulses = 0;

    for _ in 0..3 {
        keys.tick(&[KeyCode::ArrowUp]);
        if keys.just_pressed(KeyCode::ArrowUp) && jumps.try_consume() {
            velocity_y = ground_velocity.y + tuning.jump_speed;
            impulses += 1;
        }
    }

    assert_eq!(impulses, 1);
    assert_eq!(velocity_y, 530.0);
    assert_eq!(jumps.remaining, tuning.max_jumps - 1);
}

#[test]
fn test_steep_slope_does_not_refill() {
    let tuning = MovementTuning::default();
    // Wall-ish normal: slope well above the reset threshold
    let slope = ground_slope(Vec2::new(0.95, 0.05));
    assert!(slope >= tuning.jump_reset_slope);
    // Shallow ramp stays below it
    let slope = ground_slope(Vec2::new(0.3, 0.7));
    assert!(slope < tuning.jump_reset_slope);
}

// -----------------------------------------------------------------------------
// Air control and terminal velocity
// -----------------------------------------------------------------------------

#[test]
fn test_lerp_toward_is_clamped_per_step() {
    assert_eq!(lerp_toward(0.0, 200.0, 10.0), 10.0);
    assert_eq!(lerp_toward(0.0, -200.0, 10.0), -10.0);
    // Within one step of the target it lands exactly on it
    assert_eq!(lerp_toward(195.0, 200.0, 10.0), 200.0);
    assert_eq!(lerp_toward(200.0, 200.0, 10.0), 200.0);
}

#[test]
fn test_terminal_velocity_floor() {
    let tuning = MovementTuning::default();
    let falling = (-900.0_f32).max(tuning.terminal_velocity);
    assert_eq!(falling, -300.0);
    let rising = 120.0_f32.max(tuning.terminal_velocity);
    assert_eq!(rising, 120.0);
}

// -----------------------------------------------------------------------------
// Frames-held input counters
// -----------------------------------------------------------------------------

#[test]
fn test_held_key_is_just_pressed_exactly_once() {
    let mut keys = HeldKeys::default();
    let jump = KeyCode::ArrowUp;

    // Held for three consecutive frames: edge fires only on the first
    keys.tick(&[jump]);
    assert!(keys.just_pressed(jump));
    keys.tick(&[jump]);
    assert!(!keys.just_pressed(jump));
    assert!(keys.held(jump));
    keys.tick(&[jump]);
    assert_eq!(keys.frames_held(jump), 3);

    // Release clears the counter, re-press edges again
    keys.tick(&[]);
    assert!(!keys.held(jump));
    keys.tick(&[jump]);
    assert!(keys.just_pressed(jump));
}

#[test]
fn test_held_keys_track_independently() {
    let mut keys = HeldKeys::default();
    keys.tick(&[KeyCode::ArrowLeft]);
    keys.tick(&[KeyCode::ArrowLeft, KeyCode::Space]);
    assert_eq!(keys.frames_held(KeyCode::ArrowLeft), 2);
    assert!(keys.just_pressed(KeyCode::Space));
    assert!(!keys.held(KeyCode::ArrowRight));
}
