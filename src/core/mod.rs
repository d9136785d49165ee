//! Core domain: frame phase ordering, camera, and session control.

mod systems;

use bevy::prelude::*;

use crate::core::systems::{camera_follow, exit_on_escape, setup_camera};

/// Phases of one fixed gameplay step. Physics itself runs afterwards in
/// `FixedPostUpdate`, so contact data read in `FramePhase::Contacts` comes
/// from the step that just finished.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramePhase {
    /// Per-key frames-held accumulation.
    Input,
    /// Projectile aging and cooldown ticks.
    Upkeep,
    /// Contact classification into grounding facts.
    Contacts,
    /// Jumping, horizontal control, terminal velocity.
    Motion,
    /// Shooting, hit resolution, damage, respawn.
    Combat,
    /// Scripted platform motion, after all per-player updates.
    Platforms,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                FramePhase::Input,
                FramePhase::Upkeep,
                FramePhase::Contacts,
                FramePhase::Motion,
                FramePhase::Combat,
                FramePhase::Platforms,
            )
                .chain(),
        )
        .add_systems(Startup, setup_camera)
        .add_systems(Update, (camera_follow, exit_on_escape));
    }
}
