//! Audio domain: fire-and-forget one-shot sound triggers.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashMap;

use crate::movement::{Grounding, MoveIntent, Player};


/// Seconds between footsteps while walking.
const FOOTSTEP_INTERVAL: f32 = 0.3;

/// A sound cue. Fire and forget; nothing waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaySound {
    Jump,
    HardLanding,
    Footstep,
    Gunshot,
}

impl Message for PlaySound {}

#[derive(Resource, Debug)]
struct SoundAssets {
    jump: Handle<AudioSource>,
    hard_landing: Handle<AudioSource>,
    footstep: Handle<AudioSource>,
    gunshot: Handle<AudioSource>,
}

/// Footstep cadence while walking on the ground.
#[derive(Component, Debug, Default)]
pub struct FootstepTimer(pub f32);

/// Marker for the looping background track.
#[derive(Component, Debug)]
struct MusicLoop;

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlaySound>()
            .add_systems(Startup, (load_sounds, start_music))
            .add_systems(Update, (trigger_landing_sounds, footstep_cadence, play_sounds));
    }
}

fn start_music(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        MusicLoop,
        AudioPlayer::new(asset_server.load("music/fight.ogg")),
        PlaybackSettings::LOOP,
    ));
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundAssets {
        jump: asset_server.load("sfx/jump.ogg"),
        hard_landing: asset_server.load("sfx/fall.ogg"),
        footstep: asset_server.load("sfx/footstep.ogg"),
        gunshot: asset_server.load("sfx/shot.ogg"),
    });
}

/// Play the landing thump on the frame a hard landing first shows up.
fn trigger_landing_sounds(
    mut was_hard: Local<HashMap<Entity, bool>>,
    mut sounds: MessageWriter<PlaySound>,
    players: Query<(Entity, &Grounding), With<Player>>,
) {
    for (entity, grounding) in &players {
        let previous = was_hard.insert(entity, grounding.landed_hard).unwrap_or(false);
        if grounding.landed_hard && !previous {
            sounds.write(PlaySound::HardLanding);
        }
    }
}

fn footstep_cadence(
    time: Res<Time>,
    mut sounds: MessageWriter<PlaySound>,
    mut players: Query<(&Grounding, &MoveIntent, &mut FootstepTimer), With<Player>>,
) {
    let dt = time.delta_secs();
    for (grounding, intent, mut timer) in &mut players {
        if grounding.landed && intent.target_vx.abs() > 1.0 {
            timer.0 -= dt;
            if timer.0 <= 0.0 {
                sounds.write(PlaySound::Footstep);
                timer.0 = FOOTSTEP_INTERVAL;
            }
        } else {
            timer.0 = 0.0;
        }
    }
}

fn play_sounds(
    mut commands: Commands,
    mut cues: MessageReader<PlaySound>,
    assets: Option<Res<SoundAssets>>,
) {
    let Some(assets) = assets else {
        return;
    };
    for cue in cues.read() {
        let handle = match cue {
            PlaySound::Jump => assets.jump.clone(),
            PlaySound::HardLanding => assets.hard_landing.clone(),
            PlaySound::Footstep => assets.footstep.clone(),
            PlaySound::Gunshot => assets.gunshot.clone(),
        };
        commands.spawn((AudioPlayer::new(handle), PlaybackSettings::DESPAWN));
    }
}
