//! Footstep sounds driven by animation cues.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::path::Path;

use super::{AnimationCue, AnimationCueEvent};

/// On-disk location checked before loading; the asset path is relative to assets/.
const FOOTSTEP_FILE: &str = "assets/audio/footstep.ogg";
const FOOTSTEP_ASSET: &str = "audio/footstep.ogg";

/// Present only when the footstep sound exists.
#[derive(Resource, Debug, Clone)]
pub struct FootstepSound(pub Handle<AudioSource>);

pub(crate) fn load_footstep_sound(mut commands: Commands, asset_server: Res<AssetServer>) {
    if !Path::new(FOOTSTEP_FILE).exists() {
        debug!("No footstep sound at {}, cues stay silent", FOOTSTEP_FILE);
        return;
    }

    commands.insert_resource(FootstepSound(asset_server.load(FOOTSTEP_ASSET)));
    info!("Loaded footstep sound");
}

pub(crate) fn play_footsteps(
    mut commands: Commands,
    sound: Option<Res<FootstepSound>>,
    mut cue_events: MessageReader<AnimationCueEvent>,
) {
    let Some(sound) = sound else {
        cue_events.clear();
        return;
    };

    for event in cue_events.read() {
        if event.cue == AnimationCue::Footstep {
            commands.spawn((AudioPlayer::new(sound.0.clone()), PlaybackSettings::DESPAWN));
        }
    }
}
