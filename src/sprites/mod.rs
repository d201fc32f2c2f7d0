//! Sprites module for frame animation.
//!
//! This module handles:
//! - Loading sprite manifests from JSON
//! - Looping clip playback with cues
//! - Footstep sounds for run cues

pub mod animation;
pub mod footsteps;
pub mod manifest;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use footsteps::FootstepSound;
pub use manifest::*;

use footsteps::{load_footstep_sound, play_footsteps};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_message::<AnimationCueEvent>()
            .add_systems(Startup, (load_sprite_manifest, load_footstep_sound))
            .add_systems(Update, (advance_animations, play_footsteps).chain());
    }
}
