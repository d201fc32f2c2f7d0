//! Pursuit domain: distance level plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{MAX_PURSUIT_LEVEL, PursuitDistance};
pub use events::PursuitLevelChanged;
pub use resources::PursuitTuning;

use bevy::prelude::*;

use crate::core::GameState;
use crate::pursuit::systems::{apply_obstacle_hits, recover_distance, sync_caught_state};

pub struct PursuitPlugin;

impl Plugin for PursuitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PursuitTuning>()
            .add_message::<PursuitLevelChanged>()
            .add_systems(
                Update,
                (apply_obstacle_hits, recover_distance, sync_caught_state)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
