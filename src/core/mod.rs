//! Core domain: run lifecycle, shared resources, and camera setup.

mod resources;
mod state;
mod systems;

pub use resources::{RunConfig, WorldTuning};
pub use state::{GameState, RunEntity};
pub(crate) use systems::initialize_run;

use bevy::prelude::*;

use crate::core::systems::{despawn_run_entities, setup_camera, start_run};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<WorldTuning>()
            .add_systems(Startup, (setup_camera, start_run))
            .add_systems(OnEnter(GameState::Run), initialize_run)
            .add_systems(OnExit(GameState::Run), despawn_run_entities);
    }
}
