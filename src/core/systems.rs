//! Core domain: core run flow systems and setup.

use bevy::prelude::*;
use rand::Rng;

use crate::core::resources::RunConfig;
use crate::core::state::{GameState, RunEntity};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Content is loaded during `Startup`, so the run can begin on the first frame.
pub(crate) fn start_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

/// Initialize a new run with a fresh seed
pub(crate) fn initialize_run(mut run_config: ResMut<RunConfig>) {
    run_config.seed = rand::rng().random();

    info!("Starting new run with seed: {}", run_config.seed);
}

pub(crate) fn despawn_run_entities(mut commands: Commands, query: Query<Entity, With<RunEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Despawned {} run entities", count);
}
