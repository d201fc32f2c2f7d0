//! Core domain: game state definitions for the run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Run,
}

/// Marker for entities that only live while `GameState::Run` is active
#[derive(Component, Debug, Default)]
pub struct RunEntity;
