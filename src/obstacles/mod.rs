//! Obstacles domain: scrolling obstacle plugin wiring and public exports.

mod components;
mod events;
mod kind;
mod resources;
mod spawn;
mod systems;
mod zones;

#[cfg(test)]
mod tests;

pub use components::{HitSource, Obstacle, ObstacleCollider};
pub use events::ObstacleHitEvent;
pub use kind::{ObstacleArchetype, ObstacleKind};
pub use resources::{ObstacleSpawner, ObstacleTuning};
pub use spawn::spawn_obstacle;
pub use zones::{Side, SubZone, ZoneFilter, ZoneLayout, ZoneRole, build_layout};

use bevy::prelude::*;

use crate::core::{GameState, initialize_run};
use crate::obstacles::systems::{
    despawn_scrolled_obstacles, detect_obstacle_hits, reset_spawner, spawn_obstacles,
};

pub struct ObstaclesPlugin;

impl Plugin for ObstaclesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObstacleTuning>()
            .add_message::<ObstacleHitEvent>()
            .add_systems(OnEnter(GameState::Run), reset_spawner.after(initialize_run))
            .add_systems(
                Update,
                (
                    spawn_obstacles,
                    despawn_scrolled_obstacles,
                    detect_obstacle_hits,
                )
                    .run_if(in_state(GameState::Run)),
            );
    }
}
