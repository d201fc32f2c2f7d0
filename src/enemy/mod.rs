//! Enemy domain: pursuer plugin wiring and public exports.

mod components;
mod decision;
mod events;
mod resources;
mod spawn;
mod systems;


pub use components::{Enemy, EnemyState, MirrorAction};
pub use decision::{AxisOverride, EnemyBehavior, EnemyIntent, decide, is_grounded};
pub use events::MirrorActionEvent;
pub use resources::EnemyTuning;

use bevy::prelude::*;

use crate::core::GameState;
use crate::enemy::spawn::spawn_enemy;
use crate::enemy::systems::{handle_mirror_actions, update_enemy_proximity};

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_message::<MirrorActionEvent>()
            .add_systems(OnEnter(GameState::Run), spawn_enemy)
            .add_systems(
                Update,
                (handle_mirror_actions, update_enemy_proximity)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
