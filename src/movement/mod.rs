//! Movement domain: locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod crouch;
mod resources;
mod systems;


pub use bootstrap::PLAYER_NAME;
pub use components::{
    DriverStep, FacingVisual, GameLayer, Ground, MOVING_THRESHOLD, MovementDriver, MovementState,
    Player, PlayerInfo, facing_scale_x,
};
pub use crouch::{BodyPose, Crouch, CrouchProfile, CrouchTransition};
pub use resources::{CrouchTuning, MovementInput, MovementTuning, PlayerAction};
pub use systems::input::{SwipeDirection, classify_swipe};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{spawn_ground, spawn_player};
use crate::movement::crouch::{cancel_pending_crouches, update_crouches};
use crate::movement::systems::{
    apply_player_actions, detect_ground, drive_movement, read_input, steer_player,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<CrouchTuning>()
            .init_resource::<MovementInput>()
            .add_systems(OnEnter(GameState::Run), (spawn_ground, spawn_player))
            .add_systems(OnExit(GameState::Run), cancel_pending_crouches)
            .add_systems(
                Update,
                (
                    read_input,
                    steer_player,
                    detect_ground,
                    apply_player_actions,
                    drive_movement,
                    update_crouches,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
