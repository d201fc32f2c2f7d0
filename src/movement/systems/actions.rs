//! Movement domain: discrete jump and duck actions.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::enemy::MirrorActionEvent;
use crate::movement::{
    Crouch, MovementDriver, MovementInput, MovementState, MovementTuning, Player, PlayerAction,
};

/// Apply jump/duck input to the player and forward it to the enemy.
///
/// Nothing happens while the player's driver is disabled.
pub(crate) fn apply_player_actions(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&MovementDriver, &MovementState, &mut LinearVelocity, &mut Crouch),
        With<Player>,
    >,
    mut mirror_events: MessageWriter<MirrorActionEvent>,
) {
    for (driver, state, mut velocity, mut crouch) in &mut query {
        if !driver.is_enabled() {
            continue;
        }

        if input.jump_just_pressed {
            if state.on_ground {
                velocity.y = tuning.jump_velocity;
                debug!("Player jump");
            }
            mirror_events.write(MirrorActionEvent::new(PlayerAction::Jump.name()));
        }

        if input.duck_just_pressed {
            crouch.request();
            mirror_events.write(MirrorActionEvent::new(PlayerAction::Duck.name()));
        }
    }
}
