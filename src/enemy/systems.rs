//! Enemy domain: per-tick pursuit and mirrored actions.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::enemy::{
    Enemy, EnemyState, EnemyTuning, MirrorAction, MirrorActionEvent, decide, is_grounded,
};
use crate::movement::{Crouch, Player};
use crate::pursuit::PursuitDistance;

/// Applies the proximity decision to every enemy. Without a player nothing
/// happens.
pub(crate) fn update_enemy_proximity(
    tuning: Res<EnemyTuning>,
    player_query: Query<(&Transform, &PursuitDistance), With<Player>>,
    mut enemy_query: Query<
        (
            Entity,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut EnemyState,
        ),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Ok((player_transform, distance)) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (entity, mut transform, mut velocity, mut visibility, mut state) in &mut enemy_query {
        let mut position = transform.translation.truncate();
        let intent = decide(distance.level(), position, player_pos, &tuning);

        if !intent.position.is_empty() {
            intent.position.apply(&mut position);
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        }

        if !intent.velocity.is_empty() {
            intent.velocity.apply(&mut velocity.0);
        }

        let target = if intent.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if *visibility != target {
            *visibility = target;
        }

        if state.behavior != Some(intent.behavior) {
            debug!(
                "Enemy {:?} -> {:?} (level {})",
                entity,
                intent.behavior,
                distance.level()
            );
            state.behavior = Some(intent.behavior);
        }
    }
}

/// Copies the player's jump and duck onto the enemy.
pub(crate) fn handle_mirror_actions(
    tuning: Res<EnemyTuning>,
    mut mirror_events: MessageReader<MirrorActionEvent>,
    mut enemy_query: Query<(&mut LinearVelocity, &mut Crouch), With<Enemy>>,
) {
    for event in mirror_events.read() {
        let Some(action) = MirrorAction::from_name(&event.action) else {
            debug!("Ignoring unknown mirror action '{}'", event.action);
            continue;
        };

        for (mut velocity, mut crouch) in &mut enemy_query {
            match action {
                MirrorAction::Rise => {
                    // Only from the ground; mid-air rises are dropped
                    if is_grounded(velocity.y, tuning.grounded_threshold) {
                        velocity.y = tuning.rise_velocity;
                        debug!("Enemy rise");
                    }
                }
                MirrorAction::Crouch => {
                    if crouch.request() {
                        debug!("Enemy crouch");
                    }
                }
            }
        }
    }
}
