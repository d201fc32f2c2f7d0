//! Pursuit domain: hits, recovery, and the caught state.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{MovementDriver, Player};
use crate::obstacles::{Obstacle, ObstacleHitEvent};
use crate::pursuit::{PursuitDistance, PursuitLevelChanged};

pub(crate) fn apply_obstacle_hits(
    mut hits: MessageReader<ObstacleHitEvent>,
    mut players: Query<&mut PursuitDistance, With<Player>>,
    obstacles: Query<&Obstacle>,
    mut changed: MessageWriter<PursuitLevelChanged>,
) {
    for hit in hits.read() {
        let Ok(mut distance) = players.get_mut(hit.target) else {
            continue;
        };

        let from = distance.level();
        if let Some(to) = distance.register_hit() {
            let kind = obstacles
                .get(hit.obstacle)
                .map_or("unknown", |obstacle| obstacle.kind.name());
            debug!("Hit by {} obstacle ({:?}): level {} -> {}", kind, hit.role, from, to);
            changed.write(PursuitLevelChanged {
                entity: hit.target,
                from,
                to,
            });
        }
    }
}

pub(crate) fn recover_distance(
    time: Res<Time>,
    mut players: Query<(Entity, &mut PursuitDistance), With<Player>>,
    mut changed: MessageWriter<PursuitLevelChanged>,
) {
    for (entity, mut distance) in &mut players {
        let from = distance.level();
        if let Some(to) = distance.tick(time.delta()) {
            debug!("Recovered: level {} -> {}", from, to);
            changed.write(PursuitLevelChanged { entity, from, to });
        }
    }
}

/// Stops the player while caught and releases them once the level rises.
pub(crate) fn sync_caught_state(
    mut changed: MessageReader<PursuitLevelChanged>,
    mut drivers: Query<&mut MovementDriver>,
) {
    for event in changed.read() {
        let Ok(mut driver) = drivers.get_mut(event.entity) else {
            continue;
        };

        if event.to == 0 && driver.is_enabled() {
            driver.disable();
            info!("Caught! Movement disabled");
        } else if event.from == 0 && event.to > 0 && !driver.is_enabled() {
            driver.enable();
            info!("Escaped, movement enabled");
        }
    }
}
