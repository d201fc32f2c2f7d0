//! Obstacles domain: spawning, scrolling off, and hazard contacts.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{RunConfig, WorldTuning};
use crate::movement::Player;
use crate::obstacles::{
    Obstacle, ObstacleCollider, ObstacleHitEvent, ObstacleSpawner, ObstacleTuning, spawn_obstacle,
};

pub(crate) fn reset_spawner(
    mut commands: Commands,
    config: Res<RunConfig>,
    tuning: Res<ObstacleTuning>,
) {
    commands.insert_resource(ObstacleSpawner::new(config.seed, tuning.spawn_interval));
    debug!("Obstacle spawner seeded with {}", config.seed);
}

pub(crate) fn spawn_obstacles(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<ObstacleTuning>,
    world: Res<WorldTuning>,
    spawner: Option<ResMut<ObstacleSpawner>>,
) {
    let Some(mut spawner) = spawner else {
        return;
    };

    for _ in 0..spawner.tick(time.delta()) {
        let kind = spawner.next_kind();
        // Rest on the ground; the kind's own offset is applied by the layout
        let y = world.ground_y + kind.archetype().size.y / 2.0;
        spawn_obstacle(
            &mut commands,
            kind,
            Vec2::new(tuning.spawn_x, y),
            world.scroll_speed,
        );
        debug!("Obstacle #{} this run", spawner.spawned());
    }
}

pub(crate) fn despawn_scrolled_obstacles(
    mut commands: Commands,
    tuning: Res<ObstacleTuning>,
    obstacles: Query<(Entity, &Transform), With<Obstacle>>,
) {
    for (entity, transform) in &obstacles {
        if transform.translation.x < tuning.despawn_x {
            commands.entity(entity).despawn();
        }
    }
}

/// Turn collision starts between the player and hazard zones into hits.
pub(crate) fn detect_obstacle_hits(
    mut collision_events: MessageReader<CollisionStart>,
    colliders: Query<&ObstacleCollider>,
    players: Query<(), With<Player>>,
    mut hit_events: MessageWriter<ObstacleHitEvent>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (zone_entity, target) in pairs {
            let Ok(collider) = colliders.get(zone_entity) else {
                continue;
            };

            if !collider.source.is_hazard() || players.get(target).is_err() {
                continue;
            }

            hit_events.write(ObstacleHitEvent {
                obstacle: collider.owner,
                target,
                role: collider.source,
            });
        }
    }
}
