//! Obstacles domain: turning a layout into entities.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::RunEntity;
use crate::obstacles::{
    HitSource, Obstacle, ObstacleCollider, ObstacleKind, ZoneLayout, ZoneRole, build_layout,
};

const DUCK_INDICATOR_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

/// Spawn a scrolling obstacle centered at `position`.
///
/// The parent is a kinematic body carrying the sprite and, for solid
/// obstacles, the main collider. Each sub-zone is a child.
pub fn spawn_obstacle(
    commands: &mut Commands,
    kind: ObstacleKind,
    position: Vec2,
    scroll_speed: f32,
) -> Entity {
    let layout = build_layout(kind, position);

    let obstacle = commands
        .spawn((
            Obstacle { kind: layout.kind },
            RunEntity,
            Sprite {
                color: layout.tint,
                custom_size: Some(layout.size),
                ..default()
            },
            Transform::from_xyz(layout.position.x, layout.position.y, 0.2),
            RigidBody::Kinematic,
            LinearVelocity(Vec2::new(-scroll_speed, 0.0)),
        ))
        .id();

    if let Some(filter) = layout.main_body {
        commands.entity(obstacle).insert((
            Collider::rectangle(layout.size.x, layout.size.y),
            filter.collision_layers(),
            ObstacleCollider {
                owner: obstacle,
                source: HitSource::Body,
            },
        ));
    }

    spawn_zones(commands, obstacle, &layout);

    debug!(
        "Spawned {} obstacle at ({:.0}, {:.0}) with {} zone(s)",
        layout.kind.name(),
        layout.position.x,
        layout.position.y,
        layout.zones.len()
    );

    obstacle
}

fn spawn_zones(commands: &mut Commands, obstacle: Entity, layout: &ZoneLayout) {
    commands.entity(obstacle).with_children(|parent| {
        for zone in &layout.zones {
            let transform = Transform::from_xyz(zone.offset.x, zone.offset.y, 0.1);

            let Some(filter) = zone.filter() else {
                if zone.role == ZoneRole::DuckIndicator {
                    parent.spawn((
                        Sprite {
                            color: DUCK_INDICATOR_COLOR,
                            custom_size: Some(zone.size),
                            ..default()
                        },
                        transform,
                    ));
                }
                continue;
            };

            let mut child = parent.spawn((
                transform,
                Collider::rectangle(zone.size.x, zone.size.y),
                filter.collision_layers(),
                ObstacleCollider {
                    owner: obstacle,
                    source: HitSource::Zone(zone.role),
                },
            ));

            if filter.is_sensor() {
                child.insert(Sensor);
            }
        }
    });
}
