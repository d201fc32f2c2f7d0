//! Enemy domain: spawning the pursuer for a run.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::{RunEntity, WorldTuning};
use crate::enemy::{Enemy, EnemyState, EnemyTuning};
use crate::movement::{Crouch, CrouchProfile, GameLayer};

pub(crate) fn spawn_enemy(
    mut commands: Commands,
    tuning: Res<EnemyTuning>,
    world: Res<WorldTuning>,
    existing: Query<Entity, With<Enemy>>,
) {
    if !existing.is_empty() {
        return;
    }

    let size = Vec2::splat(tuning.size);
    let tint = Color::srgba(0.5, 0.0, 0.5, 0.8);
    let position = Vec2::new(tuning.offscreen_x, world.ground_y + size.y / 2.0);

    commands.spawn((
        (
            Enemy,
            EnemyState::default(),
            RunEntity,
            Crouch::default(),
            CrouchProfile {
                standing_size: size,
                standing_tint: tint,
                crouched_tint: Color::srgba(1.0, 0.0, 1.0, 0.8),
            },
        ),
        Sprite {
            color: tint,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.5),
        // Hidden until the player's distance level says otherwise
        Visibility::Hidden,
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(1.0),
            Restitution::new(0.0),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground]),
        ),
    ));

    info!("Spawned enemy at ({:.0}, {:.0})", position.x, position.y);
}
