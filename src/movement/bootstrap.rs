//! Movement domain: player and ground bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::{RunEntity, WorldTuning};
use crate::movement::{
    Crouch, CrouchProfile, FacingVisual, GameLayer, Ground, MovementDriver, MovementState,
    MovementTuning, Player, PlayerInfo,
};
use crate::pursuit::{PursuitDistance, PursuitTuning};
use crate::sprites::{AnimationClips, AnimationController, SpriteManifest};

pub const PLAYER_NAME: &str = "Nephyr";

/// Sprite manifest prefix for the player's animation frames
const PLAYER_SPRITE_BASE: &str = "nephyr";

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    pursuit_tuning: Res<PursuitTuning>,
    world: Res<WorldTuning>,
    manifest: Res<SpriteManifest>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let size = Vec2::new(tuning.body_width, tuning.body_height);
    let position = Vec2::new(tuning.start_x, world.ground_y + size.y / 2.0);
    let tint = Color::srgb(0.9, 0.9, 0.9);
    let clips = AnimationClips::from_manifest(
        &manifest,
        PLAYER_SPRITE_BASE,
        tuning.run_frame_duration,
        tuning.idle_frame_duration,
    );

    info!(
        "Spawning player '{}' at ({:.0}, {:.0}), speed={}, animation frames={}",
        PLAYER_NAME,
        position.x,
        position.y,
        tuning.speed,
        clips.frame_count()
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                PlayerInfo {
                    name: PLAYER_NAME.to_string(),
                },
                RunEntity,
                MovementDriver::new(tuning.speed),
                MovementState::default(),
                Crouch::default(),
                CrouchProfile {
                    standing_size: size,
                    standing_tint: tint,
                    crouched_tint: Color::srgb(0.6, 0.8, 1.0),
                },
                PursuitDistance::new(&pursuit_tuning),
            ),
            Transform::from_xyz(position.x, position.y, 1.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Obstacle]),
            ),
        ))
        .with_children(|parent| {
            // Rendering
            parent.spawn((
                FacingVisual,
                Sprite {
                    color: tint,
                    custom_size: Some(size),
                    ..default()
                },
                Transform::default(),
                AnimationController::default(),
                clips,
            ));
        });
}

pub(crate) fn spawn_ground(mut commands: Commands, world: Res<WorldTuning>) {
    commands.spawn((
        Ground,
        RunEntity,
        Sprite {
            color: Color::srgb(0.35, 0.4, 0.35),
            custom_size: Some(Vec2::new(world.ground_width, world.ground_thickness)),
            ..default()
        },
        Transform::from_xyz(0.0, world.ground_y - world.ground_thickness / 2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(world.ground_width, world.ground_thickness),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
    ));
}
