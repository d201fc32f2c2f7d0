//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::sprites::AnimationState;

/// Physics layers for collision filtering.
///
/// Variant order fixes the bit layout shared with level data:
/// player = bit 0, ground = bit 1, obstacle = bit 2, enemy = bit 3.
/// The "none" category is `LayerMask::NONE`.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Player,
    /// Floors and walkable obstacle tops
    Ground,
    /// Obstacle hazards and blockers
    Obstacle,
    /// Enemy bodies (collide with ground only)
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Clone)]
pub struct PlayerInfo {
    pub name: String,
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Child entity carrying the sprite that mirrors its owner's facing
#[derive(Component, Debug)]
pub struct FacingVisual;

/// Horizontal input below this magnitude counts as standing still
pub const MOVING_THRESHOLD: f32 = 0.1;

/// Converts a direction intent into horizontal displacement and an
/// animation choice.
#[derive(Component, Debug, Clone)]
pub struct MovementDriver {
    direction: Vec2,
    pub speed: f32,
    enabled: bool,
    running: bool,
    idle_forced: bool,
}

/// Result of one driver tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverStep {
    pub displacement: f32,
    /// Sign the horizontal scale should take, only when moving
    pub facing: Option<f32>,
    pub animation: AnimationState,
}

impl MovementDriver {
    pub fn new(speed: f32) -> Self {
        Self {
            direction: Vec2::ZERO,
            speed,
            enabled: true,
            running: false,
            idle_forced: false,
        }
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ignored while disabled. Components are clamped to [-1, 1].
    pub fn set_direction(&mut self, direction: Vec2) {
        if !self.enabled {
            return;
        }
        self.direction = direction.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    pub fn is_moving(&self) -> bool {
        self.direction.x.abs() > MOVING_THRESHOLD
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stops the driver and requests an immediate idle pose.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.direction = Vec2::ZERO;
        self.running = false;
        self.idle_forced = true;
    }

    /// Consume a pending forced-idle request left by [`Self::disable`].
    pub fn take_idle_request(&mut self) -> bool {
        std::mem::take(&mut self.idle_forced)
    }

    /// Advance one tick. Returns `None` while disabled.
    pub fn step(&mut self, dt: f32) -> Option<DriverStep> {
        if !self.enabled {
            return None;
        }

        let moving = self.is_moving();
        self.running = moving;

        Some(DriverStep {
            displacement: self.direction.x * self.speed * dt,
            facing: moving.then(|| self.direction.x.signum()),
            animation: if moving {
                AnimationState::Run
            } else {
                AnimationState::Idle
            },
        })
    }
}

/// Horizontal scale for a given facing sign, keeping the vertical magnitude.
pub fn facing_scale_x(sign: f32, scale_y: f32) -> f32 {
    sign * scale_y.abs()
}
