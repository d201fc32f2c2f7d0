//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed at full input
    pub speed: f32,
    pub jump_velocity: f32,
    pub body_width: f32,
    pub body_height: f32,
    pub start_x: f32,
    pub run_frame_duration: f32,
    pub idle_frame_duration: f32,
    /// Shortest touch travel that counts as a swipe
    pub swipe_min_distance: f32,
    /// Longest touch duration that still counts as a swipe
    pub swipe_max_duration: f32,
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 200.0,
            jump_velocity: 560.0,
            body_width: 32.0,
            body_height: 64.0,
            start_x: -120.0,
            run_frame_duration: 0.1,
            idle_frame_duration: 0.3,
            swipe_min_distance: 50.0,
            swipe_max_duration: 0.5,
            ground_probe_distance: 4.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CrouchTuning {
    /// Seconds before a crouch reverts on its own
    pub duration: f32,
}

impl Default for CrouchTuning {
    fn default() -> Self {
        Self { duration: 1.0 }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub duck_just_pressed: bool,
}

/// Discrete player actions that are also mirrored to the enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Jump,
    Duck,
}

impl PlayerAction {
    /// Symbolic name used by the mirror entry point
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Jump => "jump",
            PlayerAction::Duck => "duck",
        }
    }
}
