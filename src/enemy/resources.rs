//! Enemy domain: tuning for pursuit behavior and mirrored actions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Horizontal speed while closing in; backing off uses half of it
    pub chase_speed: f32,
    /// Distance kept ahead of the player while chasing
    pub gap_distance: f32,
    /// Leftmost x the enemy may reach while chasing
    pub left_bound: f32,
    /// Height above the player when it has caught up
    pub hover_offset: f32,
    /// Waiting x just past the right edge of the screen
    pub offscreen_x: f32,
    /// Upward speed given when mirroring a jump
    pub rise_velocity: f32,
    /// Vertical speed below which the enemy counts as grounded
    pub grounded_threshold: f32,
    /// Side length of the square body
    pub size: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            chase_speed: 110.0,
            gap_distance: 50.0,
            left_bound: -250.0,
            hover_offset: 100.0,
            offscreen_x: 400.0,
            rise_velocity: 420.0,
            grounded_threshold: 1.0,
            size: 64.0,
        }
    }
}
