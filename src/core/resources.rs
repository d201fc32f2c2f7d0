//! Core domain: shared resources for run configuration.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug)]
pub struct RunConfig {
    /// Seed for the obstacle sequence of the current run
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Shared layout of the scrolling world
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Downward acceleration in pixels per second squared
    pub gravity: f32,
    /// Y coordinate of the ground's top surface
    pub ground_y: f32,
    pub ground_width: f32,
    pub ground_thickness: f32,
    /// Leftward speed of everything that scrolls past the player
    pub scroll_speed: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            gravity: 1400.0,
            ground_y: -120.0,
            ground_width: 4000.0,
            ground_thickness: 40.0,
            scroll_speed: 150.0,
        }
    }
}
