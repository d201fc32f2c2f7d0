//! Pursuit domain: tuning for hits and recovery.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PursuitTuning {
    pub starting_level: i32,
    /// Seconds without a hit needed to gain one level
    pub recovery_seconds: f32,
    /// Seconds after a hit during which further hits are ignored
    pub hit_cooldown: f32,
}

impl Default for PursuitTuning {
    fn default() -> Self {
        Self {
            starting_level: 3,
            recovery_seconds: 4.0,
            hit_cooldown: 0.75,
        }
    }
}
