//! Obstacles domain: spawn tuning and the seeded spawner.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::obstacles::ObstacleKind;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObstacleTuning {
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// x where new obstacles appear, right of the screen
    pub spawn_x: f32,
    /// Obstacles left of this x are removed
    pub despawn_x: f32,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            spawn_interval: 2.5,
            spawn_x: 450.0,
            despawn_x: -500.0,
        }
    }
}

/// Drives the obstacle stream for one run. The same seed yields the same
/// sequence of kinds.
#[derive(Resource, Debug)]
pub struct ObstacleSpawner {
    timer: Timer,
    rng: ChaCha8Rng,
    spawned: u32,
}

impl ObstacleSpawner {
    pub fn new(seed: u64, interval: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
            rng: ChaCha8Rng::seed_from_u64(seed),
            spawned: 0,
        }
    }

    /// Advance the timer. Returns how many obstacles are due.
    pub fn tick(&mut self, delta: Duration) -> u32 {
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }

    pub fn next_kind(&mut self) -> ObstacleKind {
        self.spawned += 1;
        ObstacleKind::ALL[self.rng.random_range(0..ObstacleKind::ALL.len())]
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }
}
