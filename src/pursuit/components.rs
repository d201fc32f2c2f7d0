//! Pursuit domain: the player's discretized distance from the enemy.

use bevy::prelude::*;
use std::time::Duration;

use crate::pursuit::PursuitTuning;

/// Farthest level; the enemy is out of sight.
pub const MAX_PURSUIT_LEVEL: i32 = 3;

/// How far behind the enemy is, from 3 (out of sight) to 0 (caught).
///
/// Hits bring the enemy one level closer, each followed by a short
/// cooldown. Every full recovery period without a hit pushes it one level
/// back.
#[derive(Component, Debug, Clone)]
pub struct PursuitDistance {
    level: i32,
    recovery: Timer,
    cooldown: Option<Timer>,
    cooldown_seconds: f32,
}

impl PursuitDistance {
    pub fn new(tuning: &PursuitTuning) -> Self {
        Self {
            level: tuning.starting_level.clamp(0, MAX_PURSUIT_LEVEL),
            recovery: Timer::from_seconds(tuning.recovery_seconds, TimerMode::Repeating),
            cooldown: None,
            cooldown_seconds: tuning.hit_cooldown,
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    #[cfg(test)]
    pub fn is_caught(&self) -> bool {
        self.level == 0
    }

    pub fn in_cooldown(&self) -> bool {
        self.cooldown.is_some()
    }

    /// Register a hazard hit. Returns the new level if it changed.
    ///
    /// Hits during the cooldown are ignored. Any accepted hit restarts the
    /// recovery period, even at level 0.
    pub fn register_hit(&mut self) -> Option<i32> {
        if self.in_cooldown() {
            return None;
        }

        self.cooldown = Some(Timer::from_seconds(self.cooldown_seconds, TimerMode::Once));
        self.recovery.reset();

        let next = (self.level - 1).max(0);
        self.replace_level(next)
    }

    /// Advance cooldown and recovery. Returns the new level if it changed.
    pub fn tick(&mut self, delta: Duration) -> Option<i32> {
        if let Some(cooldown) = self.cooldown.as_mut() {
            cooldown.tick(delta);
            if cooldown.remaining_secs() <= 0.0 {
                self.cooldown = None;
            }
        }

        self.recovery.tick(delta);
        let recovered = i32::try_from(self.recovery.times_finished_this_tick())
            .unwrap_or(MAX_PURSUIT_LEVEL)
            .min(MAX_PURSUIT_LEVEL);
        if recovered == 0 {
            return None;
        }

        let next = (self.level + recovered).min(MAX_PURSUIT_LEVEL);
        self.replace_level(next)
    }

    /// Force a level, clamped to the valid range. Returns the new level if
    /// it changed.
    pub fn set_level(&mut self, level: i32) -> Option<i32> {
        self.recovery.reset();
        self.replace_level(level.clamp(0, MAX_PURSUIT_LEVEL))
    }

    fn replace_level(&mut self, next: i32) -> Option<i32> {
        if next == self.level {
            return None;
        }
        self.level = next;
        Some(next)
    }
}
