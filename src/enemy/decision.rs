//! Enemy domain: the proximity state machine.
//!
//! The enemy's behavior is a pure function of the player's distance level.
//! `decide` returns an intent; the systems apply it to the entity.

use bevy::prelude::*;

use crate::enemy::EnemyTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyBehavior {
    /// Level 3: far away, not shown
    Hidden,
    /// Level 2: parked just off the right edge
    WaitOffscreen,
    /// Level 1: closing in on the player
    Chase,
    /// Level 0: caught up, hovering over the player
    HoverAbove,
    /// Any other level
    HiddenDefault,
}

impl EnemyBehavior {
    pub fn from_level(level: i32) -> Self {
        match level {
            3 => EnemyBehavior::Hidden,
            2 => EnemyBehavior::WaitOffscreen,
            1 => EnemyBehavior::Chase,
            0 => EnemyBehavior::HoverAbove,
            _ => EnemyBehavior::HiddenDefault,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, EnemyBehavior::Hidden | EnemyBehavior::HiddenDefault)
    }
}

/// Per-axis replacement values; `None` leaves the axis unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisOverride {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl AxisOverride {
    pub fn apply(&self, value: &mut Vec2) {
        if let Some(x) = self.x {
            value.x = x;
        }
        if let Some(y) = self.y {
            value.y = y;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyIntent {
    pub behavior: EnemyBehavior,
    pub visible: bool,
    pub position: AxisOverride,
    pub velocity: AxisOverride,
}

impl EnemyIntent {
    fn new(behavior: EnemyBehavior) -> Self {
        Self {
            behavior,
            visible: behavior.is_visible(),
            position: AxisOverride::default(),
            velocity: AxisOverride::default(),
        }
    }
}

/// Choose what the enemy does this tick.
pub fn decide(level: i32, enemy: Vec2, player: Vec2, tuning: &EnemyTuning) -> EnemyIntent {
    let behavior = EnemyBehavior::from_level(level);
    let mut intent = EnemyIntent::new(behavior);

    match behavior {
        EnemyBehavior::Hidden | EnemyBehavior::HiddenDefault => {}
        EnemyBehavior::WaitOffscreen => {
            intent.position.x = Some(tuning.offscreen_x);
            intent.velocity.x = Some(0.0);
        }
        EnemyBehavior::Chase => {
            let target_x = player.x + tuning.gap_distance;
            intent.velocity.x = Some(if enemy.x > target_x {
                -tuning.chase_speed
            } else {
                tuning.chase_speed * 0.5
            });

            // Clamp uses the position before this tick's velocity applies
            if enemy.x < tuning.left_bound {
                intent.position.x = Some(tuning.left_bound);
                intent.velocity.x = Some(0.0);
            }
        }
        EnemyBehavior::HoverAbove => {
            intent.position = AxisOverride {
                x: Some(player.x),
                y: Some(player.y + tuning.hover_offset),
            };
            intent.velocity = AxisOverride {
                x: Some(0.0),
                y: Some(0.0),
            };
        }
    }

    intent
}

/// Grounded means the body is not moving vertically.
pub fn is_grounded(vertical_velocity: f32, threshold: f32) -> bool {
    vertical_velocity.abs() < threshold
}
