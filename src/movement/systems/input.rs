//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::movement::{MovementInput, MovementTuning, PlayerAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// Horizontal swipes carry no action.
    pub fn action(&self) -> Option<PlayerAction> {
        match self {
            SwipeDirection::Up => Some(PlayerAction::Jump),
            SwipeDirection::Down => Some(PlayerAction::Duck),
            SwipeDirection::Left | SwipeDirection::Right => None,
        }
    }
}

/// Classify a finished touch by its dominant axis.
///
/// `delta` uses world orientation (positive y is up). Touches that are too
/// short or too slow are not swipes.
pub fn classify_swipe(
    delta: Vec2,
    duration: f32,
    min_distance: f32,
    max_duration: f32,
) -> Option<SwipeDirection> {
    if duration > max_duration || delta.length() < min_distance {
        return None;
    }

    let direction = if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if delta.y > 0.0 {
        SwipeDirection::Up
    } else {
        SwipeDirection::Down
    };

    Some(direction)
}

/// Start times of touches still in progress, keyed by touch id
#[derive(Default)]
pub(crate) struct SwipeTracker {
    started_at: HashMap<u64, f32>,
}

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    tuning: Res<MovementTuning>,
    mut tracker: Local<SwipeTracker>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis = Vec2::new(x, 0.0);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp);
    input.duck_just_pressed =
        keyboard.just_pressed(KeyCode::KeyS) || keyboard.just_pressed(KeyCode::ArrowDown);

    let now = time.elapsed_secs();
    for touch in touches.iter_just_pressed() {
        tracker.started_at.insert(touch.id(), now);
    }

    for touch in touches.iter_just_released() {
        let Some(started) = tracker.started_at.remove(&touch.id()) else {
            continue;
        };

        // Window coordinates grow downward
        let travel = touch.position() - touch.start_position();
        let delta = Vec2::new(travel.x, -travel.y);

        let swipe = classify_swipe(
            delta,
            now - started,
            tuning.swipe_min_distance,
            tuning.swipe_max_duration,
        );

        match swipe.and_then(|s| s.action()) {
            Some(PlayerAction::Jump) => input.jump_just_pressed = true,
            Some(PlayerAction::Duck) => input.duck_just_pressed = true,
            None => {}
        }
    }

    for touch in touches.iter_just_canceled() {
        tracker.started_at.remove(&touch.id());
    }
}
