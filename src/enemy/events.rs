//! Enemy domain: messages for mirrored player actions.

use bevy::ecs::message::Message;

/// A player action the enemy should copy, by symbolic name ("jump", "duck").
#[derive(Debug, Clone)]
pub struct MirrorActionEvent {
    pub action: String,
}

impl MirrorActionEvent {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
        }
    }
}

impl Message for MirrorActionEvent {}
