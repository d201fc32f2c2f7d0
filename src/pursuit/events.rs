//! Pursuit domain: events for distance level changes.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct PursuitLevelChanged {
    pub entity: Entity,
    pub from: i32,
    pub to: i32,
}

impl Message for PursuitLevelChanged {}
