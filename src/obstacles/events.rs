//! Obstacles domain: events for hazard contacts.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::obstacles::HitSource;

/// The player started touching a hazardous part of an obstacle.
#[derive(Debug, Clone)]
pub struct ObstacleHitEvent {
    pub obstacle: Entity,
    pub target: Entity,
    pub role: HitSource,
}

impl Message for ObstacleHitEvent {}
