//! Obstacles domain: components on obstacle entities.

use bevy::prelude::*;

use crate::obstacles::{ObstacleKind, ZoneRole};

#[derive(Component, Debug)]
pub struct Obstacle {
    pub kind: ObstacleKind,
}

/// Which part of an obstacle a collider stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSource {
    /// The full-size body of a solid obstacle
    Body,
    Zone(ZoneRole),
}

impl HitSource {
    pub fn is_hazard(&self) -> bool {
        match self {
            HitSource::Body => true,
            HitSource::Zone(role) => role.is_hazard(),
        }
    }
}

/// Attached to every obstacle collider, pointing back at its obstacle.
#[derive(Component, Debug, Clone, Copy)]
pub struct ObstacleCollider {
    pub owner: Entity,
    pub source: HitSource,
}
