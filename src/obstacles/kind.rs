//! Obstacles domain: the archetype table.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Cannot be touched at all
    Solid,
    /// Can be stepped on from the top
    Stepable,
    /// Must be ducked under
    Duckable,
}

/// Nominal shape and look of an obstacle kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleArchetype {
    pub size: Vec2,
    pub tint: Color,
    pub y_offset: f32,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Solid,
        ObstacleKind::Stepable,
        ObstacleKind::Duckable,
    ];

    pub fn archetype(&self) -> ObstacleArchetype {
        match self {
            ObstacleKind::Solid => ObstacleArchetype {
                size: Vec2::new(40.0, 60.0),
                tint: Color::srgb(1.0, 0.0, 0.0),
                y_offset: 0.0,
            },
            ObstacleKind::Stepable => ObstacleArchetype {
                size: Vec2::new(100.0, 20.0),
                tint: Color::srgb(0.0, 0.0, 1.0),
                y_offset: 0.0,
            },
            ObstacleKind::Duckable => ObstacleArchetype {
                size: Vec2::new(80.0, 60.0),
                tint: Color::srgb(0.0, 1.0, 0.0),
                y_offset: 0.0,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ObstacleKind::Solid => "solid",
            ObstacleKind::Stepable => "stepable",
            ObstacleKind::Duckable => "duckable",
        }
    }
}
