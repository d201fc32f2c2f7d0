//! Obstacles domain: composite hitbox layouts.
//!
//! Each obstacle kind is split into axis-aligned sub-zones tagged with a
//! role. Offsets are relative to the obstacle's center, so a layout only
//! depends on its kind; the position just travels along.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::obstacles::ObstacleKind;

/// Thickness of the walkable strip on top of a stepable obstacle
pub const SAFE_TOP_HEIGHT: f32 = 15.0;
/// Width of the damaging strips on the sides of a stepable obstacle
pub const DAMAGE_SIDE_WIDTH: f32 = 15.0;
/// Nominal height of the blocking strip under a stepable obstacle
pub const BLOCK_BOTTOM_HEIGHT: f32 = 10.0;
/// Share of a duckable obstacle's height that blocks at the top
pub const COLLISION_ZONE_RATIO: f32 = 0.1;
/// Share of a duckable obstacle's height marked as the duck area
pub const DUCK_INDICATOR_RATIO: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneRole {
    SafeTop,
    DamageSide(Side),
    BlockBottom,
    CollisionZone,
    /// Cosmetic only, no physics
    DuckIndicator,
}

impl ZoneRole {
    /// Touching this zone counts as a hit.
    pub fn is_hazard(&self) -> bool {
        matches!(self, ZoneRole::DamageSide(_) | ZoneRole::CollisionZone)
    }
}

/// Physics categories of one collider, bit-compatible with [`GameLayer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneFilter {
    pub category: LayerMask,
    pub contact_test: LayerMask,
    pub collision: LayerMask,
}

impl ZoneFilter {
    /// Full-size body of a solid obstacle.
    pub fn solid_body() -> Self {
        Self {
            category: GameLayer::Obstacle.into(),
            contact_test: GameLayer::Player.into(),
            collision: GameLayer::Player.into(),
        }
    }

    /// `None` for roles without physics.
    pub fn for_role(role: ZoneRole) -> Option<Self> {
        let filter = match role {
            ZoneRole::SafeTop | ZoneRole::BlockBottom => Self {
                category: GameLayer::Ground.into(),
                contact_test: GameLayer::Player.into(),
                collision: GameLayer::Player.into(),
            },
            ZoneRole::DamageSide(_) => Self {
                category: GameLayer::Obstacle.into(),
                contact_test: GameLayer::Player.into(),
                collision: LayerMask::NONE,
            },
            ZoneRole::CollisionZone => Self::solid_body(),
            ZoneRole::DuckIndicator => return None,
        };
        Some(filter)
    }

    /// Contact-only zones report touches without blocking the player.
    pub fn is_sensor(&self) -> bool {
        (self.collision & LayerMask::from(GameLayer::Player)) == LayerMask::NONE
    }

    pub fn collision_layers(&self) -> CollisionLayers {
        CollisionLayers::new(self.category, self.contact_test | self.collision)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubZone {
    /// Center relative to the obstacle's center
    pub offset: Vec2,
    pub size: Vec2,
    pub role: ZoneRole,
}

impl SubZone {
    pub fn filter(&self) -> Option<ZoneFilter> {
        ZoneFilter::for_role(self.role)
    }

    /// World-space rectangle when the obstacle sits at `origin`.
    #[cfg(test)]
    pub fn rect(&self, origin: Vec2) -> Rect {
        Rect::from_center_size(origin + self.offset, self.size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneLayout {
    pub kind: ObstacleKind,
    /// Obstacle center, including the kind's vertical offset
    pub position: Vec2,
    pub size: Vec2,
    pub tint: Color,
    /// Collider covering the whole obstacle, if it has one
    pub main_body: Option<ZoneFilter>,
    pub zones: Vec<SubZone>,
}

/// Build the hitbox layout for an obstacle of `kind` centered at `position`.
pub fn build_layout(kind: ObstacleKind, position: Vec2) -> ZoneLayout {
    let archetype = kind.archetype();
    let size = archetype.size;

    let (main_body, zones) = match kind {
        ObstacleKind::Solid => (Some(ZoneFilter::solid_body()), Vec::new()),
        ObstacleKind::Stepable => (None, stepable_zones(size)),
        ObstacleKind::Duckable => (None, duckable_zones(size)),
    };

    ZoneLayout {
        kind,
        position: position + Vec2::new(0.0, archetype.y_offset),
        size,
        tint: archetype.tint,
        main_body,
        zones,
    }
}

fn stepable_zones(size: Vec2) -> Vec<SubZone> {
    let half = size / 2.0;
    let lower_height = (size.y - SAFE_TOP_HEIGHT).max(0.0);
    let lower_center_y = -half.y + lower_height / 2.0;
    let bottom_height = BLOCK_BOTTOM_HEIGHT.min(lower_height);

    vec![
        SubZone {
            offset: Vec2::new(0.0, half.y - SAFE_TOP_HEIGHT / 2.0),
            size: Vec2::new(size.x, SAFE_TOP_HEIGHT),
            role: ZoneRole::SafeTop,
        },
        SubZone {
            offset: Vec2::new(-half.x + DAMAGE_SIDE_WIDTH / 2.0, lower_center_y),
            size: Vec2::new(DAMAGE_SIDE_WIDTH, lower_height),
            role: ZoneRole::DamageSide(Side::Left),
        },
        SubZone {
            offset: Vec2::new(half.x - DAMAGE_SIDE_WIDTH / 2.0, lower_center_y),
            size: Vec2::new(DAMAGE_SIDE_WIDTH, lower_height),
            role: ZoneRole::DamageSide(Side::Right),
        },
        SubZone {
            offset: Vec2::new(0.0, -half.y + bottom_height / 2.0),
            size: Vec2::new(size.x - 2.0 * DAMAGE_SIDE_WIDTH, bottom_height),
            role: ZoneRole::BlockBottom,
        },
    ]
}

fn duckable_zones(size: Vec2) -> Vec<SubZone> {
    let half = size / 2.0;
    let collision_height = size.y * COLLISION_ZONE_RATIO;
    let indicator_height = size.y * DUCK_INDICATOR_RATIO;

    vec![
        SubZone {
            offset: Vec2::new(0.0, half.y - collision_height / 2.0),
            size: Vec2::new(size.x, collision_height),
            role: ZoneRole::CollisionZone,
        },
        SubZone {
            offset: Vec2::new(0.0, -half.y + indicator_height / 2.0),
            size: Vec2::new(size.x, indicator_height),
            role: ZoneRole::DuckIndicator,
        },
    ]
}
