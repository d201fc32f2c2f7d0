//! Obstacles domain: tests for archetypes, zone layouts, and the spawner.

use avian2d::prelude::LayerMask;
use bevy::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use super::{
    HitSource, ObstacleKind, ObstacleSpawner, Side, SubZone, ZoneFilter, ZoneRole, build_layout,
};
use crate::movement::GameLayer;

const EPSILON: f32 = 1e-4;

fn overlaps(a: &SubZone, b: &SubZone) -> bool {
    let (ra, rb) = (a.rect(Vec2::ZERO), b.rect(Vec2::ZERO));
    let overlap_x = ra.max.x.min(rb.max.x) - ra.min.x.max(rb.min.x);
    let overlap_y = ra.max.y.min(rb.max.y) - ra.min.y.max(rb.min.y);
    overlap_x > EPSILON && overlap_y > EPSILON
}

fn zone(layout_zones: &[SubZone], role: ZoneRole) -> SubZone {
    *layout_zones
        .iter()
        .find(|z| z.role == role)
        .expect("zone present")
}

// -----------------------------------------------------------------------------
// Archetype tests
// -----------------------------------------------------------------------------

#[test]
fn test_archetype_table() {
    let solid = ObstacleKind::Solid.archetype();
    let stepable = ObstacleKind::Stepable.archetype();
    let duckable = ObstacleKind::Duckable.archetype();

    assert_eq!(solid.size, Vec2::new(40.0, 60.0));
    assert_eq!(stepable.size, Vec2::new(100.0, 20.0));
    assert_eq!(duckable.size, Vec2::new(80.0, 60.0));

    assert_eq!(stepable.tint, Color::srgb(0.0, 0.0, 1.0));
    assert_eq!(solid.tint, Color::srgb(1.0, 0.0, 0.0));
    assert_eq!(duckable.tint, Color::srgb(0.0, 1.0, 0.0));

    for kind in ObstacleKind::ALL {
        assert_eq!(kind.archetype().y_offset, 0.0);
    }
}

// -----------------------------------------------------------------------------
// Layout tests
// -----------------------------------------------------------------------------

#[test]
fn test_solid_layout_is_one_main_body() {
    let layout = build_layout(ObstacleKind::Solid, Vec2::new(10.0, 20.0));

    assert_eq!(layout.main_body, Some(ZoneFilter::solid_body()));
    assert!(layout.zones.is_empty());
    assert_eq!(layout.size, Vec2::new(40.0, 60.0));
    assert_eq!(layout.position, Vec2::new(10.0, 20.0));
}

#[test]
fn test_stepable_roles_partition_exactly() {
    let layout = build_layout(ObstacleKind::Stepable, Vec2::ZERO);

    assert!(layout.main_body.is_none());
    assert_eq!(layout.zones.len(), 4);

    let roles: HashSet<ZoneRole> = layout.zones.iter().map(|z| z.role).collect();
    let expected: HashSet<ZoneRole> = [
        ZoneRole::SafeTop,
        ZoneRole::DamageSide(Side::Left),
        ZoneRole::DamageSide(Side::Right),
        ZoneRole::BlockBottom,
    ]
    .into_iter()
    .collect();
    assert_eq!(roles, expected);
}

#[test]
fn test_stepable_zones_tile_the_obstacle() {
    let layout = build_layout(ObstacleKind::Stepable, Vec2::ZERO);
    let bounds = Rect::from_center_size(Vec2::ZERO, layout.size);

    let area: f32 = layout.zones.iter().map(|z| z.size.x * z.size.y).sum();
    assert!((area - layout.size.x * layout.size.y).abs() < EPSILON);

    for z in &layout.zones {
        let rect = z.rect(Vec2::ZERO);
        assert!(rect.min.x >= bounds.min.x - EPSILON);
        assert!(rect.max.x <= bounds.max.x + EPSILON);
        assert!(rect.min.y >= bounds.min.y - EPSILON);
        assert!(rect.max.y <= bounds.max.y + EPSILON);
    }
}

#[test]
fn test_stepable_zone_geometry() {
    let layout = build_layout(ObstacleKind::Stepable, Vec2::ZERO);

    let top = zone(&layout.zones, ZoneRole::SafeTop);
    assert_eq!(top.size, Vec2::new(100.0, 15.0));
    assert_eq!(top.rect(Vec2::ZERO).max.y, 10.0);

    let left = zone(&layout.zones, ZoneRole::DamageSide(Side::Left));
    assert_eq!(left.size, Vec2::new(15.0, 5.0));
    assert_eq!(left.rect(Vec2::ZERO).min.x, -50.0);

    let right = zone(&layout.zones, ZoneRole::DamageSide(Side::Right));
    assert_eq!(right.rect(Vec2::ZERO).max.x, 50.0);

    let bottom = zone(&layout.zones, ZoneRole::BlockBottom);
    assert_eq!(bottom.size, Vec2::new(70.0, 5.0));
    assert_eq!(bottom.rect(Vec2::ZERO).min.y, -10.0);
}

#[test]
fn test_zones_never_overlap() {
    for kind in ObstacleKind::ALL {
        let layout = build_layout(kind, Vec2::new(-3.0, 7.0));
        for (i, a) in layout.zones.iter().enumerate() {
            for b in &layout.zones[i + 1..] {
                assert!(!overlaps(a, b), "{:?} overlaps {:?} in {:?}", a.role, b.role, kind);
            }
        }
    }
}

#[test]
fn test_layout_is_translation_invariant() {
    for kind in ObstacleKind::ALL {
        let at_origin = build_layout(kind, Vec2::ZERO);
        let moved = build_layout(kind, Vec2::new(450.0, -95.0));

        assert_eq!(at_origin.zones, moved.zones);
        assert_eq!(at_origin.main_body, moved.main_body);
        assert_eq!(moved.position, Vec2::new(450.0, -95.0));

        for (a, b) in at_origin.zones.iter().zip(&moved.zones) {
            let shifted = a.rect(Vec2::new(450.0, -95.0));
            assert_eq!(shifted, b.rect(moved.position));
        }
    }
}

#[test]
fn test_duckable_layout() {
    let layout = build_layout(ObstacleKind::Duckable, Vec2::ZERO);

    assert!(layout.main_body.is_none());
    assert_eq!(layout.zones.len(), 2);

    let strip = zone(&layout.zones, ZoneRole::CollisionZone);
    assert!((strip.size.y - 6.0).abs() < EPSILON);
    assert!((strip.rect(Vec2::ZERO).max.y - 30.0).abs() < EPSILON);
    assert!(!strip.filter().unwrap().is_sensor());

    let marker = zone(&layout.zones, ZoneRole::DuckIndicator);
    assert!((marker.size.y - 24.0).abs() < EPSILON);
    assert!((marker.rect(Vec2::ZERO).min.y + 30.0).abs() < EPSILON);
    assert!(marker.filter().is_none());
}

// -----------------------------------------------------------------------------
// Filter tests
// -----------------------------------------------------------------------------

#[test]
fn test_layer_bits_are_exact() {
    assert_eq!(LayerMask::NONE.0, 0);
    assert_eq!(LayerMask::from(GameLayer::Player).0, 1 << 0);
    assert_eq!(LayerMask::from(GameLayer::Ground).0, 1 << 1);
    assert_eq!(LayerMask::from(GameLayer::Obstacle).0, 1 << 2);
    assert_eq!(LayerMask::from(GameLayer::Enemy).0, 1 << 3);
}

#[test]
fn test_zone_filters_are_bit_exact() {
    let safe_top = ZoneFilter::for_role(ZoneRole::SafeTop).unwrap();
    assert_eq!(
        (safe_top.category.0, safe_top.contact_test.0, safe_top.collision.0),
        (0b10, 0b1, 0b1)
    );

    let bottom = ZoneFilter::for_role(ZoneRole::BlockBottom).unwrap();
    assert_eq!(bottom, safe_top);

    let side = ZoneFilter::for_role(ZoneRole::DamageSide(Side::Left)).unwrap();
    assert_eq!(
        (side.category.0, side.contact_test.0, side.collision.0),
        (0b100, 0b1, 0)
    );
    assert!(side.is_sensor());

    let strip = ZoneFilter::for_role(ZoneRole::CollisionZone).unwrap();
    assert_eq!(
        (strip.category.0, strip.contact_test.0, strip.collision.0),
        (0b100, 0b1, 0b1)
    );

    let body = ZoneFilter::solid_body();
    assert_eq!(body, strip);
    assert!(!body.is_sensor());
}

#[test]
fn test_hazards() {
    assert!(HitSource::Body.is_hazard());
    assert!(HitSource::Zone(ZoneRole::DamageSide(Side::Right)).is_hazard());
    assert!(HitSource::Zone(ZoneRole::CollisionZone).is_hazard());
    assert!(!HitSource::Zone(ZoneRole::SafeTop).is_hazard());
    assert!(!HitSource::Zone(ZoneRole::BlockBottom).is_hazard());
    assert!(!HitSource::Zone(ZoneRole::DuckIndicator).is_hazard());
}

// -----------------------------------------------------------------------------
// Spawner tests
// -----------------------------------------------------------------------------

#[test]
fn test_spawner_is_deterministic_per_seed() {
    let mut a = ObstacleSpawner::new(42, 2.0);
    let mut b = ObstacleSpawner::new(42, 2.0);

    let seq_a: Vec<ObstacleKind> = (0..16).map(|_| a.next_kind()).collect();
    let seq_b: Vec<ObstacleKind> = (0..16).map(|_| b.next_kind()).collect();

    assert_eq!(seq_a, seq_b);
    assert_eq!(a.spawned(), 16);
}

#[test]
fn test_spawner_fires_once_per_interval() {
    let mut spawner = ObstacleSpawner::new(7, 2.0);

    assert_eq!(spawner.tick(Duration::from_millis(1500)), 0);
    assert_eq!(spawner.tick(Duration::from_millis(500)), 1);
    assert_eq!(spawner.tick(Duration::from_secs(4)), 2);
}
