//! Pursuit domain: tests for hits, cooldown, and recovery.

use std::time::Duration;

use super::{MAX_PURSUIT_LEVEL, PursuitDistance, PursuitTuning};

fn distance() -> PursuitDistance {
    PursuitDistance::new(&PursuitTuning::default())
}

#[test]
fn test_starts_out_of_sight() {
    let distance = distance();
    assert_eq!(distance.level(), MAX_PURSUIT_LEVEL);
    assert!(!distance.is_caught());
    assert!(!distance.in_cooldown());
}

#[test]
fn test_starting_level_is_clamped() {
    let tuning = PursuitTuning {
        starting_level: 9,
        ..Default::default()
    };
    assert_eq!(PursuitDistance::new(&tuning).level(), MAX_PURSUIT_LEVEL);
}

#[test]
fn test_hit_lowers_level_once_per_cooldown() {
    let mut distance = distance();

    assert_eq!(distance.register_hit(), Some(2));
    assert!(distance.in_cooldown());
    assert_eq!(distance.register_hit(), None);
    assert_eq!(distance.level(), 2);

    distance.tick(Duration::from_millis(750));
    assert!(!distance.in_cooldown());
    assert_eq!(distance.register_hit(), Some(1));
}

#[test]
fn test_level_floors_at_caught() {
    let mut distance = distance();
    distance.set_level(0);

    assert!(distance.is_caught());
    assert_eq!(distance.register_hit(), None);
    assert_eq!(distance.level(), 0);
}

#[test]
fn test_recovers_one_level_per_period() {
    let mut distance = distance();
    distance.set_level(1);

    assert_eq!(distance.tick(Duration::from_secs(3)), None);
    assert_eq!(distance.tick(Duration::from_secs(1)), Some(2));
    assert_eq!(distance.tick(Duration::from_secs(4)), Some(3));

    // Capped at the farthest level
    assert_eq!(distance.tick(Duration::from_secs(4)), None);
    assert_eq!(distance.level(), MAX_PURSUIT_LEVEL);
}

#[test]
fn test_hit_restarts_recovery_period() {
    let mut distance = distance();
    distance.register_hit();

    distance.tick(Duration::from_secs(3));
    distance.tick(Duration::from_millis(100));
    assert_eq!(distance.level(), 2);

    // Cooldown is over; this hit resets the 4 s recovery window
    assert_eq!(distance.register_hit(), Some(1));
    assert_eq!(distance.tick(Duration::from_secs(3)), None);
    assert_eq!(distance.tick(Duration::from_secs(1)), Some(2));
}

#[test]
fn test_caught_player_recovers() {
    let mut distance = distance();
    distance.set_level(0);

    assert_eq!(distance.tick(Duration::from_secs(4)), Some(1));
    assert!(!distance.is_caught());
}

#[test]
fn test_set_level_clamps_and_reports_changes() {
    let mut distance = distance();

    assert_eq!(distance.set_level(-4), Some(0));
    assert_eq!(distance.set_level(0), None);
    assert_eq!(distance.set_level(7), Some(MAX_PURSUIT_LEVEL));
}

#[test]
fn test_zero_recovery_period_never_lowers_level() {
    let tuning = PursuitTuning {
        starting_level: 1,
        recovery_seconds: 0.0,
        ..Default::default()
    };
    let mut distance = PursuitDistance::new(&tuning);

    distance.tick(Duration::from_millis(16));

    assert!(distance.level() >= 1);
    assert!(distance.level() <= MAX_PURSUIT_LEVEL);
}
