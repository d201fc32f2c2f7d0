//! UI domain: tests for HUD text.

use super::distance_label;

#[test]
fn test_distance_label() {
    assert_eq!(distance_label(3), "Distance 3");
    assert_eq!(distance_label(1), "Distance 1");
    assert_eq!(distance_label(0), "Caught!");
}
