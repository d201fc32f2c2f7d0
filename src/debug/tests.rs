//! Debug domain: tests for hotkey mapping and status messages.

use bevy::prelude::KeyCode;

use super::state::{DebugState, LEVEL_KEYS};

#[test]
fn test_level_keys_map_to_levels() {
    let levels: Vec<i32> = LEVEL_KEYS.iter().map(|(_, level)| *level).collect();
    assert_eq!(levels, vec![0, 1, 2, 3]);
    assert_eq!(LEVEL_KEYS[0].0, KeyCode::Digit0);
    assert_eq!(LEVEL_KEYS[3].0, KeyCode::Digit3);
    assert!(LEVEL_KEYS.iter().all(|(key, _)| *key != KeyCode::KeyM));
}

#[test]
fn test_set_message_replaces_previous() {
    let mut state = DebugState::default();
    state.set_message("first", 1.0);
    state.set_message("second", 2.0);

    assert_eq!(state.status_message, Some(("second".to_string(), 2.0)));
}
