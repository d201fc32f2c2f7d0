//! Debug domain: debug systems for input and runtime tweaks.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::RunConfig;
use crate::debug::state::{DebugState, LEVEL_KEYS};
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::enemy::{Enemy, EnemyState};
use crate::movement::{MovementDriver, Player};
use crate::pursuit::{PursuitDistance, PursuitLevelChanged};

/// Toggle the info overlay with F1 or backtick key
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
    }
}

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut player_query: Query<(Entity, &mut PursuitDistance, &mut MovementDriver), With<Player>>,
    mut changed: MessageWriter<PursuitLevelChanged>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    let Ok((entity, mut distance, mut driver)) = player_query.single_mut() else {
        return;
    };

    // Ctrl+0..3: Force the distance level
    for (key, level) in LEVEL_KEYS {
        if !keyboard.just_pressed(key) {
            continue;
        }

        let from = distance.level();
        if let Some(to) = distance.set_level(level) {
            changed.write(PursuitLevelChanged { entity, from, to });
        }
        debug_state.set_message(format!("Distance level {}", level), 2.0);
        info!("[DEBUG] Distance level set to {}", level);
    }

    // Ctrl+M: Toggle the player's movement driver
    if keyboard.just_pressed(KeyCode::KeyM) {
        let msg = if driver.is_enabled() {
            driver.disable();
            "Movement disabled"
        } else {
            driver.enable();
            "Movement enabled"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Update the debug info overlay with current run state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    run_config: Res<RunConfig>,
    player_query: Query<(&Transform, &PursuitDistance, &MovementDriver), With<Player>>,
    enemy_query: Query<&EnemyState, With<Enemy>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let (Ok((transform, distance, driver)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    else {
        return;
    };

    let behavior = enemy_query.iter().next().and_then(|state| state.behavior);
    let pos = transform.translation;
    let mut info = format!(
        "Pos: ({:.0}, {:.0})\nLevel: {}\nEnemy: {:?}\nMoving: {}\nSeed: {}",
        pos.x,
        pos.y,
        distance.level(),
        behavior,
        driver.is_enabled(),
        run_config.seed,
    );
    if let Some((message, _)) = &debug_state.status_message {
        info.push('\n');
        info.push_str(message);
    }
    **text = info;
}
