//! Debug mode for fast iteration and testing.
//!
//! Features:
//! - Force the pursuit distance level (Ctrl+0..3)
//! - Toggle the player's movement (Ctrl+M)
//! - Info overlay with position, level, enemy behavior and seed (F1)

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    handle_debug_hotkeys, toggle_debug_info, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_info,
                handle_debug_hotkeys.run_if(in_state(GameState::Run)),
                update_status_message,
                update_debug_info_overlay,
            ),
        );

        info!("Debug mode enabled: F1 for info, Ctrl+0..3 for distance, Ctrl+M for movement");
    }
}
