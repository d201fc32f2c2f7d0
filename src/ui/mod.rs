//! UI domain: in-run HUD elements.

mod hud_distance;

#[cfg(test)]
mod tests;

pub use hud_distance::distance_label;

use bevy::prelude::*;

use crate::ui::hud_distance::{spawn_distance_ui, update_distance_ui};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_distance_ui)
            .add_systems(Update, update_distance_ui);
    }
}
