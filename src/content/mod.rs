//! Content domain: data-driven gameplay tuning loaded from RON.

mod data;
mod loader;


pub use data::GameplayDefaults;
pub use loader::load_gameplay_defaults;

use bevy::prelude::*;
use std::path::Path;

pub const GAMEPLAY_DEFAULTS_PATH: &str = "assets/data/gameplay_defaults.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load gameplay defaults and install the tuning resources.
///
/// A missing file falls back to built-in tuning. A file that exists but
/// cannot be understood aborts startup.
fn load_content(mut commands: Commands) {
    let defaults = match load_gameplay_defaults(Path::new(GAMEPLAY_DEFAULTS_PATH)) {
        Ok(Some(defaults)) => {
            info!(
                "Loaded gameplay defaults v{} from {}",
                defaults.schema_version, GAMEPLAY_DEFAULTS_PATH
            );
            defaults
        }
        Ok(None) => {
            warn!(
                "Gameplay defaults not found at {:?}, using built-in tuning",
                GAMEPLAY_DEFAULTS_PATH
            );
            GameplayDefaults::default()
        }
        Err(e) => panic!("{}", e),
    };

    defaults.insert_resources(&mut commands);
}
