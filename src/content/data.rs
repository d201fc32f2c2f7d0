//! Data definitions for the gameplay defaults RON file.
//!
//! Every section mirrors one tuning resource. Sections and fields are
//! optional; anything omitted keeps the built-in default.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::WorldTuning;
use crate::enemy::EnemyTuning;
use crate::movement::{CrouchTuning, MovementTuning};
use crate::obstacles::ObstacleTuning;
use crate::pursuit::PursuitTuning;

/// Only this schema version is understood by the loader.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    #[serde(default)]
    pub world: WorldTuning,
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub crouch: CrouchTuning,
    #[serde(default)]
    pub enemy: EnemyTuning,
    #[serde(default)]
    pub obstacles: ObstacleTuning,
    #[serde(default)]
    pub pursuit: PursuitTuning,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: SUPPORTED_SCHEMA_VERSION,
            world: WorldTuning::default(),
            movement: MovementTuning::default(),
            crouch: CrouchTuning::default(),
            enemy: EnemyTuning::default(),
            obstacles: ObstacleTuning::default(),
            pursuit: PursuitTuning::default(),
        }
    }
}

impl GameplayDefaults {
    /// Insert every tuning resource (and the physics gravity) into the world.
    pub fn insert_resources(self, commands: &mut Commands) {
        commands.insert_resource(Gravity(Vec2::NEG_Y * self.world.gravity));
        commands.insert_resource(self.world);
        commands.insert_resource(self.movement);
        commands.insert_resource(self.crouch);
        commands.insert_resource(self.enemy);
        commands.insert_resource(self.obstacles);
        commands.insert_resource(self.pursuit);
    }
}
