//! Enemy domain: components and the mirror entry point.

use bevy::prelude::*;

use crate::enemy::EnemyBehavior;

/// The player's pursuer
#[derive(Component, Debug)]
pub struct Enemy;

/// Last behavior applied, used to log transitions
#[derive(Component, Debug, Default)]
pub struct EnemyState {
    pub behavior: Option<EnemyBehavior>,
}

/// Player actions the enemy knows how to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorAction {
    Rise,
    Crouch,
}

impl MirrorAction {
    /// Resolve a symbolic action name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "jump" => Some(MirrorAction::Rise),
            "duck" => Some(MirrorAction::Crouch),
            _ => None,
        }
    }
}
