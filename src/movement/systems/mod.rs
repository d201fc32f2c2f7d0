//! Movement domain: system modules for locomotion updates.

pub(crate) mod actions;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use actions::apply_player_actions;
pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{drive_movement, steer_player};
