//! Movement domain: timed crouch shared by the player and the enemy.
//!
//! A crouch shrinks and widens the body, drops it by a quarter of its
//! standing height, and swaps the tint. The revert timer lives on the
//! entity itself, so despawning the entity discards it.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::time::Duration;

use crate::movement::CrouchTuning;

/// Standing shape and tints of a body that can crouch
#[derive(Component, Debug, Clone)]
pub struct CrouchProfile {
    pub standing_size: Vec2,
    pub standing_tint: Color,
    pub crouched_tint: Color,
}

impl CrouchProfile {
    /// Half as tall, wider by half the standing height.
    pub fn crouched_size(&self) -> Vec2 {
        Vec2::new(
            self.standing_size.x + self.standing_size.y / 2.0,
            self.standing_size.y / 2.0,
        )
    }

    /// Vertical shift applied when crouching (undone on revert)
    pub fn drop(&self) -> f32 {
        self.standing_size.y / 4.0
    }

    pub fn pose(&self, crouched: bool) -> BodyPose {
        if crouched {
            BodyPose {
                size: self.crouched_size(),
                tint: self.crouched_tint,
                y_shift: -self.drop(),
            }
        } else {
            BodyPose {
                size: self.standing_size,
                tint: self.standing_tint,
                y_shift: self.drop(),
            }
        }
    }
}

/// Shape change to apply when a crouch starts or reverts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPose {
    pub size: Vec2,
    pub tint: Color,
    pub y_shift: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrouchTransition {
    None,
    Started,
    Reverted,
}

#[derive(Component, Debug, Default)]
pub struct Crouch {
    requested: bool,
    revert: Option<Timer>,
}

impl Crouch {
    pub fn is_crouching(&self) -> bool {
        self.requested || self.revert.is_some()
    }

    /// Ask for a crouch. Returns `false` (and does nothing) if one is
    /// already pending or active.
    pub fn request(&mut self) -> bool {
        if self.is_crouching() {
            return false;
        }
        self.requested = true;
        true
    }

    /// Number of reverts currently scheduled (0 or 1)
    #[cfg(test)]
    pub fn pending_reverts(&self) -> usize {
        usize::from(self.revert.is_some())
    }

    /// Drop any pending crouch without reverting the pose.
    pub fn cancel(&mut self) -> bool {
        let had_pending = self.is_crouching();
        self.requested = false;
        self.revert = None;
        had_pending
    }

    /// Start a requested crouch or advance the revert timer.
    pub fn update(&mut self, delta: Duration, duration: f32) -> CrouchTransition {
        if self.requested {
            self.requested = false;
            self.revert = Some(Timer::from_seconds(duration, TimerMode::Once));
            return CrouchTransition::Started;
        }

        let Some(timer) = self.revert.as_mut() else {
            return CrouchTransition::None;
        };

        timer.tick(delta);
        if timer.remaining_secs() > 0.0 {
            return CrouchTransition::None;
        }

        self.revert = None;
        CrouchTransition::Reverted
    }
}

/// Starts requested crouches and reverts expired ones.
///
/// The sprite may sit on the body itself (enemy) or on its children (player).
pub(crate) fn update_crouches(
    time: Res<Time>,
    tuning: Res<CrouchTuning>,
    mut crouchers: Query<(
        Entity,
        &mut Crouch,
        &CrouchProfile,
        &mut Transform,
        &mut Collider,
        Option<&Children>,
    )>,
    mut sprites: Query<&mut Sprite>,
) {
    for (entity, mut crouch, profile, mut transform, mut collider, children) in &mut crouchers {
        let pose = match crouch.update(time.delta(), tuning.duration) {
            CrouchTransition::None => continue,
            CrouchTransition::Started => {
                debug!("{:?} crouching for {}s", entity, tuning.duration);
                profile.pose(true)
            }
            CrouchTransition::Reverted => {
                debug!("{:?} crouch reverted", entity);
                profile.pose(false)
            }
        };

        transform.translation.y += pose.y_shift;
        *collider = Collider::rectangle(pose.size.x, pose.size.y);

        let children: &[Entity] = children.map(|c| &**c).unwrap_or(&[]);
        for target in std::iter::once(entity).chain(children.iter().copied()) {
            if let Ok(mut sprite) = sprites.get_mut(target) {
                sprite.custom_size = Some(pose.size);
                sprite.color = pose.tint;
            }
        }
    }
}

/// Drops every pending crouch revert before run teardown.
pub(crate) fn cancel_pending_crouches(mut crouchers: Query<&mut Crouch>) {
    let mut cancelled = 0;
    for mut crouch in &mut crouchers {
        if crouch.cancel() {
            cancelled += 1;
        }
    }

    if cancelled > 0 {
        debug!("Cancelled {} pending crouch(es)", cancelled);
    }
}
