//! Movement domain: per-tick displacement, facing, and animation choice.

use bevy::prelude::*;

use crate::movement::{FacingVisual, MovementDriver, MovementInput, Player, facing_scale_x};
use crate::sprites::{AnimationController, AnimationState};

pub(crate) fn steer_player(
    input: Res<MovementInput>,
    mut query: Query<&mut MovementDriver, With<Player>>,
) {
    for mut driver in &mut query {
        driver.set_direction(input.axis);
    }
}

/// Moves every driven entity and keeps its visual child in sync.
///
/// Entities without a visual child are still displaced.
pub(crate) fn drive_movement(
    time: Res<Time>,
    mut drivers: Query<(&mut MovementDriver, &mut Transform, Option<&Children>)>,
    mut visuals: Query<
        (&mut Transform, Option<&mut AnimationController>),
        (With<FacingVisual>, Without<MovementDriver>),
    >,
) {
    let dt = time.delta_secs();

    for (mut driver, mut transform, children) in &mut drivers {
        let children: &[Entity] = children.map(|c| &**c).unwrap_or(&[]);

        if driver.take_idle_request() {
            for &child in children {
                if let Ok((_, Some(mut animation))) = visuals.get_mut(child) {
                    animation.force(AnimationState::Idle);
                }
            }
        }

        let Some(step) = driver.step(dt) else {
            continue;
        };

        transform.translation.x += step.displacement;

        for &child in children {
            let Ok((mut visual_transform, animation)) = visuals.get_mut(child) else {
                continue;
            };

            if let Some(sign) = step.facing {
                let scale_x = facing_scale_x(sign, visual_transform.scale.y);
                if visual_transform.scale.x != scale_x {
                    visual_transform.scale.x = scale_x;
                }
            }

            if let Some(mut animation) = animation {
                if animation.play(step.animation) {
                    debug!("Animation -> {:?}", step.animation);
                }
            }
        }
    }
}
