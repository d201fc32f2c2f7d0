//! UI domain: pursuit distance HUD element.

use bevy::prelude::*;

use crate::movement::Player;
use crate::pursuit::{MAX_PURSUIT_LEVEL, PursuitDistance};

pub const HUD_PADDING: f32 = 16.0;
const PIP_SIZE: f32 = 14.0;
const PIP_FILLED: Color = Color::srgb(0.4, 0.85, 0.5);
const PIP_EMPTY: Color = Color::srgba(0.3, 0.3, 0.3, 0.6);

/// Marker for the distance text
#[derive(Component)]
pub struct DistanceText;

/// One pip per distance level, lit while the enemy is at least that far
#[derive(Component)]
pub struct DistancePip {
    pub index: i32,
}

pub fn distance_label(level: i32) -> String {
    if level <= 0 {
        "Caught!".to_string()
    } else {
        format!("Distance {}", level)
    }
}

pub(crate) fn spawn_distance_ui(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|parent| {
            for index in 1..=MAX_PURSUIT_LEVEL {
                parent.spawn((
                    DistancePip { index },
                    Node {
                        width: Val::Px(PIP_SIZE),
                        height: Val::Px(PIP_SIZE),
                        ..default()
                    },
                    BackgroundColor(PIP_FILLED),
                ));
            }

            parent.spawn((
                DistanceText,
                Text::new(distance_label(MAX_PURSUIT_LEVEL)),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}

pub(crate) fn update_distance_ui(
    player_query: Query<&PursuitDistance, With<Player>>,
    mut text_query: Query<&mut Text, With<DistanceText>>,
    mut pip_query: Query<(&DistancePip, &mut BackgroundColor)>,
    mut shown: Local<Option<i32>>,
) {
    let Ok(distance) = player_query.single() else {
        return;
    };

    let level = distance.level();
    if *shown == Some(level) {
        return;
    }
    *shown = Some(level);

    for mut text in &mut text_query {
        **text = distance_label(level);
    }

    for (pip, mut color) in &mut pip_query {
        color.0 = if pip.index <= level {
            PIP_FILLED
        } else {
            PIP_EMPTY
        };
    }
}
