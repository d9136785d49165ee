//! UI domain: per-player HUD health bars.

use bevy::prelude::*;

use crate::combat::Health;
use crate::movement::{Player, PlayerIndex, PlayerName};

const HEALTHBAR_WIDTH: f32 = 200.0;
const HEALTHBAR_HEIGHT: f32 = 20.0;
const HEALTHBAR_PADDING: f32 = 16.0;

/// Marker on a player once its HUD bar exists.
#[derive(Component)]
pub struct HudLinked;

/// Fill element of one player's bar, pointing back at the player it tracks.
#[derive(Component)]
pub struct PlayerHealthBarFill(pub Entity);

/// Give every new player a bar: even slots anchor left, odd slots right,
/// stacking downward in pairs.
pub(crate) fn spawn_player_healthbars(
    mut commands: Commands,
    players: Query<(Entity, &PlayerIndex, &PlayerName), (With<Player>, Without<HudLinked>)>,
) {
    for (player, index, name) in &players {
        let row = (index.0 / 2) as f32;
        let top = Val::Px(HEALTHBAR_PADDING + row * (HEALTHBAR_HEIGHT + HEALTHBAR_PADDING));
        let mut node = Node {
            position_type: PositionType::Absolute,
            top,
            width: Val::Px(HEALTHBAR_WIDTH),
            height: Val::Px(HEALTHBAR_HEIGHT),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        };
        if index.0 % 2 == 0 {
            node.left = Val::Px(HEALTHBAR_PADDING);
        } else {
            node.right = Val::Px(HEALTHBAR_PADDING);
        }

        commands
            .spawn((
                node,
                BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    PlayerHealthBarFill(player),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.8, 0.2, 0.2)),
                ));
            });
        commands.entity(player).insert(HudLinked);
        debug!("HUD bar linked for {}", name.0);
    }
}

pub(crate) fn update_player_healthbars(
    players: Query<&Health, With<Player>>,
    mut fills: Query<(&PlayerHealthBarFill, &mut Node)>,
) {
    for (fill, mut node) in &mut fills {
        let Ok(health) = players.get(fill.0) else {
            continue;
        };
        node.width = Val::Percent(health.percent() * 100.0);
    }
}
