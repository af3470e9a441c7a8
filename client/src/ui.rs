//! Asset selector panel.

use bevy::prelude::*;
use shared::ASSETS;

use crate::{character::SwapRequested, physics::Viewer};

const PANEL: Color = Color::srgba(0.1, 0.1, 0.1, 0.8);
const IDLE: Color = Color::srgb(0.2, 0.2, 0.2);
const HOVERED: Color = Color::srgb(0.3, 0.3, 0.3);
const SELECTED: Color = Color::srgb(0.2, 0.45, 0.8);

/// Selector entry for one character asset.
#[derive(Component)]
struct AssetButton(&'static str);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_selector);
    app.add_systems(Update, (press_asset, highlight_selected));
}

fn spawn_selector(mut commands: Commands) {
    commands
        .spawn((
            Name::new("asset selector"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                right: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(PANEL),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("asset"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
            ));

            for asset in ASSETS {
                panel
                    .spawn((
                        Button,
                        AssetButton(asset),
                        Node {
                            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(IDLE),
                    ))
                    .with_child((
                        Text::new(asset),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                    ));
            }
        });
}

fn press_asset(
    buttons: Query<(&Interaction, &AssetButton), Changed<Interaction>>,
    mut swaps: MessageWriter<SwapRequested>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            swaps.write(SwapRequested(button.0.to_owned()));
        }
    }
}

fn highlight_selected(
    viewer: Res<Viewer>,
    mut buttons: Query<(&AssetButton, &Interaction, &mut BackgroundColor)>,
) {
    let active = viewer.active_asset();
    for (button, interaction, mut background) in &mut buttons {
        let color = if active == Some(button.0) {
            SELECTED
        } else if *interaction == Interaction::Hovered {
            HOVERED
        } else {
            IDLE
        };
        background.set_if_neq(BackgroundColor(color));
    }
}
