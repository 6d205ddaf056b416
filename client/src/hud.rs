use crate::sim::{FrameSet, LastFrame, WorldSim};
use bevy::prelude::*;

/// Text node showing the collected count.
#[derive(Component)]
struct CollectedText;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud);
    app.add_systems(Update, update_collected.in_set(FrameSet::Present));
}

fn collected_label(collected: usize, total: usize) -> String {
    format!("Collected {collected} / {total}")
}

fn spawn_hud(mut commands: Commands, sim: Res<WorldSim>) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Open World 3D"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new("Click to lock mouse · WASD move · Space jump · Shift sprint"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            ));
            parent.spawn((
                CollectedText,
                Text::new(collected_label(
                    sim.collectibles.collected(),
                    sim.collectibles.total(),
                )),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb_u8(0xff, 0xd2, 0x3f)),
            ));
        });
}

fn update_collected(last: Res<LastFrame>, mut text: Single<&mut Text, With<CollectedText>>) {
    let Some(frame) = last.0.as_ref() else {
        return;
    };
    if frame.picked_up == 0 {
        return;
    }
    text.0 = collected_label(frame.collected, frame.total);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_reads_count_over_total() {
        assert_eq!(collected_label(3, 12), "Collected 3 / 12");
    }
}
