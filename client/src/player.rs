use crate::sim::{FrameSet, LastFrame, WorldSim, to_bevy};
use bevy::prelude::*;

/// The locally controlled character mesh.
#[derive(Component)]
pub struct Player;

const CAPSULE_RADIUS: f32 = 0.6;
const CAPSULE_LENGTH: f32 = 1.2;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_player);
    app.add_systems(Update, sync_player.in_set(FrameSet::Present));
}

fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<WorldSim>,
) {
    commands.spawn((
        Player,
        Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb_u8(0x2b, 0x6f, 0xff))),
        Transform::from_translation(to_bevy(sim.character.position)),
    ));
}

fn sync_player(last: Res<LastFrame>, mut player: Single<&mut Transform, With<Player>>) {
    let Some(frame) = last.0.as_ref() else {
        return;
    };
    player.translation = to_bevy(frame.character_position);
    player.rotation = Quat::from_rotation_y(frame.facing_yaw);
}
