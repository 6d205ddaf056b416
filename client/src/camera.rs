use crate::sim::{FrameSet, LastFrame, WorldSim, to_bevy};
use bevy::prelude::*;

const FOG_COLOR: Color = Color::srgb(0.537, 0.769, 1.0);
const FOG_START: f32 = 40.0;
const FOG_END: f32 = 260.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(Update, follow_player.in_set(FrameSet::Present));
}

fn add_camera(mut commands: Commands, sim: Res<WorldSim>) {
    let pose = sim.camera;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 500.0,
            ..default()
        }),
        Transform::from_translation(to_bevy(pose.position))
            .looking_at(to_bevy(sim.character.position), Vec3::Y),
        DistanceFog {
            color: FOG_COLOR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
    ));
}

/// Place the camera where the rig put it this frame.
fn follow_player(last: Res<LastFrame>, mut camera: Single<&mut Transform, With<Camera3d>>) {
    let Some(frame) = last.0.as_ref() else {
        return;
    };
    **camera = Transform::from_translation(to_bevy(frame.camera.position))
        .looking_at(to_bevy(frame.camera.look_target), Vec3::Y);
}
