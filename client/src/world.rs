use crate::sim::{WorldSim, to_bevy};
use bevy::prelude::*;

const SKY_COLOR: Color = Color::srgb(0.537, 0.769, 1.0);
const GROUND_SIZE: f32 = 1000.0;
/// Sky-tinted fill light so faces turned away from the sun keep some shape.
const FILL_COLOR: Color = Color::srgb(0.73, 0.82, 0.82);
const FILL_BRIGHTNESS: f32 = 600.0;

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(SKY_COLOR));
    app.insert_resource(AmbientLight {
        color: FILL_COLOR,
        brightness: FILL_BRIGHTNESS,
        ..default()
    });
    app.add_systems(Startup, setup);
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<WorldSim>,
) {
    commands.spawn((
        Mesh3d(
            meshes.add(
                Plane3d::default()
                    .mesh()
                    .size(GROUND_SIZE, GROUND_SIZE)
                    .build(),
            ),
        ),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x4a, 0x8f, 0x54),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // sun
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let rock_mesh = meshes.add(Sphere::new(1.0).mesh().uv(7, 5));
    let rock_material = materials.add(Color::srgb_u8(0x7b, 0x7b, 0x7b));

    for obstacle in sim.obstacles.iter() {
        let center = to_bevy(obstacle.position);
        commands.spawn((
            Mesh3d(rock_mesh.clone()),
            MeshMaterial3d(rock_material.clone()),
            Transform::from_translation(center)
                .with_rotation(rock_tilt(center))
                .with_scale(Vec3::splat(obstacle.radius)),
        ));
    }

    info!("world ready: {} rocks", sim.obstacles.len());
}

/// A stable, rock-specific orientation so the low-poly spheres don't all line up.
fn rock_tilt(center: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        center.x.sin() * std::f32::consts::PI,
        center.z.cos() * std::f32::consts::PI,
        (center.x * center.z).sin(),
    )
}
