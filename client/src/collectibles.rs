use std::f32::consts::FRAC_PI_2;

use crate::sim::{FrameSet, WorldSim, to_bevy};
use bevy::prelude::*;

/// Index of the simulated collectible this mesh renders.
#[derive(Component, Debug, Clone, Copy)]
pub struct CollectibleMesh(pub usize);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_collectibles);
    app.add_systems(Update, sync_collectibles.in_set(FrameSet::Present));
}

fn spawn_collectibles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<WorldSim>,
) {
    let mesh = meshes.add(Torus::new(0.25, 0.55));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xff, 0xd2, 0x3f),
        emissive: LinearRgba::rgb(0.6, 0.45, 0.05),
        ..default()
    });

    for (index, item) in sim.collectibles.items().iter().enumerate() {
        commands.spawn((
            CollectibleMesh(index),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(to_bevy(item.position))
                .with_rotation(ring_rotation(item.spin)),
        ));
    }
}

/// Stand the ring upright, then spin it about +Y.
fn ring_rotation(spin: f32) -> Quat {
    Quat::from_rotation_y(spin) * Quat::from_rotation_x(FRAC_PI_2)
}

fn sync_collectibles(
    sim: Res<WorldSim>,
    mut meshes: Query<(&CollectibleMesh, &mut Transform, &mut Visibility)>,
) {
    let items = sim.collectibles.items();
    for (CollectibleMesh(index), mut transform, mut visibility) in &mut meshes {
        let Some(item) = items.get(*index) else {
            continue;
        };

        if !item.visible {
            if *visibility != Visibility::Hidden {
                *visibility = Visibility::Hidden;
            }
            continue;
        }

        transform.translation = to_bevy(item.position);
        transform.rotation = ring_rotation(item.spin);
    }
}
