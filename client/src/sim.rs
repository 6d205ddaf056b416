use crate::{input::FrameInput, settings::resolve_settings};
use bevy::prelude::*;
use shared::{FrameOutput, Simulation};

/// Per-frame ordering: gather input, advance the world, then present it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Gather,
    Simulate,
    Present,
}

/// The simulated world.
#[derive(Resource, Deref, DerefMut)]
pub struct WorldSim(pub Simulation);

/// Output of the most recent tick, read by presentation systems.
#[derive(Resource, Default)]
pub struct LastFrame(pub Option<FrameOutput>);

pub(super) fn plugin(app: &mut App) {
    let settings = resolve_settings();
    app.insert_resource(WorldSim(Simulation::new(settings)));
    app.init_resource::<LastFrame>();

    app.configure_sets(
        Update,
        (FrameSet::Gather, FrameSet::Simulate, FrameSet::Present).chain(),
    );
    app.add_systems(Update, advance.in_set(FrameSet::Simulate));
}

fn advance(input: Res<FrameInput>, mut sim: ResMut<WorldSim>, mut last: ResMut<LastFrame>) {
    last.0 = Some(sim.tick(&input.0));
}

/// Convert a simulation vector into a Bevy one.
#[inline]
pub fn to_bevy(v: shared::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}
