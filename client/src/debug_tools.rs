//! Debug/performance tooling for native dev builds.
//!
//! Compiled only behind `dev_native` (see `main.rs`).

use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

use crate::sim::WorldSim;

/// Add debug/perf tooling (intended for `dev_native` builds only).
pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        LogDiagnosticsPlugin::default(),
    ));

    app.add_systems(Update, log_character_on_f3);
}

fn log_character_on_f3(keys: Res<ButtonInput<KeyCode>>, sim: Res<WorldSim>) {
    if keys.just_pressed(KeyCode::F3) {
        let c = &sim.character;
        info!(
            "character at ({:.2}, {:.2}, {:.2}) grounded={} yaw={:.3} pitch={:.3}",
            c.position.x,
            c.position.y,
            c.position.z,
            c.grounded,
            sim.orientation.yaw,
            sim.orientation.pitch
        );
    }
}
