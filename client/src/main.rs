// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod camera;
mod collectibles;
mod cursor;
mod hud;
mod input;
mod player;
mod settings;
mod sim;
mod world;

use bevy::prelude::*;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

pub struct AppPlugin;
impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Window {
                title: "Open World 3D".to_string(),
                fit_canvas_to_parent: true,
                ..default()
            }
            .into(),
            ..default()
        }));

        // `sim` inserts the world every other plugin reads, so it goes first.
        app.add_plugins((
            sim::plugin,
            input::plugin,
            cursor::plugin,
            world::plugin,
            player::plugin,
            camera::plugin,
            collectibles::plugin,
            hud::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}
