use crate::{input::InputAction, sim::FrameSet};
use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused},
};
use leafwing_input_manager::prelude::ActionState;

/// Whether the pointer is locked to the window and steering the view.
#[derive(Resource, Default, Debug)]
pub struct PointerCapture(pub bool);

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<PointerCapture>();

    // Capture changes land before this frame's snapshot is built.
    app.add_systems(
        Update,
        (toggle_capture, release_on_focus_lost)
            .chain()
            .before(FrameSet::Gather),
    );
    app.add_systems(
        Update,
        apply_capture.run_if(resource_changed::<PointerCapture>),
    );
}

fn toggle_capture(actions: Res<ActionState<InputAction>>, mut capture: ResMut<PointerCapture>) {
    if actions.just_pressed(&InputAction::CapturePointer) && !capture.0 {
        capture.0 = true;
    } else if actions.just_pressed(&InputAction::ReleasePointer) && capture.0 {
        capture.0 = false;
    }
}

fn release_on_focus_lost(
    mut messages: MessageReader<WindowFocused>,
    mut capture: ResMut<PointerCapture>,
) {
    for message in messages.read() {
        if !message.focused && capture.0 {
            capture.0 = false;
        }
    }
}

fn apply_capture(
    capture: Res<PointerCapture>,
    mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if capture.0 {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    } else {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
    debug!("pointer capture: {}", capture.0);
}
