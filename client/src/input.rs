use crate::{cursor::PointerCapture, sim::FrameSet};
use bevy::{input::mouse::AccumulatedMouseMotion, prelude::*};
use leafwing_input_manager::prelude::*;
use shared::{InputSnapshot, MoveKey, clamp_frame_dt};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    Forward,
    Backward,
    Left,
    Right,
    Sprint,
    Jump,
    CapturePointer,
    ReleasePointer,
}

impl InputAction {
    /// The simulation key this action holds down, if any.
    fn move_key(self) -> Option<MoveKey> {
        match self {
            Self::Forward => Some(MoveKey::Forward),
            Self::Backward => Some(MoveKey::Backward),
            Self::Left => Some(MoveKey::Left),
            Self::Right => Some(MoveKey::Right),
            Self::Sprint => Some(MoveKey::Sprint),
            Self::Jump => Some(MoveKey::Jump),
            Self::CapturePointer | Self::ReleasePointer => None,
        }
    }
}

const MOVEMENT_ACTIONS: [InputAction; 6] = [
    InputAction::Forward,
    InputAction::Backward,
    InputAction::Left,
    InputAction::Right,
    InputAction::Sprint,
    InputAction::Jump,
];

/// The snapshot handed to the simulation this frame.
#[derive(Resource, Default)]
pub struct FrameInput(pub InputSnapshot);

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::new([
        (InputAction::Forward, KeyCode::KeyW),
        (InputAction::Backward, KeyCode::KeyS),
        (InputAction::Left, KeyCode::KeyA),
        (InputAction::Right, KeyCode::KeyD),
        (InputAction::Sprint, KeyCode::ShiftLeft),
        (InputAction::Sprint, KeyCode::ShiftRight),
        (InputAction::Jump, KeyCode::Space),
        (InputAction::ReleasePointer, KeyCode::Escape),
    ]);
    input_map.insert(InputAction::CapturePointer, MouseButton::Left);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());

    app.init_resource::<FrameInput>();
    app.add_systems(Update, gather_snapshot.in_set(FrameSet::Gather));
}

fn gather_snapshot(
    actions: Res<ActionState<InputAction>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    capture: Res<PointerCapture>,
    time: Res<Time>,
    mut frame_input: ResMut<FrameInput>,
) {
    let mut snapshot = InputSnapshot::new(clamp_frame_dt(time.delta_secs()));

    for action in MOVEMENT_ACTIONS {
        if let Some(key) = action.move_key() {
            snapshot.keys.set(key, actions.pressed(&action));
        }
    }

    // Movement while the pointer is free is dropped, not buffered.
    if capture.0 {
        snapshot.pointer_captured = true;
        snapshot.mouse_delta = [mouse_motion.delta.x, mouse_motion.delta.y].into();
    }

    frame_input.0 = snapshot;
}
