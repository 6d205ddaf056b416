use crate::{
    orientation::OrientationState,
    settings::{CAMERA_START, CameraSettings, CameraSmoothing},
    utils::{Vec3, forward_from_yaw, look_direction},
};

/// Where the camera sits and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::from(CAMERA_START),
            look_target: Vec3::zeros(),
        }
    }
}

/// Per-frame lerp amount for the configured smoothing mode.
#[inline]
pub fn follow_alpha(settings: &CameraSettings, dt: f32) -> f32 {
    match settings.smoothing {
        CameraSmoothing::PerCall => settings.follow_factor,
        CameraSmoothing::FrameRateIndependent { reference_hz } => {
            1.0 - (1.0 - settings.follow_factor).powf(dt.max(0.0) * reference_hz)
        }
    }
}

/// Camera position the rig is trying to reach: behind the character along the
/// yaw forward (pitch ignored), raised by the camera height.
#[inline]
pub fn desired_position(
    character_position: Vec3,
    orientation: &OrientationState,
    settings: &CameraSettings,
) -> Vec3 {
    character_position - forward_from_yaw(orientation.yaw) * settings.distance
        + Vec3::new(0.0, settings.height, 0.0)
}

/// Advance the trailing camera one frame.
///
/// The position eases toward [`desired_position`]; the look target is recomputed
/// from scratch every call.
pub fn update_camera(
    current: &CameraPose,
    character_position: Vec3,
    orientation: &OrientationState,
    settings: &CameraSettings,
    dt: f32,
) -> CameraPose {
    let desired = desired_position(character_position, orientation, settings);
    let alpha = follow_alpha(settings, dt);
    let position = current.position.lerp(&desired, alpha);

    let look_target = character_position
        + Vec3::new(0.0, settings.look_height, 0.0)
        + look_direction(orientation.yaw, orientation.pitch) * settings.look_distance;

    CameraPose {
        position,
        look_target,
    }
}
