/*!
Movement, camera and world settings.

These constants centralize every tunable used by the per-frame simulation:
orientation, the character controller, the camera rig and collectible pickup.
Keeping them together makes tuning easier and keeps the reference behavior in
one place.

Notes
- Distances are in world units, time in seconds, angles in radians.
- The typed groups below (`MovementSettings`, `CameraSettings`, ...) default to
  these constants. Override them from data if you want a different feel.
*/

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Horizontal walking speed (units per second).
pub const WALK_SPEED: f32 = 6.0;

/// Horizontal speed while the sprint key is held (units per second).
pub const SPRINT_SPEED: f32 = 10.0;

/// Gravity magnitude (units per second squared, positive value).
/// Integrated as a downward acceleration.
pub const GRAVITY: f32 = 18.0;

/// Upward velocity applied on jump (units per second).
pub const JUMP_IMPULSE: f32 = 7.5;

/// Height of the character center when resting on the floor plane.
pub const GROUND_HEIGHT: f32 = 1.8;

/// Planar collision radius of the character.
pub const CHARACTER_RADIUS: f32 = 0.8;

/// Maximum planar distance from the origin the character may reach.
pub const WORLD_RADIUS: f32 = 240.0;

/// Radians of yaw/pitch per unit of mouse movement.
pub const MOUSE_SENSITIVITY: f32 = 0.0022;

/// Symmetric pitch clamp (radians).
pub const PITCH_LIMIT: f32 = 0.9;

/// Per-call lerp factor used by the trailing camera.
pub const CAMERA_FOLLOW_FACTOR: f32 = 0.12;

/// Distance the camera trails behind the character along its yaw forward.
pub const CAMERA_DISTANCE: f32 = 8.0;

/// Height of the camera above the character center.
pub const CAMERA_HEIGHT: f32 = 3.2;

/// Height above the character center the camera aims from.
pub const CAMERA_LOOK_HEIGHT: f32 = 1.2;

/// Distance along the look direction of the camera look target.
pub const CAMERA_LOOK_DISTANCE: f32 = 10.0;

/// Camera position before the first frame.
pub const CAMERA_START: [f32; 3] = [0.0, 6.0, 12.0];

/// Maximum distance at which a collectible is picked up.
pub const PICKUP_RADIUS: f32 = 1.6;

/// Angular frequency multiplier for collectible bobbing.
pub const BOB_FREQUENCY: f32 = 2.0;

/// Vertical bob rate of collectibles (units per second at peak).
pub const BOB_AMPLITUDE: f32 = 0.6;

/// Number of rocks scattered at world-build time.
pub const OBSTACLE_COUNT: usize = 240;

/// Number of collectibles placed at world-build time.
pub const COLLECTIBLE_COUNT: usize = 12;

/// Largest step the frame driver should feed the simulation (seconds).
pub const MAX_FRAME_DT: f32 = 0.033;

/// Seed used for the reference world.
pub const DEFAULT_WORLD_SEED: u64 = 0x0be7_c0de;

/// Character controller tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub ground_height: f32,
    pub character_radius: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            ground_height: GROUND_HEIGHT,
            character_radius: CHARACTER_RADIUS,
        }
    }
}

/// Mouse-look tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookSettings {
    pub sensitivity: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self {
            sensitivity: MOUSE_SENSITIVITY,
            pitch_min: -PITCH_LIMIT,
            pitch_max: PITCH_LIMIT,
        }
    }
}

/// How the camera follow factor is applied each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CameraSmoothing {
    /// The factor is applied once per call regardless of `dt`.
    #[default]
    PerCall,
    /// The factor describes one step at `reference_hz`; other frame times are
    /// converted with `1 - (1 - factor)^(dt * reference_hz)`.
    FrameRateIndependent { reference_hz: f32 },
}

/// Trailing camera tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub distance: f32,
    pub height: f32,
    pub follow_factor: f32,
    pub look_height: f32,
    pub look_distance: f32,
    pub smoothing: CameraSmoothing,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: CAMERA_DISTANCE,
            height: CAMERA_HEIGHT,
            follow_factor: CAMERA_FOLLOW_FACTOR,
            look_height: CAMERA_LOOK_HEIGHT,
            look_distance: CAMERA_LOOK_DISTANCE,
            smoothing: CameraSmoothing::PerCall,
        }
    }
}

/// Collectible animation and pickup tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupSettings {
    pub radius: f32,
    pub bob_frequency: f32,
    pub bob_amplitude: f32,
}

impl Default for PickupSettings {
    fn default() -> Self {
        Self {
            radius: PICKUP_RADIUS,
            bob_frequency: BOB_FREQUENCY,
            bob_amplitude: BOB_AMPLITUDE,
        }
    }
}

/// World-build parameters. Fixed once the world is generated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub radius: f32,
    pub obstacle_count: usize,
    pub collectible_count: usize,
    pub seed: u64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            radius: WORLD_RADIUS,
            obstacle_count: OBSTACLE_COUNT,
            collectible_count: COLLECTIBLE_COUNT,
            seed: DEFAULT_WORLD_SEED,
        }
    }
}

/// Every settings group used by [`crate::Simulation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub movement: MovementSettings,
    pub look: LookSettings,
    pub camera: CameraSettings,
    pub pickup: PickupSettings,
    pub world: WorldSettings,
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NotPositive { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NotFinite { field })
    }
}

impl SimSettings {
    /// Check the settings can drive the simulation without producing NaNs.
    ///
    /// Use this at load time; the per-frame path assumes validated settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let m = &self.movement;
        positive("movement.walk_speed", m.walk_speed)?;
        positive("movement.sprint_speed", m.sprint_speed)?;
        positive("movement.gravity", m.gravity)?;
        positive("movement.jump_impulse", m.jump_impulse)?;
        positive("movement.character_radius", m.character_radius)?;
        finite("movement.ground_height", m.ground_height)?;

        let l = &self.look;
        positive("look.sensitivity", l.sensitivity)?;
        finite("look.pitch_min", l.pitch_min)?;
        finite("look.pitch_max", l.pitch_max)?;
        if l.pitch_min > l.pitch_max {
            return Err(SettingsError::InvertedPitchClamp {
                min: l.pitch_min,
                max: l.pitch_max,
            });
        }

        let c = &self.camera;
        positive("camera.distance", c.distance)?;
        finite("camera.height", c.height)?;
        finite("camera.look_height", c.look_height)?;
        positive("camera.look_distance", c.look_distance)?;
        if !(c.follow_factor > 0.0 && c.follow_factor <= 1.0) {
            return Err(SettingsError::FollowFactorOutOfRange(c.follow_factor));
        }
        if let CameraSmoothing::FrameRateIndependent { reference_hz } = c.smoothing {
            positive("camera.smoothing.reference_hz", reference_hz)?;
        }

        let p = &self.pickup;
        positive("pickup.radius", p.radius)?;
        finite("pickup.bob_frequency", p.bob_frequency)?;
        finite("pickup.bob_amplitude", p.bob_amplitude)?;

        positive("world.radius", self.world.radius)?;
        if self.world.collectible_count == 0 {
            return Err(SettingsError::NoCollectibles);
        }

        Ok(())
    }
}
