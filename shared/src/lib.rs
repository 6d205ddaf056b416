pub mod bitmask_flags;
pub mod camera;
pub mod collectibles;
pub mod error;
pub mod input;
pub mod movement;
pub mod obstacles;
pub mod orientation;
pub mod settings;
pub mod sim;
pub mod utils;

pub use camera::{CameraPose, update_camera};
pub use collectibles::{Collectible, CollectibleTracker};
pub use error::SettingsError;
pub use input::{InputSnapshot, MoveKey, clamp_frame_dt, sanitize_dt};
pub use movement::{CharacterState, step_movement};
pub use obstacles::{Obstacle, ObstacleField};
pub use orientation::OrientationState;
pub use settings::{
    CameraSettings, CameraSmoothing, LookSettings, MovementSettings, PickupSettings, SimSettings,
    WorldSettings,
};
pub use sim::{FrameOutput, Simulation};
pub use utils::{Vec2, Vec3};
