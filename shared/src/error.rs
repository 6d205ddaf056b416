use thiserror::Error;

/// Reasons a [`crate::SimSettings`] value cannot drive the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("`{field}` must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must be finite")]
    NotFinite { field: &'static str },

    #[error("pitch clamp is inverted: min {min} > max {max}")]
    InvertedPitchClamp { min: f32, max: f32 },

    #[error("camera follow factor must be in (0, 1], got {0}")]
    FollowFactorOutOfRange(f32),

    #[error("world must contain at least one collectible")]
    NoCollectibles,
}
