//! Per-frame input facts handed to the simulation.
//!
//! The presentation layer coalesces raw events between frames into one
//! [`InputSnapshot`]: held keys are last-value-wins, mouse movement is the sum of
//! every delta since the previous frame.

use crate::{
    bitmask_flags::BitmaskFlags,
    define_bitmask_flags,
    settings::MAX_FRAME_DT,
    utils::Vec2,
};

define_bitmask_flags!(
    /// Movement and action keys the controller understands.
    MoveKey, u8, {
        Forward,
        Backward,
        Left,
        Right,
        Sprint,
        Jump,
    }
);

/// Set of held [`MoveKey`]s.
pub type HeldKeys = BitmaskFlags<u8>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub keys: HeldKeys,
    /// Accumulated mouse movement since the previous frame (x right, y down).
    pub mouse_delta: Vec2,
    /// Seconds since the previous frame, already clamped by the caller.
    pub dt: f32,
    /// Mouse deltas only steer the view while the pointer is captured.
    pub pointer_captured: bool,
}

impl InputSnapshot {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: MoveKey) -> Self {
        self.keys.add(key);
        self
    }

    pub fn with_mouse_delta(mut self, dx: f32, dy: f32) -> Self {
        self.mouse_delta = Vec2::new(dx, dy);
        self.pointer_captured = true;
        self
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    pub fn pressed(&self, key: MoveKey) -> bool {
        self.keys.has(key)
    }

    /// Raw movement intent as `(right - left, forward - backward)`.
    pub fn axis(&self) -> Vec2 {
        let flag = |k| if self.pressed(k) { 1.0 } else { 0.0 };
        Vec2::new(
            flag(MoveKey::Right) - flag(MoveKey::Left),
            flag(MoveKey::Forward) - flag(MoveKey::Backward),
        )
    }

    pub fn sprinting(&self) -> bool {
        self.pressed(MoveKey::Sprint)
    }

    pub fn jumping(&self) -> bool {
        self.pressed(MoveKey::Jump)
    }
}

/// Clamp a raw frame time into `[0, MAX_FRAME_DT]`.
///
/// Long stalls (tab switches, debugger breaks) would otherwise integrate one huge
/// step. Non-finite input maps to zero.
#[inline]
pub fn clamp_frame_dt(raw_seconds: f32) -> f32 {
    if !raw_seconds.is_finite() {
        return 0.0;
    }
    raw_seconds.clamp(0.0, MAX_FRAME_DT)
}

/// Frame time the integrators can consume: negative or non-finite becomes 0.
///
/// Unlike [`clamp_frame_dt`] there is no upper bound; callers that hand in a
/// long step get a long step.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_cancels_opposite_keys() {
        let s = InputSnapshot::new(0.016)
            .with_key(MoveKey::Forward)
            .with_key(MoveKey::Backward)
            .with_key(MoveKey::Right);
        assert_eq!(s.axis(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn empty_snapshot_has_no_intent() {
        let s = InputSnapshot::default();
        assert_eq!(s.axis(), Vec2::zeros());
        assert!(!s.sprinting());
        assert!(!s.jumping());
        assert!(!s.pointer_captured);
    }

    #[test]
    fn mouse_delta_implies_capture() {
        let s = InputSnapshot::new(0.016).with_mouse_delta(3.0, -2.0);
        assert!(s.pointer_captured);
        assert_eq!(s.mouse_delta, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn clamp_frame_dt_bounds() {
        assert_eq!(clamp_frame_dt(0.5), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(-1.0), 0.0);
        assert_eq!(clamp_frame_dt(f32::NAN), 0.0);
        assert_eq!(clamp_frame_dt(f32::INFINITY), 0.0);
        assert!((clamp_frame_dt(0.016) - 0.016).abs() < 1.0e-9);
    }

    #[test]
    fn sanitize_dt_zeroes_garbage_only() {
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::NEG_INFINITY), 0.0);
        assert_eq!(sanitize_dt(-0.01), 0.0);
        assert_eq!(sanitize_dt(0.5), 0.5);
    }
}
