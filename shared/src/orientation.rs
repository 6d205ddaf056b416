use crate::settings::LookSettings;

/// Accumulated view angles driven by mouse movement.
///
/// `yaw` is unbounded and wraps implicitly through the trig functions that
/// consume it. `pitch` always stays inside the configured clamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationState {
    pub yaw: f32,
    pub pitch: f32,
}

impl OrientationState {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Apply one frame of mouse movement.
    ///
    /// Moving the mouse right (positive `dx`) turns left in yaw; moving it down
    /// (positive `dy`) looks down.
    #[inline]
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32, look: &LookSettings) {
        self.yaw -= dx * look.sensitivity;
        self.pitch -= dy * look.sensitivity;
        self.pitch = self.pitch.clamp(look.pitch_min, look.pitch_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_right_decreases_yaw() {
        let mut o = OrientationState::default();
        o.apply_mouse_delta(100.0, 0.0, &LookSettings::default());
        assert!((o.yaw - (-0.22)).abs() < 1.0e-6);
        assert_eq!(o.pitch, 0.0);
    }

    #[test]
    fn pitch_is_clamped_both_ways() {
        let look = LookSettings::default();
        let mut o = OrientationState::default();

        o.apply_mouse_delta(0.0, -10_000.0, &look);
        assert_eq!(o.pitch, 0.9);

        o.apply_mouse_delta(0.0, 10_000.0, &look);
        assert_eq!(o.pitch, -0.9);
    }

    #[test]
    fn yaw_is_unbounded() {
        let look = LookSettings::default();
        let mut o = OrientationState::default();
        for _ in 0..100 {
            o.apply_mouse_delta(-1_000.0, 0.0, &look);
        }
        assert!(o.yaw > std::f32::consts::TAU);
    }
}
