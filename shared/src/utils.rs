use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Vec2 = na::Vector2<f32>;

/// Project a world position onto the ground plane as `(x, z)`.
#[inline]
pub fn to_planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Lift a planar `(x, z)` position back into world space at height `y`.
#[inline]
pub fn from_planar(p: Vec2, y: f32) -> Vec3 {
    Vec3::new(p.x, y, p.y)
}

/// Planar (XZ) distance squared between two world positions.
#[inline]
pub fn planar_distance_sq(a: Vec3, b: Vec3) -> f32 {
    let x = b.x - a.x;
    let z = b.z - a.z;
    x * x + z * z
}

/// Normalize `v`, or return it unchanged when it has zero length.
///
/// Zero vectors stay zero instead of turning into NaN.
#[inline]
pub fn normalize_or_zero<const D: usize>(v: na::SVector<f32, D>) -> na::SVector<f32, D> {
    let len_sq = v.norm_squared();
    if len_sq > 0.0 { v / len_sq.sqrt() } else { v }
}

/// Yaw-only forward vector. `yaw = 0` faces +Z.
#[inline]
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Forward rotated a quarter turn on the ground plane.
#[inline]
pub fn right_from_forward(forward: Vec3) -> Vec3 {
    Vec3::new(forward.z, 0.0, -forward.x)
}

/// Unit look direction from spherical yaw/pitch angles.
#[inline]
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    Vec3::new(sy * cp, sp, cy * cp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn normalize_or_zero_keeps_zero() {
        let z = normalize_or_zero(Vec3::zeros());
        assert_eq!(z, Vec3::zeros());
        assert!(!z.x.is_nan());
    }

    #[test]
    fn normalize_or_zero_returns_unit() {
        let n = normalize_or_zero(Vec2::new(1.0, 1.0));
        assert!((n.norm() - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn forward_and_right_form_ground_basis() {
        let f = forward_from_yaw(0.0);
        assert!((f - Vec3::new(0.0, 0.0, 1.0)).norm() < 1.0e-6);

        let r = right_from_forward(f);
        assert!((r - Vec3::new(1.0, 0.0, 0.0)).norm() < 1.0e-6);
        assert!(f.dot(&r).abs() < 1.0e-6);

        let f90 = forward_from_yaw(FRAC_PI_2);
        assert!((f90 - Vec3::new(1.0, 0.0, 0.0)).norm() < 1.0e-6);
    }

    #[test]
    fn look_direction_is_unit() {
        for &(yaw, pitch) in &[(0.0, 0.0), (1.3, 0.9), (-2.0, -0.4), (10.0, 0.2)] {
            let d = look_direction(yaw, pitch);
            assert!((d.norm() - 1.0).abs() < 1.0e-5);
        }
    }

    #[test]
    fn planar_distance_ignores_height() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 100.0, 4.0);
        assert!((planar_distance_sq(a, b) - 25.0).abs() < 1.0e-6);
        assert_eq!(to_planar(b), Vec2::new(3.0, 4.0));
        assert_eq!(from_planar(Vec2::new(3.0, 4.0), 2.0), Vec3::new(3.0, 2.0, 4.0));
    }
}
