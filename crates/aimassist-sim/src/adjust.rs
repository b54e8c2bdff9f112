//! Direction adjuster.
//!
//! Bends a firing direction toward the selected target's aim point, never by
//! more than the inner half-angle. Length of the input vector is preserved.

use glam::{Quat, Vec3};

use aimassist_core::config::ConeSettings;
use aimassist_core::constants::{ANGLE_TOLERANCE, BLEND_EPSILON};
use aimassist_core::types::ScoredCandidate;

use crate::scorer::{angle_between_unit, split_direction};

/// Result of bending one firing direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// New firing direction, same length as the input.
    pub direction: Vec3,
    /// Angle between input and output (radians).
    pub deviation: f32,
    /// The aim point was already inside the inner cone.
    pub snapped: bool,
}

/// Bend `input` toward `aim_point` by at most `inner_half_angle`.
///
/// Returns `None` when there is nothing to do: zero-length or non-finite
/// input, or an aim point coincident with the shooter.
pub fn adjust(
    shooter_pos: Vec3,
    input: Vec3,
    aim_point: Vec3,
    inner_half_angle: f32,
) -> Option<Adjustment> {
    let (n, len) = split_direction(input)?;
    let desired = (aim_point - shooter_pos).try_normalize()?;

    let (dir, snapped) = bend_toward(n, desired, inner_half_angle);
    Some(Adjustment {
        direction: dir * len,
        deviation: angle_between_unit(n, dir),
        snapped,
    })
}

/// Adjusted firing direction, or `input` unchanged when there is no target.
pub fn adjust_direction(
    shooter_pos: Vec3,
    input: Vec3,
    best: Option<&ScoredCandidate>,
    settings: &ConeSettings,
) -> Vec3 {
    best.and_then(|best| adjust(shooter_pos, input, best.aim_point, settings.inner_half_angle))
        .map_or(input, |a| a.direction)
}

/// Unit direction between `n` and `desired`, at most `inner` radians from `n`.
///
/// Snaps to `desired` when it already lies in the inner cone. Otherwise blends
/// linearly; a blend that overshoots the budget (wide cones, rounding) is
/// replaced by an exact rotation of `inner` radians.
pub fn bend_toward(n: Vec3, desired: Vec3, inner: f32) -> (Vec3, bool) {
    let cos_inner = inner.cos();
    let dot = n.dot(desired);
    if dot >= cos_inner {
        return (desired, true);
    }

    let t = ((1.0 - cos_inner) / (1.0 - dot).max(BLEND_EPSILON)).clamp(0.0, 1.0);
    match (desired * t + n * (1.0 - t)).try_normalize() {
        Some(blended) if angle_between_unit(n, blended) <= inner + ANGLE_TOLERANCE => {
            (blended, false)
        }
        _ => (rotate_toward(n, desired, inner), false),
    }
}

/// Rotate unit `from` by `angle` radians in the plane containing `to`.
///
/// Antiparallel inputs rotate about an arbitrary perpendicular axis.
pub fn rotate_toward(from: Vec3, to: Vec3, angle: f32) -> Vec3 {
    let axis = from
        .cross(to)
        .try_normalize()
        .unwrap_or_else(|| from.any_orthonormal_vector());
    (Quat::from_axis_angle(axis, angle) * from).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER: f32 = 0.05;

    fn deg(d: f32) -> f32 {
        d.to_radians()
    }

    #[test]
    fn test_snap_inside_inner_cone() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let aim = pos + Vec3::new(1.0, 100.0, 0.0);
        let input = Vec3::Y * 3.0;
        let adj = adjust(pos, input, aim, INNER).unwrap();
        assert!(adj.snapped);
        let expected = (aim - pos).normalize() * 3.0;
        assert!((adj.direction - expected).length() < 1e-6);
    }

    #[test]
    fn test_bend_limited_to_inner() {
        let input = Vec3::Y;
        let aim = Vec3::new(20.0, 100.0, 0.0); // ~11.3 degrees
        let adj = adjust(Vec3::ZERO, input, aim, deg(2.5)).unwrap();
        assert!(!adj.snapped);
        assert!(adj.deviation <= deg(2.5) + ANGLE_TOLERANCE);
        assert!(adj.deviation > 0.0);
        // Moved toward the target
        let desired = aim.normalize();
        assert!(adj.direction.normalize().dot(desired) > input.dot(desired));
    }

    #[test]
    fn test_length_preserved() {
        let input = Vec3::new(0.0, 7.5, 0.0);
        let adj = adjust(Vec3::ZERO, input, Vec3::new(30.0, 100.0, 5.0), deg(4.0)).unwrap();
        assert!((adj.direction.length() - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_huge_input_is_adjusted() {
        let input = Vec3::Y * 1e20;
        let adj = adjust(Vec3::ZERO, input, Vec3::new(1.0, 100.0, 0.0), INNER).unwrap();
        assert!(adj.snapped);
        assert!(adj.direction.is_finite());
        assert!((adj.direction.length() / 1e20 - 1.0).abs() < 1e-5);
        assert!(adj.direction.x > 0.0);
    }

    #[test]
    fn test_zero_input_is_noop() {
        assert!(adjust(Vec3::ZERO, Vec3::ZERO, Vec3::Y, INNER).is_none());
        let best = ScoredCandidate {
            id: Default::default(),
            aim_point: Vec3::Y * 10.0,
            score: 1.0,
        };
        let settings = ConeSettings::new(0.0, 100.0, 0.2, 0.1);
        assert_eq!(
            adjust_direction(Vec3::ZERO, Vec3::ZERO, Some(&best), &settings),
            Vec3::ZERO
        );
    }

    #[test]
    fn test_no_target_returns_input_bits() {
        let input = Vec3::new(0.1, 0.7, -0.3);
        let settings = ConeSettings::new(0.0, 100.0, 0.2, 0.1);
        let out = adjust_direction(Vec3::ZERO, input, None, &settings);
        assert_eq!(out.to_array().map(f32::to_bits), input.to_array().map(f32::to_bits));
    }

    #[test]
    fn test_zero_inner_leaves_direction() {
        let adj = adjust(Vec3::ZERO, Vec3::Y, Vec3::new(5.0, 100.0, 0.0), 0.0).unwrap();
        assert!(adj.deviation <= ANGLE_TOLERANCE);
    }

    #[test]
    fn test_wide_inner_cone_stays_bounded() {
        let inner = deg(100.0);
        let desired = Vec3::new(deg(150.0).sin(), deg(150.0).cos(), 0.0);
        let (dir, snapped) = bend_toward(Vec3::Y, desired, inner);
        assert!(!snapped);
        assert!(angle_between_unit(Vec3::Y, dir) <= inner + ANGLE_TOLERANCE);
        assert!(dir.dot(desired) > Vec3::Y.dot(desired));
    }

    #[test]
    fn test_antiparallel_target_is_finite_and_bounded() {
        let (dir, _) = bend_toward(Vec3::Y, -Vec3::Y, deg(10.0));
        assert!(dir.is_finite());
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(angle_between_unit(Vec3::Y, dir) <= deg(10.0) + ANGLE_TOLERANCE);
    }

    #[test]
    fn test_rotate_toward_exact_angle() {
        let out = rotate_toward(Vec3::Y, Vec3::X, deg(30.0));
        assert!((angle_between_unit(Vec3::Y, out) - deg(30.0)).abs() < 1e-5);
        assert!(out.x > 0.0);

        let flipped = rotate_toward(Vec3::Y, -Vec3::Y, deg(30.0));
        assert!((angle_between_unit(Vec3::Y, flipped) - deg(30.0)).abs() < 1e-5);
    }
}
