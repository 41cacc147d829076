use glam::{Quat, Vec3};

use crate::{is_fuzzy_identity, safe_normalize, EPSILON};

/// Result of isolating the twist component of a rotation delta.
///
/// Produced by [`extract_twist`]. Only the `Twist` case carries a rotation;
/// the other two tell the caller which fallback applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TwistExtraction {
    /// The delta carries meaningful twist about the reference axis. The
    /// contained rotation is about the twist axis (either sign of it).
    Twist(Quat),
    /// No meaningful twist could be measured. This is ordinary geometry, not
    /// a failure: identity deltas, zero-angle decompositions and coinciding
    /// or opposed bracketing vectors all land here. Callers snap back to
    /// their rest pose.
    Negligible,
    /// The swing projection collapsed even though the pure-twist fast path
    /// did not fire. Callers should report a diagnostic and leave their
    /// targets untouched for this evaluation.
    Indeterminate,
}

/// Isolates the twist component of `delta` about `twist_axis`.
///
/// `delta` must be a unit quaternion and `twist_axis` a unit vector; both are
/// expected to live in the same (rest-corrected) local frame.
///
/// The split works on a pair of bracketing vectors rather than a closed-form
/// swing-twist formula. The rotation axis of `delta` is projected onto the
/// plane perpendicular to `twist_axis`, giving `rotate_axis_from`; rotating
/// that vector by `delta` and projecting again gives `rotate_axis_to`. Both
/// lie in the perpendicular plane, so the rotation carrying one onto the
/// other is about the twist axis itself and is returned as the extracted
/// twist.
///
/// Two shortcuts skip the construction entirely: a fuzzy-identity or
/// zero-angle `delta` has nothing to extract ([`TwistExtraction::Negligible`]),
/// and a `delta` whose rotation axis is already parallel or anti-parallel to
/// `twist_axis` is pure twist and is returned as-is.
pub fn extract_twist(delta: Quat, twist_axis: Vec3) -> TwistExtraction {
    if is_fuzzy_identity(delta) {
        return TwistExtraction::Negligible;
    }

    let (axis, angle) = delta.to_axis_angle();

    let d = axis.dot(twist_axis);
    if d >= 1.0 - EPSILON || d <= -1.0 + EPSILON {
        // The rotation axis is already aligned with the twist axis, so the
        // delta has no swing component to project out.
        return TwistExtraction::Twist(delta);
    }

    if angle.abs() <= EPSILON {
        return TwistExtraction::Negligible;
    }

    // Projection of the rotation axis onto the plane perpendicular to the
    // twist axis. Near-parallel axes are already handled above, so a failure
    // here is a rounding artifact at the fast-path boundary.
    let Some(rotate_axis_from) = safe_normalize(twist_axis.cross(axis).cross(twist_axis)) else {
        return TwistExtraction::Negligible;
    };

    let rotated = delta * rotate_axis_from;
    let Some(rotate_axis_to) = safe_normalize(rotated - twist_axis * twist_axis.dot(rotated))
    else {
        // The rotated bracket vector fell onto the twist axis itself, which
        // the fast path should have ruled out (it happens for exact 180
        // degree swings). Signal rather than guess.
        return TwistExtraction::Indeterminate;
    };

    // Rounding can put the dot of two unit vectors just outside [-1, 1],
    // which would turn the acos below into NaN.
    let d = rotate_axis_from.dot(rotate_axis_to).clamp(-1.0, 1.0);
    if d >= 1.0 - EPSILON {
        // The bracketing vectors coincide: whatever the delta does, it does
        // not turn the perpendicular plane.
        return TwistExtraction::Negligible;
    }

    match safe_normalize(rotate_axis_from.cross(rotate_axis_to)) {
        // Both brackets are unit vectors perpendicular to the twist axis, so
        // the cross product points along the twist axis itself.
        Some(axis) => TwistExtraction::Twist(Quat::from_axis_angle(axis, d.acos())),
        None => TwistExtraction::Negligible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn identity_delta_is_negligible() {
        assert_eq!(extract_twist(Quat::IDENTITY, Vec3::Y), TwistExtraction::Negligible);
        let wobble = Quat::from_xyzw(1.0e-10, 0.0, -1.0e-10, 1.0);
        assert_eq!(extract_twist(wobble, Vec3::Y), TwistExtraction::Negligible);
    }

    #[test]
    fn pure_twist_returns_delta_unchanged() {
        let delta = Quat::from_rotation_y(FRAC_PI_2);
        assert_eq!(extract_twist(delta, Vec3::Y), TwistExtraction::Twist(delta));

        // Anti-parallel rotation axis is still pure twist.
        let delta = Quat::from_axis_angle(-Vec3::Y, 0.8);
        assert_eq!(extract_twist(delta, Vec3::Y), TwistExtraction::Twist(delta));
    }

    #[test]
    fn tiny_pure_twist_still_extracts() {
        // Far below any visible rotation but above the identity tolerance.
        let delta = Quat::from_rotation_y(1.0e-6);
        assert_eq!(extract_twist(delta, Vec3::Y), TwistExtraction::Twist(delta));
    }

    #[test]
    fn swing_that_fixes_the_bracket_is_negligible() {
        // A rotation about X leaves the projected bracket vector (which is X
        // itself here) in place, so the bracketing pair coincides.
        let delta = Quat::from_rotation_x(1.2);
        assert_eq!(extract_twist(delta, Vec3::Y), TwistExtraction::Negligible);
    }

    #[test]
    fn mixed_rotation_extracts_projected_twist() {
        // 90 degrees about X composed with 90 degrees about Y is the 120
        // degree rotation about (1,1,1) that cycles the basis axes. Its
        // bracketing pair around Y is ((1,0,1)/sqrt2, X), 45 degrees apart.
        let delta = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_y(FRAC_PI_2);
        let TwistExtraction::Twist(twist) = extract_twist(delta, Vec3::Y) else {
            panic!("expected a twist");
        };
        assert!(twist.abs_diff_eq(Quat::from_rotation_y(FRAC_PI_4), 1.0e-6));
    }

    #[test]
    fn extraction_ignores_twist_axis_sign() {
        let delta = Quat::from_rotation_x(FRAC_PI_2) * Quat::from_rotation_y(FRAC_PI_2);
        assert_eq!(extract_twist(delta, Vec3::Y), extract_twist(delta, -Vec3::Y));
    }

    #[test]
    fn half_turn_swing_onto_the_axis_is_indeterminate() {
        // A 180 degree rotation about the bisector of X and Y maps the
        // bracket vector X exactly onto Y, so the projection collapses.
        let axis = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert_eq!(
            extract_twist(Quat::from_axis_angle(axis, PI), Vec3::Y),
            TwistExtraction::Indeterminate
        );
    }

    #[test]
    fn half_turn_swing_reversing_the_bracket_is_negligible() {
        // A 180 degree rotation about an axis tilted 30 degrees from Y sends
        // the bracket vector to its own negation: opposed brackets have no
        // well-defined turn direction.
        let axis = Vec3::new(0.5, 3.0_f32.sqrt() / 2.0, 0.0);
        assert_eq!(
            extract_twist(Quat::from_axis_angle(axis, PI), Vec3::Y),
            TwistExtraction::Negligible
        );
    }

    #[test]
    fn near_half_turn_swings_stay_finite() {
        // Swings this close to a half turn drive the bracket dot toward -1,
        // the edge of acos's domain.
        let axis = Vec3::new(0.5, 3.0_f32.sqrt() / 2.0, 0.0);
        for i in 1..=64 {
            let angle = PI - 1.0e-4 * i as f32;
            let delta = Quat::from_axis_angle(axis, angle);
            let TwistExtraction::Twist(twist) = extract_twist(delta, Vec3::Y) else {
                panic!("expected a twist at angle {angle}");
            };
            assert!(twist.is_finite(), "non-finite twist at angle {angle}");
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let delta = Quat::from_rotation_x(0.3) * Quat::from_rotation_y(1.1);
        let first = extract_twist(delta, Vec3::Y);
        for _ in 0..8 {
            assert_eq!(extract_twist(delta, Vec3::Y), first);
        }
    }
}
