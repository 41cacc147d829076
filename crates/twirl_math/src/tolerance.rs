use glam::{Quat, Vec3};

/// Shared tolerance for "effectively zero" tests on vectors and quaternions.
///
/// Calibration and per-frame extraction use this single threshold for every
/// degeneracy check, so a pose that calibrates cleanly also evaluates cleanly.
pub const EPSILON: f32 = 1.0e-9;

/// Normalizes `v`, refusing near-zero input.
///
/// Returns `None` when the squared length of `v` is at most [`EPSILON`],
/// `Some` with the unit vector otherwise. Unlike [`Vec3::try_normalize`],
/// which has its own internal threshold, this helper applies the solver-wide
/// tolerance.
#[inline]
pub fn safe_normalize(v: Vec3) -> Option<Vec3> {
    let length_sq = v.length_squared();
    if length_sq > EPSILON {
        Some(v * length_sq.sqrt().recip())
    } else {
        None
    }
}

/// Whether `q` is the identity rotation to within [`EPSILON`] on every
/// component.
///
/// Note the double cover: the negated identity (`w ≈ -1`) encodes the same
/// rotation but is deliberately not fuzzy-identity, matching the snapshot
/// semantics of rest poses that were authored as exact identity.
#[inline]
pub fn is_fuzzy_identity(q: Quat) -> bool {
    q.abs_diff_eq(Quat::IDENTITY, EPSILON)
}
