#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

//! Rotation math for the `twirl` twist-bone solver.
//!
//! The interesting piece is [`extract_twist`], which splits a rotation delta
//! into its twist component about a fixed reference axis and its remaining
//! swing, using a pair of bracketing vectors rather than a closed-form
//! swing-twist formula. The rest of the crate is the tolerance layer that
//! keeps that decomposition from producing NaNs on degenerate input:
//! [`safe_normalize`], [`is_fuzzy_identity`] and the shared [`EPSILON`].
//!
//! Vector and quaternion types come from [`glam`] and are re-exported in
//! full.

mod tolerance;
mod twist;

pub use tolerance::{is_fuzzy_identity, safe_normalize, EPSILON};
pub use twist::{extract_twist, TwistExtraction};

/// The `twirl_math` prelude.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        extract_twist, is_fuzzy_identity, safe_normalize, EPSILON, Quat, TwistExtraction, Vec3,
    };
}

pub use glam::*;
