#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

//! Twist-bone redistribution for skeletal animation rigs.
//!
//! A twist bone setup watches a driven joint (an elbow, a wrist, a knee) and
//! spreads a fraction of its twist about a calibrated axis onto corrective
//! bones, without touching the swing. Calibration happens once against the
//! bind pose; per-frame updates are pure, bounded quaternion math with reset
//! fallbacks for degenerate geometry, so a bone that currently has no twist
//! simply rests.
//!
//! The host scene graph is not part of this crate. Hosts implement
//! [`rig::JointHierarchy`] over their own transform storage; the bundled
//! [`rig::armature::Armature`] is a minimal implementation for tests, tools
//! and the examples.
//!
//! # Example
//!
//! ```
//! use twirl::prelude::*;
//!
//! let mut armature = Armature::default();
//! let arm = armature.add_root(Vec3::ZERO, Quat::IDENTITY);
//! let elbow = armature.add_child(arm, Vec3::new(0.0, 0.3, 0.0), Quat::IDENTITY);
//! let twist_bone = armature.add_child(arm, Vec3::new(0.0, 0.15, 0.0), Quat::IDENTITY);
//!
//! let bone = TwistBone::calibrate(
//!     TwistBoneConfig::new(arm, elbow).with_target(TwistTarget::new(twist_bone, 0.5)),
//!     &armature,
//! )?;
//!
//! // Each frame, after animation has posed the elbow:
//! armature.set_local_rotation(elbow, Quat::from_rotation_y(1.0));
//! bone.update(&mut armature);
//! assert!(armature
//!     .local_rotation(twist_bone)
//!     .abs_diff_eq(Quat::from_rotation_y(0.5), 1.0e-6));
//! # Ok::<(), CalibrationError>(())
//! ```
//!
//! # Cargo features
//!
//! - `serialize` enables `serde` derives on the authored configuration.
//! - `trace` wraps calibration and updates in `tracing` spans.

pub mod math {
    //! Rotation math: twist extraction and the tolerance helpers.
    pub use twirl_math::*;
}

pub mod rig {
    //! Calibration, the per-frame solver and the host hierarchy boundary.
    pub use twirl_rig::*;
}

/// The library's prelude for wildcard imports.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::math::prelude::*;
    #[doc(hidden)]
    pub use crate::rig::prelude::*;
}
