#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

//! Twist-bone calibration and per-frame twist redistribution for skeletal
//! rigs.
//!
//! A twist bone setup watches one joint (the driven joint, say an elbow) and
//! mirrors a fraction of its twist about a calibrated axis onto any number of
//! corrective bones. [`TwistBone::calibrate`] derives the twist axis and rest
//! rotations once from the bind pose; [`TwistBone::update`] runs once per
//! frame after animation and writes the redistributed twist through the
//! host's [`JointHierarchy`] implementation.
//!
//! The host scene graph stays on the host's side of that trait. For tests,
//! benchmarks and headless tools the crate bundles [`armature::Armature`], a
//! minimal tree-of-joints store.
//!
//! # Example
//!
//! ```
//! use twirl_math::{Quat, Vec3};
//! use twirl_rig::armature::Armature;
//! use twirl_rig::{JointHierarchy, TwistBone, TwistBoneConfig, TwistTarget};
//!
//! let mut armature = Armature::default();
//! let arm = armature.add_root(Vec3::ZERO, Quat::IDENTITY);
//! let elbow = armature.add_child(arm, Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
//! let forearm_twist = armature.add_child(arm, Vec3::new(0.0, 0.5, 0.0), Quat::IDENTITY);
//!
//! let config = TwistBoneConfig::new(arm, elbow)
//!     .with_target(TwistTarget::new(forearm_twist, 0.5));
//! let bone = TwistBone::calibrate(config, &armature)?;
//!
//! // Animation writes the elbow, then the solver spreads half of the twist
//! // onto the corrective bone.
//! armature.set_local_rotation(elbow, Quat::from_rotation_y(1.0));
//! bone.update(&mut armature);
//!
//! let applied = armature.local_rotation(forearm_twist);
//! assert!(applied.abs_diff_eq(Quat::from_rotation_y(0.5), 1.0e-6));
//! # Ok::<(), twirl_rig::CalibrationError>(())
//! ```

pub mod armature;

mod config;
mod error;
mod hierarchy;
mod solver;

pub use config::{TwistBoneConfig, TwistTarget};
pub use error::CalibrationError;
pub use hierarchy::JointHierarchy;
pub use solver::{TwistBone, TwistOutcome};

/// The `twirl_rig` prelude.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        armature::{Armature, JointId},
        CalibrationError, JointHierarchy, TwistBone, TwistBoneConfig, TwistOutcome, TwistTarget,
    };
}
