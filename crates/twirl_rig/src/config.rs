#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A corrective bone receiving a share of the extracted twist.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TwistTarget<J> {
    /// Handle of the corrective joint whose local rotation the solver writes.
    pub joint: J,
    /// Fraction of the extracted twist applied to this target. The intended
    /// range is `[0.0, 1.0]`; values outside it are passed through and
    /// exaggerate or reverse the twist.
    pub rate: f32,
}

impl<J> TwistTarget<J> {
    /// Creates a target receiving `rate` of the extracted twist.
    pub fn new(joint: J, rate: f32) -> Self {
        Self { joint, rate }
    }
}

/// Authored description of a twist bone setup.
///
/// This is the immutable "what to drive" half of a solver: which joints form
/// the chain and how much twist each corrective bone receives. Everything
/// derived from the pose itself (twist axis, rest rotations, identity flags)
/// is computed by [`TwistBone::calibrate`](crate::TwistBone::calibrate) and
/// lives in the resulting [`TwistBone`](crate::TwistBone), never here, so a
/// deserialized configuration is always re-calibrated against a live pose.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TwistBoneConfig<J> {
    /// The driver joint, the driven joint's logical parent in the chain (an
    /// upper arm, say).
    pub driver: J,
    /// The driven joint whose rotation delta is decomposed (an elbow, say).
    pub driven: J,
    /// Corrective bones receiving shares of the twist, written in order.
    pub targets: Vec<TwistTarget<J>>,
    /// Whether the solver starts out forced to the reset branch; see
    /// [`TwistBone::set_reset_interlock`](crate::TwistBone::set_reset_interlock).
    #[cfg_attr(feature = "serialize", serde(default))]
    pub reset_interlock: bool,
}

impl<J> TwistBoneConfig<J> {
    /// Creates a configuration for the given chain, driving no targets yet.
    pub fn new(driver: J, driven: J) -> Self {
        Self {
            driver,
            driven,
            targets: Vec::new(),
            reset_interlock: false,
        }
    }

    /// Adds a corrective target.
    #[must_use]
    pub fn with_target(mut self, target: TwistTarget<J>) -> Self {
        self.targets.push(target);
        self
    }
}
