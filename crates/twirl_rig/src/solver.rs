use log::error;
use twirl_math::{extract_twist, is_fuzzy_identity, safe_normalize, Quat, TwistExtraction, Vec3};

use crate::{CalibrationError, JointHierarchy, TwistBoneConfig};

#[cfg(feature = "trace")]
use tracing::info_span;

/// Outcome of a single [`TwistBone::update`] call.
///
/// The hierarchy writes are the contract; the outcome is informational and
/// mainly useful for tests and debug overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TwistOutcome {
    /// The extracted twist was redistributed onto the targets.
    Interlocked(Quat),
    /// No meaningful twist this frame; every target snapped back to its rest
    /// rotation.
    Rest,
    /// The defensive degenerate-projection branch fired: a diagnostic was
    /// logged and no target was written, leaving each at its previous value.
    Skipped,
}

/// A target with its rest pose captured at calibration time.
#[derive(Debug, Clone)]
struct CalibratedTarget<J> {
    joint: J,
    rate: f32,
    rest_local_rotation: Quat,
    rest_is_identity: bool,
}

/// Derived state shared by [`TwistBone::calibrate`] and
/// [`TwistBone::recalibrate`].
#[derive(Debug, Clone)]
struct Calibration<J> {
    twist_axis: Vec3,
    rest_local_rotation: Quat,
    rest_is_identity: bool,
    targets: Vec<CalibratedTarget<J>>,
}

impl<J: Copy + PartialEq> Calibration<J> {
    fn derive<H>(config: &TwistBoneConfig<J>, hierarchy: &H) -> Result<Self, CalibrationError>
    where
        H: JointHierarchy<Joint = J>,
    {
        #[cfg(feature = "trace")]
        let _span = info_span!("twist_bone_calibrate").entered();

        let raw_axis = if hierarchy.parent(config.driven) == Some(config.driver) {
            // The child's local translation already is the chain direction
            // expressed in the driver's frame.
            hierarchy.local_translation(config.driven)
        } else {
            // Unparented chain: measure the bind direction in world space and
            // bring it into the driver's frame. Assumes a neutral A/T pose.
            let world = hierarchy.world_translation(config.driven)
                - hierarchy.world_translation(config.driver);
            hierarchy.world_rotation(config.driver).inverse() * world
        };

        let rest_local_rotation = hierarchy.local_rotation(config.driven);
        let rest_is_identity = is_fuzzy_identity(rest_local_rotation);

        // Measure twist relative to the rest pose rather than absolute local
        // space. Applies after either derivation branch.
        let corrected = if rest_is_identity {
            raw_axis
        } else {
            rest_local_rotation.inverse() * raw_axis
        };

        let twist_axis =
            safe_normalize(corrected).ok_or(CalibrationError::DegenerateTwistAxis)?;

        let targets = config
            .targets
            .iter()
            .map(|target| {
                let rest = hierarchy.local_rotation(target.joint);
                CalibratedTarget {
                    joint: target.joint,
                    rate: target.rate,
                    rest_local_rotation: rest,
                    rest_is_identity: is_fuzzy_identity(rest),
                }
            })
            .collect();

        Ok(Self {
            twist_axis,
            rest_local_rotation,
            rest_is_identity,
            targets,
        })
    }
}

/// A calibrated twist bone: watches the driven joint and redistributes its
/// twist about the calibrated axis onto the corrective targets.
///
/// Built once from a [`TwistBoneConfig`] and the bind pose via
/// [`TwistBone::calibrate`]; afterwards [`TwistBone::update`] runs every
/// frame, strictly after whatever animates the driven joint and strictly
/// before pose submission. The solver holds no per-frame state, so updates
/// with an unchanged pose are idempotent.
#[derive(Debug, Clone)]
pub struct TwistBone<J> {
    config: TwistBoneConfig<J>,
    twist_axis: Vec3,
    rest_local_rotation: Quat,
    rest_is_identity: bool,
    targets: Vec<CalibratedTarget<J>>,
    reset_interlock: bool,
}

impl<J: Copy + PartialEq> TwistBone<J> {
    /// Derives the calibration from the current pose, treating it as the bind
    /// pose, and returns the ready solver.
    ///
    /// Only reads from the hierarchy. Fails if the twist axis between the
    /// driver and driven joints is degenerate.
    pub fn calibrate<H>(
        config: TwistBoneConfig<J>,
        hierarchy: &H,
    ) -> Result<Self, CalibrationError>
    where
        H: JointHierarchy<Joint = J>,
    {
        let calibration = Calibration::derive(&config, hierarchy)?;
        Ok(Self {
            reset_interlock: config.reset_interlock,
            twist_axis: calibration.twist_axis,
            rest_local_rotation: calibration.rest_local_rotation,
            rest_is_identity: calibration.rest_is_identity,
            targets: calibration.targets,
            config,
        })
    }

    /// Re-derives the calibration from the current pose, replacing all
    /// derived state while keeping the authored configuration.
    ///
    /// The typical trigger is re-enabling a rig after its bind pose changed.
    /// On error the previous calibration stays in place.
    pub fn recalibrate<H>(&mut self, hierarchy: &H) -> Result<(), CalibrationError>
    where
        H: JointHierarchy<Joint = J>,
    {
        let calibration = Calibration::derive(&self.config, hierarchy)?;
        self.twist_axis = calibration.twist_axis;
        self.rest_local_rotation = calibration.rest_local_rotation;
        self.rest_is_identity = calibration.rest_is_identity;
        self.targets = calibration.targets;
        Ok(())
    }

    /// Extracts the driven joint's twist since calibration and writes the
    /// rate-scaled share onto every target.
    ///
    /// Degenerate geometry is ordinary control flow: whenever no meaningful
    /// twist can be measured the targets snap back to their rest rotations.
    /// The one defensive exception is a collapsing swing projection, which
    /// logs a diagnostic and leaves the targets untouched for this call; see
    /// [`TwistOutcome::Skipped`].
    pub fn update<H>(&self, hierarchy: &mut H) -> TwistOutcome
    where
        H: JointHierarchy<Joint = J>,
    {
        #[cfg(feature = "trace")]
        let _span = info_span!("twist_bone_update").entered();

        if self.reset_interlock {
            self.reset(hierarchy);
            return TwistOutcome::Rest;
        }

        let mut delta = hierarchy.local_rotation(self.config.driven);
        if !self.rest_is_identity {
            delta = self.rest_local_rotation.inverse() * delta;
        }

        match extract_twist(delta, self.twist_axis) {
            TwistExtraction::Twist(twist) => {
                self.interlock(hierarchy, twist);
                TwistOutcome::Interlocked(twist)
            }
            TwistExtraction::Negligible => {
                self.reset(hierarchy);
                TwistOutcome::Rest
            }
            TwistExtraction::Indeterminate => {
                error!("twist swing projection produced a degenerate axis, skipping this update");
                TwistOutcome::Skipped
            }
        }
    }

    /// The calibrated twist axis in the driven joint's rest-corrected local
    /// frame. Unit length.
    pub fn twist_axis(&self) -> Vec3 {
        self.twist_axis
    }

    /// The driven joint's local rotation captured at calibration time.
    pub fn rest_local_rotation(&self) -> Quat {
        self.rest_local_rotation
    }

    /// Whether the captured rest rotation is fuzzy-identity, in which case
    /// the per-frame delta is used as-is.
    pub fn rest_is_identity(&self) -> bool {
        self.rest_is_identity
    }

    /// The authored configuration this solver was calibrated from.
    pub fn config(&self) -> &TwistBoneConfig<J> {
        &self.config
    }

    /// Whether every update currently short-circuits to the reset branch.
    pub fn reset_interlock(&self) -> bool {
        self.reset_interlock
    }

    /// Forces every subsequent [`TwistBone::update`] straight to the reset
    /// branch while set. Toggling this live is the quickest way to check that
    /// the captured rest pose looks right.
    pub fn set_reset_interlock(&mut self, reset: bool) {
        self.reset_interlock = reset;
    }

    fn interlock<H>(&self, hierarchy: &mut H, twist: Quat)
    where
        H: JointHierarchy<Joint = J>,
    {
        for target in &self.targets {
            let scaled = Quat::IDENTITY.slerp(twist, target.rate);
            let rotation = if target.rest_is_identity {
                scaled
            } else {
                target.rest_local_rotation * scaled
            };
            hierarchy.set_local_rotation(target.joint, rotation);
        }
    }

    fn reset<H>(&self, hierarchy: &mut H)
    where
        H: JointHierarchy<Joint = J>,
    {
        for target in &self.targets {
            hierarchy.set_local_rotation(target.joint, target.rest_local_rotation);
        }
    }
}
