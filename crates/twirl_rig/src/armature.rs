//! A minimal joint tree for running the solver without a host engine.
//!
//! Real applications implement [`JointHierarchy`] on their own scene graph
//! and never touch this module. It exists so the crate stays testable and
//! runnable on its own, and it doubles as the reference semantics for trait
//! implementors: local poses are stored per joint, world poses are composed
//! parent-first on demand.

use twirl_math::{Quat, Vec3};

use crate::JointHierarchy;

/// Handle to a joint inside an [`Armature`].
///
/// Handles are plain indices and only meaningful for the armature that issued
/// them; using one against another armature reads the wrong joint or panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JointId(usize);

#[derive(Debug, Clone)]
struct Joint {
    parent: Option<JointId>,
    translation: Vec3,
    rotation: Quat,
}

/// A tree of joints with local poses, growable but never shrinking.
///
/// Deliberately not a scene graph: no scale, no caching, no change tracking.
/// World poses are recomputed by walking to the root on every query, which is
/// fine for the rigs and tests this is meant for.
#[derive(Debug, Clone, Default)]
pub struct Armature {
    joints: Vec<Joint>,
}

impl Armature {
    /// Adds a joint without a parent and returns its handle.
    pub fn add_root(&mut self, translation: Vec3, rotation: Quat) -> JointId {
        self.push(None, translation, rotation)
    }

    /// Adds a child of `parent` and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a joint of this armature.
    pub fn add_child(&mut self, parent: JointId, translation: Vec3, rotation: Quat) -> JointId {
        assert!(
            parent.0 < self.joints.len(),
            "parent joint does not belong to this armature"
        );
        self.push(Some(parent), translation, rotation)
    }

    /// Number of joints in the armature.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Whether the armature contains no joints.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    fn push(&mut self, parent: Option<JointId>, translation: Vec3, rotation: Quat) -> JointId {
        let id = JointId(self.joints.len());
        self.joints.push(Joint {
            parent,
            translation,
            rotation,
        });
        id
    }
}

impl JointHierarchy for Armature {
    type Joint = JointId;

    fn local_rotation(&self, joint: JointId) -> Quat {
        self.joints[joint.0].rotation
    }

    fn set_local_rotation(&mut self, joint: JointId, rotation: Quat) {
        self.joints[joint.0].rotation = rotation;
    }

    fn local_translation(&self, joint: JointId) -> Vec3 {
        self.joints[joint.0].translation
    }

    fn world_rotation(&self, joint: JointId) -> Quat {
        match self.joints[joint.0].parent {
            Some(parent) => self.world_rotation(parent) * self.joints[joint.0].rotation,
            None => self.joints[joint.0].rotation,
        }
    }

    fn world_translation(&self, joint: JointId) -> Vec3 {
        match self.joints[joint.0].parent {
            Some(parent) => {
                self.world_translation(parent)
                    + self.world_rotation(parent) * self.joints[joint.0].translation
            }
            None => self.joints[joint.0].translation,
        }
    }

    fn parent(&self, joint: JointId) -> Option<JointId> {
        self.joints[joint.0].parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn roots_have_no_parent() {
        let mut armature = Armature::default();
        let root = armature.add_root(Vec3::ZERO, Quat::IDENTITY);
        let child = armature.add_child(root, Vec3::X, Quat::IDENTITY);

        assert_eq!(armature.parent(root), None);
        assert_eq!(armature.parent(child), Some(root));
        assert_eq!(armature.len(), 2);
        assert!(!armature.is_empty());
    }

    #[test]
    fn world_pose_composes_parent_first() {
        let mut armature = Armature::default();
        let root = armature.add_root(Vec3::X, Quat::from_rotation_z(FRAC_PI_2));
        let child = armature.add_child(root, Vec3::Y, Quat::from_rotation_z(FRAC_PI_2));

        // The root turns its child's +Y offset onto -X.
        assert!(armature
            .world_translation(child)
            .abs_diff_eq(Vec3::ZERO, 1.0e-6));
        assert!(armature
            .world_rotation(child)
            .abs_diff_eq(Quat::from_rotation_z(FRAC_PI_2 * 2.0), 1.0e-6));
    }

    #[test]
    fn local_rotation_writes_are_visible() {
        let mut armature = Armature::default();
        let root = armature.add_root(Vec3::ZERO, Quat::IDENTITY);
        let spin = Quat::from_rotation_y(0.25);
        armature.set_local_rotation(root, spin);
        assert_eq!(armature.local_rotation(root), spin);
    }
}
