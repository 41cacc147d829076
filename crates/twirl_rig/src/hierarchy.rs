use twirl_math::{Quat, Vec3};

/// Read/write access to the host's joint hierarchy.
///
/// The solver never owns transform data. Hosts expose their scene graph
/// through this trait and hand the solver opaque [`Joint`](Self::Joint)
/// handles; the solver only ever reads poses and writes local rotations
/// through it. Methods are called several times per frame per twist bone and
/// are expected to be cheap accessors.
///
/// The single mutating method takes `&mut self`, so a host that hands the
/// solver exclusive access for the duration of an update gets the
/// single-writer-per-frame rule enforced by the borrow checker.
///
/// Implementations may panic when handed a handle that does not belong to
/// them; the solver passes through the handles from its configuration
/// unchanged.
pub trait JointHierarchy {
    /// Opaque joint handle.
    type Joint: Copy + PartialEq;

    /// Current local rotation of `joint` relative to its parent.
    fn local_rotation(&self, joint: Self::Joint) -> Quat;

    /// Writes the local rotation of `joint`.
    fn set_local_rotation(&mut self, joint: Self::Joint, rotation: Quat);

    /// Local translation of `joint` relative to its parent.
    fn local_translation(&self, joint: Self::Joint) -> Vec3;

    /// World-space rotation of `joint`.
    fn world_rotation(&self, joint: Self::Joint) -> Quat;

    /// World-space translation of `joint`.
    fn world_translation(&self, joint: Self::Joint) -> Vec3;

    /// Parent of `joint`, or `None` for a root.
    fn parent(&self, joint: Self::Joint) -> Option<Self::Joint>;
}
