use thiserror::Error;

/// Errors produced while deriving a twist bone's calibration from the bind
/// pose.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationError {
    /// The twist axis collapsed to (nearly) zero length, which happens when
    /// the driver and driven joints are coincident in the bind pose. The
    /// setup cannot measure twist and refuses to activate.
    #[error("degenerate twist axis: driver and driven joints are coincident in the bind pose")]
    DegenerateTwistAxis,
}
