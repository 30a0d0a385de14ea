//! Error types for spring regularization.

use thiserror::Error;

/// Errors that can occur while configuring springs or computing their
/// per-step regularization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// Stiffness and damping are both zero on the constants path, so
    /// `dt * stiffness + damping` has no inverse.
    #[error("constraints cannot have both zero stiffness and zero damping")]
    ZeroStiffnessAndDamping,
    /// Timestep (or update rate) must be positive and finite.
    #[error("timestep must be positive and finite")]
    InvalidTimestep,
    /// Frequency must be positive and finite.
    #[error("frequency must be positive and finite")]
    InvalidFrequency,
    /// Damping ratio must be non-negative and finite.
    #[error("damping ratio must be non-negative and finite")]
    InvalidDampingRatio,
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Operation needs a non-zero stiffness.
    #[error("stiffness must be positive")]
    InvalidStiffness,
}
