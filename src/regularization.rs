//! Per-step regularization: spring settings to error reduction and softness.
//!
//! Called by a constraint's prestep once per simulation step. Pure and O(1);
//! the caller supplies both `dt` and its reciprocal so the division happens
//! once per step rather than once per constraint.

use log::warn;

use crate::config::TimeStep;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::spring::{ActiveSpring, SpringSettings};

/// Values a constraint solver consumes for one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Regularization<F: Float> {
    /// Error reduction factor to use this step, already scaled by the update rate.
    pub error_reduction: F,
    /// Adjusted softness of the constraint for this step.
    pub softness: F,
}

impl<F: Float> Regularization<F> {
    /// `(error_reduction, softness)`
    pub fn into_tuple(self) -> (F, F) {
        (self.error_reduction, self.softness)
    }
}

/// Compute the error reduction and softness of a constraint for one step.
///
/// With advanced settings both values are the configured ones scaled by
/// `update_rate`. With constants:
///
/// ```text
/// multiplier      = 1 / (dt * stiffness + damping)
/// error_reduction = stiffness * multiplier
/// softness        = update_rate * multiplier
/// ```
///
/// The result is not clamped; `error_reduction` can exceed 1 for stiff
/// springs at large timesteps.
///
/// # Errors
/// [`PhysicsError::ZeroStiffnessAndDamping`] if the constants path is active
/// and both constants are zero.
pub fn compute_regularization<F: Float>(
    dt: F,
    update_rate: F,
    settings: &SpringSettings<F>,
) -> Result<Regularization<F>, PhysicsError> {
    match settings.active() {
        ActiveSpring::Advanced { error_reduction, softness } => Ok(Regularization {
            error_reduction: error_reduction * update_rate,
            softness: softness * update_rate,
        }),
        ActiveSpring::Constants { stiffness, damping } => {
            if stiffness == F::zero() && damping == F::zero() {
                warn!("spring regularization requested with zero stiffness and zero damping");
                return Err(PhysicsError::ZeroStiffnessAndDamping);
            }
            let multiplier = F::one() / (dt * stiffness + damping);
            Ok(Regularization {
                error_reduction: stiffness * multiplier,
                softness: update_rate * multiplier,
            })
        }
    }
}

/// [`compute_regularization`] against a validated [`TimeStep`].
pub fn compute_for_step<F: Float>(
    step: &TimeStep<F>,
    settings: &SpringSettings<F>,
) -> Result<Regularization<F>, PhysicsError> {
    compute_regularization(step.dt(), step.update_rate(), settings)
}

impl<F: Float> SpringSettings<F> {
    /// Method form of [`compute_regularization`].
    pub fn compute_error_reduction_and_softness(
        &self,
        dt: F,
        update_rate: F,
    ) -> Result<Regularization<F>, PhysicsError> {
        compute_regularization(dt, update_rate, self)
    }
}
