//! Timestep and solver configuration.

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::float::Float;

/// A validated simulation timestep together with its reciprocal.
///
/// The update rate is computed once here so a solver can share it across
/// every constraint it prepares in a step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeStep<F: Float> {
    dt: F,
    update_rate: F,
}

impl<F: Float> TimeStep<F> {
    /// `dt` must be positive and finite.
    pub fn new(dt: F) -> Result<Self, PhysicsError> {
        if !dt.is_positive_finite() {
            return Err(PhysicsError::InvalidTimestep);
        }
        Ok(TimeStep { dt, update_rate: F::one() / dt })
    }

    /// Build from a rate in Hz, e.g. `60.0`.
    pub fn from_update_rate(update_rate: F) -> Result<Self, PhysicsError> {
        if !update_rate.is_positive_finite() {
            return Err(PhysicsError::InvalidTimestep);
        }
        Ok(TimeStep { dt: F::one() / update_rate, update_rate })
    }

    pub fn dt(&self) -> F { self.dt }
    pub fn update_rate(&self) -> F { self.update_rate }
}

/// Configuration for the step the solver regularizes against.
///
/// # Builder Pattern
/// ```
/// use spring_softness::config::SolverConfig;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_timestep(1.0 / 120.0)
///     .with_sub_steps(2);
/// let step = config.sub_step().unwrap();
/// assert!((step.update_rate() - 240.0).abs() < 1e-3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SolverConfig<F: Float> {
    /// Length of a full simulation step in seconds. Default: 1/60.
    pub timestep: F,
    /// Number of sub-steps per step. Constraints are regularized against the
    /// sub-step length. Default: 1.
    pub sub_steps: usize,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            timestep: F::one() / F::from_f32(60.0),
            sub_steps: 1,
        }
    }

    /// Set the full step length.
    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    /// Set the number of sub-steps.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// The timestep of a single sub-step.
    pub fn sub_step(&self) -> Result<TimeStep<F>, PhysicsError> {
        let sub_steps = F::from_f32(self.sub_steps.max(1) as f32);
        TimeStep::new(self.timestep / sub_steps)
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
