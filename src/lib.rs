//! Constraint softness for rigid-body solvers.
//!
//! `spring_softness` turns user-facing spring parameters (stiffness and
//! damping) into the per-step error reduction factor and softness an
//! iterative constraint solver consumes. Rigid constraints can skip the
//! spring interpretation and set those solver values directly.
//!
//! # Features
//!
//! - **Spring settings**: Clamped setters, so stored state is always valid
//! - **Two representations**: Stiffness/damping constants or advanced error reduction/softness
//! - **Regularization**: Pure O(1) per-constraint computation, no allocation
//! - **Frequency tuning**: Build constants from natural frequency and damping ratio
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use spring_softness::{compute_regularization, SpringSettings};
//!
//! let spring: SpringSettings<f32> = SpringSettings::new();
//! let reg = compute_regularization(1.0 / 60.0, 60.0, &spring).unwrap();
//! assert!(reg.error_reduction > 0.0 && reg.softness > 0.0);
//! ```

#![no_std]

pub mod float;
pub mod spring;
pub mod regularization;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use spring::{SpringSettings, AdvancedSettings, SpringMode, ActiveSpring};
pub use regularization::{Regularization, compute_regularization, compute_for_step};
pub use config::{SolverConfig, TimeStep};
pub use error::PhysicsError;
