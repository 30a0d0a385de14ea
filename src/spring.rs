//! Spring settings: the user-facing description of how soft a constraint is.
//!
//! A constraint's spring is described either by physical constants
//! (stiffness and damping) or, for rigid constraints, directly by the
//! solver-level error reduction factor and softness. Both representations are
//! stored so toggling between them is lossless, but only the one selected by
//! [`SpringMode`] is ever read by the regularization math.

use log::debug;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::float::Float;

/// Stiffness used by freshly constructed springs.
pub const DEFAULT_STIFFNESS: f32 = 600_000.0;
/// Damping used by freshly constructed springs.
pub const DEFAULT_DAMPING: f32 = 90_000.0;
/// Error reduction factor used by freshly constructed advanced settings.
pub const DEFAULT_ERROR_REDUCTION: f32 = 0.1;
/// Softness used by freshly constructed advanced settings.
pub const DEFAULT_SOFTNESS: f32 = 0.00001;

/// Which representation of the spring is live.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SpringMode {
    /// Stiffness and damping constants drive the regularization.
    #[default]
    Constants,
    /// Error reduction factor and softness are used directly.
    Advanced,
}

/// The live representation of a spring, as read by the solver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActiveSpring<F: Float> {
    Constants { stiffness: F, damping: F },
    Advanced { error_reduction: F, softness: F },
}

/// The solver's direct view of the spring behavior.
///
/// May be a more intuitive representation than stiffness and damping for
/// constraints that should be rigid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdvancedSettings<F: Float> {
    error_reduction: F,
    softness: F,
}

impl<F: Float> AdvancedSettings<F> {
    pub fn new(error_reduction: F, softness: F) -> Self {
        let mut settings = AdvancedSettings {
            error_reduction: F::zero(),
            softness: F::zero(),
        };
        settings.set_error_reduction(error_reduction);
        settings.set_softness(softness);
        settings
    }

    /// Fraction of positional error corrected per step, in [0, 1].
    pub fn error_reduction(&self) -> F { self.error_reduction }

    /// Higher values allow the constraint to be violated more. Never negative.
    pub fn softness(&self) -> F { self.softness }

    pub fn set_error_reduction(&mut self, value: F) {
        let clamped = value.clamp(F::zero(), F::one());
        if clamped != value {
            debug!("error reduction {:?} clamped to {:?}", value, clamped);
        }
        self.error_reduction = clamped;
    }

    pub fn set_softness(&mut self, value: F) {
        self.softness = clamp_non_negative("softness", value);
    }
}

impl<F: Float> Default for AdvancedSettings<F> {
    fn default() -> Self {
        AdvancedSettings {
            error_reduction: F::from_f32(DEFAULT_ERROR_REDUCTION),
            softness: F::from_f32(DEFAULT_SOFTNESS),
        }
    }
}

/// Specifies the way in which a constraint's spring component behaves.
///
/// # Builder Pattern
/// ```
/// use spring_softness::{SpringMode, SpringSettings};
///
/// let spring: SpringSettings<f32> = SpringSettings::new()
///     .with_stiffness(1000.0)
///     .with_damping(50.0)
///     .with_error_reduction(2.0) // clamped to 1.0
///     .with_mode(SpringMode::Constants);
/// assert_eq!(spring.advanced().error_reduction(), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(
        from = "SpringSettingsRepr<F>",
        into = "SpringSettingsRepr<F>",
        bound(
            serialize = "F: Float + Serialize",
            deserialize = "F: Float + Deserialize<'de>"
        )
    )
)]
pub struct SpringSettings<F: Float> {
    stiffness: F,
    damping: F,
    advanced: AdvancedSettings<F>,
    mode: SpringMode,
}

impl<F: Float> SpringSettings<F> {
    /// Create spring settings with default (stiff) constants.
    pub fn new() -> Self {
        SpringSettings {
            stiffness: F::from_f32(DEFAULT_STIFFNESS),
            damping: F::from_f32(DEFAULT_DAMPING),
            advanced: AdvancedSettings::default(),
            mode: SpringMode::Constants,
        }
    }

    /// Alias for [`SpringSettings::new`]; the defaults describe a nearly rigid spring.
    pub fn rigid() -> Self {
        Self::new()
    }

    /// Settings that use the advanced representation from the start.
    pub fn advanced_rigid(error_reduction: F, softness: F) -> Self {
        SpringSettings {
            advanced: AdvancedSettings::new(error_reduction, softness),
            mode: SpringMode::Advanced,
            ..Self::new()
        }
    }

    /// Build constants that oscillate at `frequency_hz` with the given damping
    /// ratio when driving a body of `effective_mass`.
    ///
    /// `stiffness = m * w^2` and `damping = 2 * m * ratio * w` with `w = 2 * pi * f`.
    pub fn from_frequency(frequency_hz: F, damping_ratio: F, effective_mass: F) -> Result<Self, PhysicsError> {
        if !frequency_hz.is_positive_finite() {
            return Err(PhysicsError::InvalidFrequency);
        }
        if !damping_ratio.is_finite() || damping_ratio < F::zero() {
            return Err(PhysicsError::InvalidDampingRatio);
        }
        if !effective_mass.is_positive_finite() {
            return Err(PhysicsError::InvalidMass);
        }

        let w = F::two() * F::pi() * frequency_hz;
        Ok(Self::new()
            .with_stiffness(effective_mass * w * w)
            .with_damping(F::two() * effective_mass * damping_ratio * w))
    }

    /// Natural frequency in Hz of these constants on a body of `effective_mass`.
    pub fn natural_frequency(&self, effective_mass: F) -> Result<F, PhysicsError> {
        if !effective_mass.is_positive_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        Ok((self.stiffness / effective_mass).sqrt() / (F::two() * F::pi()))
    }

    /// Damping ratio of these constants on a body of `effective_mass`.
    /// 1.0 is critical damping.
    pub fn damping_ratio(&self, effective_mass: F) -> Result<F, PhysicsError> {
        if !effective_mass.is_positive_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        if self.stiffness == F::zero() {
            return Err(PhysicsError::InvalidStiffness);
        }
        Ok(self.damping / (F::two() * (self.stiffness * effective_mass).sqrt()))
    }

    /// Higher values make the spring stiffer.
    pub fn stiffness(&self) -> F { self.stiffness }

    /// Higher values reduce oscillation more.
    pub fn damping(&self) -> F { self.damping }

    pub fn mode(&self) -> SpringMode { self.mode }

    pub fn uses_advanced(&self) -> bool { self.mode == SpringMode::Advanced }

    pub fn advanced(&self) -> &AdvancedSettings<F> { &self.advanced }

    pub fn advanced_mut(&mut self) -> &mut AdvancedSettings<F> { &mut self.advanced }

    /// The representation the solver should read this step.
    pub fn active(&self) -> ActiveSpring<F> {
        match self.mode {
            SpringMode::Constants => ActiveSpring::Constants {
                stiffness: self.stiffness,
                damping: self.damping,
            },
            SpringMode::Advanced => ActiveSpring::Advanced {
                error_reduction: self.advanced.error_reduction,
                softness: self.advanced.softness,
            },
        }
    }

    pub fn set_stiffness(&mut self, value: F) {
        self.stiffness = clamp_non_negative("stiffness", value);
    }

    pub fn set_damping(&mut self, value: F) {
        self.damping = clamp_non_negative("damping", value);
    }

    pub fn set_advanced_error_reduction(&mut self, value: F) {
        self.advanced.set_error_reduction(value);
    }

    pub fn set_advanced_softness(&mut self, value: F) {
        self.advanced.set_softness(value);
    }

    /// When true, the advanced error reduction and softness replace the
    /// stiffness and damping constants.
    pub fn set_use_advanced(&mut self, use_advanced: bool) {
        self.mode = if use_advanced { SpringMode::Advanced } else { SpringMode::Constants };
    }

    pub fn set_mode(&mut self, mode: SpringMode) {
        self.mode = mode;
    }

    pub fn with_stiffness(mut self, value: F) -> Self {
        self.set_stiffness(value);
        self
    }

    pub fn with_damping(mut self, value: F) -> Self {
        self.set_damping(value);
        self
    }

    pub fn with_error_reduction(mut self, value: F) -> Self {
        self.set_advanced_error_reduction(value);
        self
    }

    pub fn with_softness(mut self, value: F) -> Self {
        self.set_advanced_softness(value);
        self
    }

    pub fn with_mode(mut self, mode: SpringMode) -> Self {
        self.mode = mode;
        self
    }
}

impl<F: Float> Default for SpringSettings<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_non_negative<F: Float>(name: &str, value: F) -> F {
    let clamped = value.max(F::zero());
    if clamped != value {
        debug!("{} {:?} clamped to {:?}", name, value, clamped);
    }
    clamped
}

/// Flat on-disk form; loading goes back through the clamping setters.
#[cfg(feature = "serde-serialize")]
#[derive(Serialize, Deserialize)]
struct SpringSettingsRepr<F> {
    stiffness: F,
    damping: F,
    error_reduction: F,
    softness: F,
    use_advanced: bool,
}

#[cfg(feature = "serde-serialize")]
impl<F: Float> From<SpringSettingsRepr<F>> for SpringSettings<F> {
    fn from(repr: SpringSettingsRepr<F>) -> Self {
        let mut settings = SpringSettings::new()
            .with_stiffness(repr.stiffness)
            .with_damping(repr.damping)
            .with_error_reduction(repr.error_reduction)
            .with_softness(repr.softness);
        settings.set_use_advanced(repr.use_advanced);
        settings
    }
}

#[cfg(feature = "serde-serialize")]
impl<F: Float> From<SpringSettings<F>> for SpringSettingsRepr<F> {
    fn from(settings: SpringSettings<F>) -> Self {
        SpringSettingsRepr {
            stiffness: settings.stiffness,
            damping: settings.damping,
            error_reduction: settings.advanced.error_reduction,
            softness: settings.advanced.softness,
            use_advanced: settings.uses_advanced(),
        }
    }
}
