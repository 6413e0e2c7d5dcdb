//! American option specification.

use pricer_core::types::PricingParameters;
use serde::{Deserialize, Serialize};

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;

/// Lattice family used for backward induction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeType {
    /// Cox-Ross-Rubinstein binomial lattice.
    #[default]
    Binomial,
    /// Moment-matched trinomial lattice.
    Trinomial,
}

impl std::fmt::Display for TreeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeType::Binomial => write!(f, "binomial"),
            TreeType::Trinomial => write!(f, "trinomial"),
        }
    }
}

impl std::str::FromStr for TreeType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binomial" | "crr" => Ok(TreeType::Binomial),
            "trinomial" => Ok(TreeType::Trinomial),
            other => Err(InstrumentError::InvalidParameter {
                message: format!("unknown tree type '{}': expected binomial or trinomial", other),
            }),
        }
    }
}

/// American option priced on a recombining lattice.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingParameters;
/// use pricer_models::instruments::{AmericanSpec, TreeType};
///
/// let params = PricingParameters::new(100.0, 100.0, 0.25, 0.05, 0.02, 0.2).unwrap();
/// let spec = AmericanSpec::new(params, 200, TreeType::Binomial).unwrap();
/// assert_eq!(spec.steps, 200);
/// assert!(AmericanSpec::new(params, 1, TreeType::Trinomial).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmericanSpec {
    /// Market and contract parameters.
    pub params: PricingParameters,
    /// Number of lattice time steps.
    pub steps: usize,
    /// Lattice family.
    pub tree_type: TreeType,
    /// Exercise style applied at interior nodes.
    #[serde(default)]
    pub exercise: ExerciseStyle,
}

impl AmericanSpec {
    /// Smallest accepted step count.
    pub const MIN_STEPS: usize = 2;

    /// Creates an American-exercise specification.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidSteps` if `steps < 2`.
    pub fn new(
        params: PricingParameters,
        steps: usize,
        tree_type: TreeType,
    ) -> Result<Self, InstrumentError> {
        if steps < Self::MIN_STEPS {
            return Err(InstrumentError::InvalidSteps { steps });
        }
        Ok(Self {
            params,
            steps,
            tree_type,
            exercise: ExerciseStyle::American,
        })
    }

    /// Returns a copy with a different exercise style.
    #[inline]
    pub fn with_exercise(mut self, exercise: ExerciseStyle) -> Self {
        self.exercise = exercise;
        self
    }

    /// Returns a copy with different market parameters and the same lattice.
    #[inline]
    pub fn with_params(mut self, params: PricingParameters) -> Self {
        self.params = params;
        self
    }

    /// Returns a copy with a different step count, floored at the minimum.
    #[inline]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(Self::MIN_STEPS);
        self
    }
}
