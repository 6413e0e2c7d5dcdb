//! Asian (average-rate) option specification.

use pricer_core::types::PricingParameters;
use serde::{Deserialize, Serialize};

use super::error::InstrumentError;

/// Averaging method applied to the fixings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AverageType {
    /// Arithmetic mean, priced by Monte Carlo.
    #[default]
    Arithmetic,
    /// Geometric mean, priced in closed form.
    Geometric,
}

impl std::fmt::Display for AverageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AverageType::Arithmetic => write!(f, "arithmetic"),
            AverageType::Geometric => write!(f, "geometric"),
        }
    }
}

impl std::str::FromStr for AverageType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arithmetic" => Ok(AverageType::Arithmetic),
            "geometric" => Ok(AverageType::Geometric),
            other => Err(InstrumentError::InvalidParameter {
                message: format!("unknown average type '{}'", other),
            }),
        }
    }
}

/// Average-rate option on equally spaced fixings up to expiry.
///
/// The average runs over the initial spot plus `observation_count` fixings
/// at `T/N, 2T/N, ..., T`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsianSpec {
    /// Market and contract parameters.
    pub params: PricingParameters,
    /// Averaging method.
    pub average_type: AverageType,
    /// Number of averaging fixings `N`.
    pub observation_count: usize,
}

impl AsianSpec {
    /// Creates an Asian specification.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidObservationCount` if `observation_count == 0`.
    pub fn new(
        params: PricingParameters,
        average_type: AverageType,
        observation_count: usize,
    ) -> Result<Self, InstrumentError> {
        if observation_count == 0 {
            return Err(InstrumentError::InvalidObservationCount {
                count: observation_count,
            });
        }
        Ok(Self {
            params,
            average_type,
            observation_count,
        })
    }

    /// Fixing interval `T/N`.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.params.expiry / self.observation_count as f64
    }
}
