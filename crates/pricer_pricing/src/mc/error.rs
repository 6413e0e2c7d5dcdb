//! Error types for the Monte Carlo engine.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for the Monte Carlo engine.
///
/// Raised when a configuration is built or when a product asks for more
/// fixings than the engine accepts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),
    /// Observation count outside valid range [1, 10_000].
    #[error("Invalid observation count {0}: must be in range [1, 10_000]")]
    InvalidObservationCount(usize),
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
