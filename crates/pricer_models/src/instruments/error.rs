//! Instrument error types.
//!
//! This module provides structured error handling for product
//! specification construction.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidSteps`: Lattice step count below the minimum
/// - `InvalidObservationCount`: Asian averaging fixing count below one
/// - `InvalidPayout`: Digital cash amount is not a positive finite number
/// - `InvalidStrike`: Combination leg strike is non-positive
/// - `InvalidVolatility`: Combination leg volatility is negative
/// - `InvalidParameter`: General parameter validation failure
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidSteps { steps: 1 };
/// assert!(format!("{}", err).contains("steps = 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Lattice needs at least two steps.
    #[error("Invalid lattice: steps = {steps}, at least 2 required")]
    InvalidSteps {
        /// The invalid step count
        steps: usize,
    },

    /// Asian option needs at least one averaging fixing.
    #[error("Invalid averaging: observation count = {count}, at least 1 required")]
    InvalidObservationCount {
        /// The invalid observation count
        count: usize,
    },

    /// Digital payout amount must be positive and finite.
    #[error("Invalid payout: D = {payout}")]
    InvalidPayout {
        /// The invalid payout
        payout: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (negative).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
