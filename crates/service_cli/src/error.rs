//! CLI error type.

use pricer_core::types::PricingError;
use pricer_models::instruments::{CombinationError, InstrumentError};
use thiserror::Error;

/// Errors surfaced by `neutryx-fx`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or environment could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Market or contract parameters were rejected.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Product specification was rejected.
    #[error("Invalid instrument: {0}")]
    Instrument(#[from] InstrumentError),

    /// Combination structure was rejected.
    #[error("Invalid combination: {0}")]
    Combination(#[from] CombinationError),

    /// Monte Carlo configuration was rejected.
    #[error("Monte Carlo configuration: {0}")]
    MonteCarlo(#[from] pricer_pricing::mc::ConfigError),

    /// Result could not be serialised.
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A self-check failed.
    #[error("{failed} of {total} checks failed")]
    CheckFailed {
        /// Number of failed checks.
        failed: usize,
        /// Number of checks run.
        total: usize,
    },
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
