//! Asian Engine entry points.
//!
//! Arithmetic averages are simulated with [`crate::mc`]; geometric averages
//! use the closed form in [`crate::analytical`] and carry no sampling
//! statistics.

use pricer_core::types::{ConfidenceInterval, OptionKind};
use pricer_models::instruments::{AsianSpec, AverageType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytical::geometric_asian;
use crate::mc::{simulate_arithmetic_asian, ConfigError, MonteCarloConfig};
use crate::rng::{NormalSource, SeededSource};

/// Result of an Asian valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsianResult {
    /// Price, discounted at `D_d(T)`.
    pub price: f64,
    /// Standard error of the Monte Carlo estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
    /// 95% confidence interval of the Monte Carlo estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_interval: Option<ConfidenceInterval>,
    /// Number of Monte Carlo samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_paths: Option<usize>,
    /// Averaging method used.
    pub average_type: AverageType,
}

/// Prices an Asian option.
///
/// Arithmetic averages run `num_paths` samples (default 10,000) from a
/// freshly seeded source, so repeated calls agree only in distribution.
///
/// # Errors
///
/// Returns `ConfigError` if the path or fixing count is out of range.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, PricingParameters};
/// use pricer_models::instruments::{AsianSpec, AverageType};
/// use pricer_pricing::asian::price_asian;
///
/// let params = PricingParameters::new(1.10, 1.10, 0.5, 0.03, 0.01, 0.1).unwrap();
///
/// let spec = AsianSpec::new(params, AverageType::Arithmetic, 26).unwrap();
/// let mc = price_asian(&spec, OptionKind::Call, Some(5_000)).unwrap();
/// assert_eq!(mc.num_paths, Some(5_000));
///
/// let spec = AsianSpec::new(params, AverageType::Geometric, 26).unwrap();
/// let closed = price_asian(&spec, OptionKind::Call, None).unwrap();
/// assert!(closed.std_error.is_none());
/// ```
pub fn price_asian(
    spec: &AsianSpec,
    kind: OptionKind,
    num_paths: Option<usize>,
) -> Result<AsianResult, ConfigError> {
    let mut builder = MonteCarloConfig::builder();
    if let Some(n) = num_paths {
        builder = builder.n_paths(n);
    }
    let config = builder.build()?;
    price_asian_with(spec, kind, &config, &SeededSource::from_entropy())
}

/// Prices an Asian option with an explicit configuration and variate source.
///
/// A seed in `config` replaces `source` with a [`SeededSource`] rooted at
/// that seed.
///
/// # Errors
///
/// Returns `ConfigError` if `config` is invalid or the fixing count is out
/// of range.
pub fn price_asian_with<S: NormalSource>(
    spec: &AsianSpec,
    kind: OptionKind,
    config: &MonteCarloConfig,
    source: &S,
) -> Result<AsianResult, ConfigError> {
    match spec.average_type {
        AverageType::Geometric => {
            crate::mc::validate_observations(spec.observation_count)?;
            let closed = geometric_asian(&spec.params, kind, spec.observation_count);
            debug!(price = closed.price, "geometric asian closed form");
            Ok(AsianResult {
                price: closed.price,
                std_error: None,
                confidence_interval: None,
                num_paths: None,
                average_type: AverageType::Geometric,
            })
        }
        AverageType::Arithmetic => {
            let estimate = match config.seed() {
                Some(seed) => {
                    simulate_arithmetic_asian(spec, kind, config, &SeededSource::new(seed))?
                }
                None => simulate_arithmetic_asian(spec, kind, config, source)?,
            };
            Ok(AsianResult {
                price: estimate.price,
                std_error: Some(estimate.std_error),
                confidence_interval: Some(estimate.confidence_interval),
                num_paths: Some(estimate.num_paths),
                average_type: AverageType::Arithmetic,
            })
        }
    }
}
