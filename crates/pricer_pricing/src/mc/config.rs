//! Monte Carlo simulation configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of fixings allowed per path.
pub const MAX_OBSERVATIONS: usize = 10_000;

/// Path count used when none is given.
pub const DEFAULT_PATHS: usize = 10_000;

/// Paths simulated per parallel chunk unless overridden.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// With antithetic variates each sample is the average of a path and its
/// mirror, so `n_paths` samples simulate `2 · n_paths` paths.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .antithetic(true)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.seed(), Some(42));
/// assert!(!config.control_variate());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    n_paths: usize,
    chunk_size: usize,
    antithetic: bool,
    control_variate: bool,
    seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            antithetic: false,
            control_variate: false,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of samples.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of samples per parallel chunk.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Whether antithetic variates are used.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Whether the geometric-average control variate is applied.
    #[inline]
    pub fn control_variate(&self) -> bool {
        self.control_variate
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `chunk_size` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "chunk_size",
                value: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Checks a per-path fixing count against [1, 10_000].
///
/// # Errors
///
/// Returns `ConfigError::InvalidObservationCount` when out of range.
pub fn validate_observations(count: usize) -> Result<(), ConfigError> {
    if count == 0 || count > MAX_OBSERVATIONS {
        return Err(ConfigError::InvalidObservationCount(count));
    }
    Ok(())
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields take the [`MonteCarloConfig::default`] values.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(100_000)
///     .chunk_size(4096)
///     .control_variate(true)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.chunk_size(), 4096);
/// assert!(MonteCarloConfig::builder().n_paths(0).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    chunk_size: Option<usize>,
    antithetic: bool,
    control_variate: bool,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of samples, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of samples per parallel chunk.
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Enables or disables the geometric-average control variate.
    #[inline]
    pub fn control_variate(mut self, control_variate: bool) -> Self {
        self.control_variate = control_variate;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the path count or chunk size is invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_PATHS),
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            antithetic: self.antithetic,
            control_variate: self.control_variate,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
