//! Monte Carlo engine.
//!
//! # Architecture
//!
//! ```text
//! simulate_arithmetic_asian
//! ├── MonteCarloConfig  (paths, chunking, variance reduction, seed)
//! ├── NormalSource      (one independent stream per chunk)
//! ├── rayon chunks      (per-chunk SampleStats)
//! └── ordered merge     (associative moment update)
//! ```
//!
//! Chunk boundaries depend only on the path count and chunk size, and chunk
//! accumulators are merged in index order, so a seeded run gives the same
//! estimate on any number of threads.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingParameters};
//! use pricer_models::instruments::{AsianSpec, AverageType};
//! use pricer_pricing::mc::{simulate_arithmetic_asian, MonteCarloConfig};
//! use pricer_pricing::rng::SeededSource;
//!
//! let params = PricingParameters::new(1.10, 1.10, 0.5, 0.03, 0.01, 0.1).unwrap();
//! let spec = AsianSpec::new(params, AverageType::Arithmetic, 26).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .antithetic(true)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let estimate =
//!     simulate_arithmetic_asian(&spec, OptionKind::Call, &config, &SeededSource::new(42)).unwrap();
//! assert!(estimate.confidence_interval.contains(estimate.price));
//! ```

mod asian;
mod config;
mod error;
mod stats;

pub use asian::{simulate_arithmetic_asian, McEstimate};
pub use config::{
    validate_observations, MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_CHUNK_SIZE,
    DEFAULT_PATHS, MAX_OBSERVATIONS, MAX_PATHS,
};
pub use error::ConfigError;
pub use stats::SampleStats;
