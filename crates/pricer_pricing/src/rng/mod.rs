//! # Random Number Generation
//!
//! Normal-variate generation for the Monte Carlo engine, isolated behind two
//! traits so that pricing code never names a concrete generator:
//!
//! - [`NormalGenerator`]: a sequential stream of standard normal variates
//! - [`NormalSource`]: a factory of independent streams indexed by chunk
//!
//! The default source, [`SeededSource`], derives one [`PricerRng`] per chunk
//! from `(seed, chunk index)`. Results therefore depend only on the seed and
//! the chunk size, never on the number of worker threads.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalGenerator, NormalSource, SeededSource};
//!
//! let source = SeededSource::new(12345);
//!
//! let mut first = source.stream(0);
//! let mut again = source.stream(0);
//! assert_eq!(first.next_normal(), again.next_normal());
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! source.stream(1).fill_normal(&mut buffer);
//! ```

mod prng;
mod source;

pub use prng::PricerRng;
pub use source::{splitmix64, NormalGenerator, NormalSource, SeededSource};
