//! # Pricer Pricing (L3: Numerical Engines)
//!
//! Lattice and Monte Carlo engines for FX options under Garman-Kohlhagen
//! dynamics.
//!
//! This crate provides:
//! - The American Engine: CRR binomial and trinomial backward induction with
//!   early-exercise boundary and bump-and-revalue Greeks ([`lattice`])
//! - The Asian Engine: arithmetic averages by Monte Carlo ([`mc`]) and
//!   geometric averages in closed form ([`analytical`]), behind one entry
//!   point ([`asian`])
//! - Injectable normal-variate streams ([`rng`])
//!
//! ## Parallelism
//!
//! Monte Carlo paths run in fixed-size chunks on the rayon pool, each chunk
//! with its own variate stream. Lattice bump scenarios are independent
//! inductions and also run on the pool; a single induction is sequential.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingParameters};
//! use pricer_models::instruments::{AmericanSpec, TreeType};
//! use pricer_pricing::lattice::price_american;
//!
//! let params = PricingParameters::new(1.10, 1.12, 0.5, 0.03, 0.01, 0.15).unwrap();
//! let spec = AmericanSpec::new(params, 150, TreeType::Trinomial).unwrap();
//!
//! let result = price_american(&spec, OptionKind::Put);
//! assert!(result.early_exercise_premium >= -1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod asian;
pub mod lattice;
pub mod mc;
pub mod rng;
