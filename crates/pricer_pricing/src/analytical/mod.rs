//! Analytical (closed-form) solutions used alongside the Monte Carlo engine.
//!
//! # Available Solutions
//!
//! - **Discrete geometric-average Asian options**: exact log-normal moments
//!   of the geometric mean over the initial spot and `N` equally spaced
//!   fixings
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingParameters};
//! use pricer_pricing::analytical::geometric_asian;
//!
//! let params = PricingParameters::new(1.10, 1.10, 1.0, 0.03, 0.01, 0.1).unwrap();
//! let result = geometric_asian(&params, OptionKind::Call, 12);
//! assert!(result.price > 0.0);
//! ```

pub mod asian;

pub use asian::{geometric_asian, GeometricAsianResult};
