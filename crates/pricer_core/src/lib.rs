//! # pricer_core: Mathematical Foundation for FX Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the pricing stack, providing:
//! - Standard normal CDF/PDF (`math::distributions`)
//! - Discount factors and the d1/d2 moment terms (`math::discounting`)
//! - Parameter records: `PricingParameters`, `OptionKind` (`types`)
//! - Result records: `GreekSet`, `PricingResult`, `ConfidenceInterval` (`types::result`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation of parameter and result records
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::math::discounting::MomentTerms;
//! use pricer_core::types::{OptionKind, PricingParameters};
//!
//! let params = PricingParameters::new(1.10, 1.12, 0.5, 0.03, 0.01, 0.15).unwrap();
//! let moments = MomentTerms::from_params(&params);
//!
//! assert!((moments.d1 - moments.d2 - 0.15 * 0.5_f64.sqrt()).abs() < 1e-12);
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! assert_eq!(OptionKind::Put.sign(), -1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
