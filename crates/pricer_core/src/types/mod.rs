//! Parameter, result, and error types.
//!
//! This module provides:
//! - `option`: `OptionKind` (call/put)
//! - `params`: `PricingParameters`, the immutable input record of every engine
//! - `result`: `GreekSet`, `PricingResult`, `ConfidenceInterval`
//! - `error`: `PricingError`, the categorised error shared across crates
//!
//! # Re-exports
//!
//! Every public type is re-exported at this module level.

pub mod error;
pub mod option;
pub mod params;
pub mod result;

pub use error::PricingError;
pub use option::OptionKind;
pub use params::{PricingParameters, ONE_DAY};
pub use result::{ConfidenceInterval, GreekSet, PricingResult};
