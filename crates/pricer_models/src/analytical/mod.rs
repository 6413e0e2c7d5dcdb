//! Closed-form pricing engines.
//!
//! - [`garman_kohlhagen`]: vanilla European price and full analytic Greek set
//! - [`digital`]: cash-or-nothing and asset-or-nothing digitals
//!
//! ## Design Principles
//!
//! - **Free functions over immutable records**: every entry point takes a
//!   parameter record by reference and returns a fresh result.
//! - **Two clocks**: d1/d2 from the expiry tenor, discounting from the
//!   settlement tenor.
//! - **No internal validation**: callers validate with
//!   [`PricingParameters::validate`](pricer_core::types::PricingParameters::validate).

pub mod digital;
pub mod garman_kohlhagen;

// Re-export main entry points at module level
pub use digital::{greeks_digital, price_and_greeks_digital, price_digital};
pub use garman_kohlhagen::{greeks, price, price_and_greeks, GarmanKohlhagen};
