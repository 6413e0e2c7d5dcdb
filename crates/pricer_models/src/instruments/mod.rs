//! Product specifications.
//!
//! Each specification is an immutable record built fresh per pricing call:
//!
//! - [`DigitalSpec`]: cash-or-nothing and asset-or-nothing digitals
//! - [`AmericanSpec`]: lattice step count, tree type and exercise style
//! - [`AsianSpec`]: averaging type and fixing count
//! - [`Combination`]: risk reversal and seagull structures
//!
//! Vanilla options need no specification beyond
//! [`PricingParameters`](pricer_core::types::PricingParameters) and an
//! [`OptionKind`](pricer_core::types::OptionKind).
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::PricingParameters;
//! use pricer_models::instruments::{AmericanSpec, AsianSpec, AverageType, TreeType};
//!
//! let params = PricingParameters::new(1.10, 1.12, 0.5, 0.03, 0.01, 0.15).unwrap();
//! let american = AmericanSpec::new(params, 100, TreeType::Trinomial).unwrap();
//! let asian = AsianSpec::new(params, AverageType::Arithmetic, 26).unwrap();
//!
//! assert_eq!(american.params, asian.params);
//! ```

mod american;
mod asian;
mod combination;
mod digital;
mod error;
mod exercise;

pub use american::{AmericanSpec, TreeType};
pub use asian::{AsianSpec, AverageType};
pub use combination::{
    Combination, CombinationError, CombinationLeg, Direction, RiskReversal, Seagull,
};
pub use digital::{DigitalKind, DigitalSpec, PayoffCurrency};
pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
