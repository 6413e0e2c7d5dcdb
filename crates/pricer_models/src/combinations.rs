//! Combination composer.
//!
//! Prices each vanilla leg with the Garman-Kohlhagen engine, using the shared
//! market parameters with the leg's own strike and volatility, and sums price
//! and Greeks with the signed leg coefficients.
//!
//! | Structure | Legs (long direction) |
//! |---|---|
//! | Risk reversal | `+call`, `-put` |
//! | Seagull | `+call`, `-put_mid`, `-put_low` |
//!
//! A short direction flips every coefficient.

use pricer_core::types::{GreekSet, OptionKind, PricingError, PricingParameters, PricingResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytical::garman_kohlhagen;
use crate::instruments::{Combination, CombinationLeg, Direction};

/// Coefficient-scaled result of one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegResult {
    /// Descriptive label, e.g. `"Short Put K=1.05"`.
    pub label: String,
    /// Signed coefficient applied to the leg.
    pub coefficient: f64,
    /// Option kind of the leg.
    pub kind: OptionKind,
    /// Leg strike.
    pub strike: f64,
    /// Leg volatility.
    pub volatility: f64,
    /// Scaled price.
    pub price: f64,
    /// Scaled Greeks.
    pub greeks: GreekSet,
}

/// Net result of a combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationResult {
    /// Net price.
    pub price: f64,
    /// Net Greeks.
    pub greeks: GreekSet,
    /// Per-leg breakdown in definition order, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<LegResult>>,
}

impl CombinationResult {
    /// Net price and Greeks without the breakdown.
    pub fn net(&self) -> PricingResult {
        PricingResult::new(self.price, self.greeks)
    }
}

/// Prices a combination against shared market parameters.
///
/// Each leg replaces the strike and volatility of `shared`; spot, tenors and
/// rates are common. With `with_legs`, the result keeps every leg's scaled
/// price and Greeks, call legs first.
///
/// # Errors
///
/// Returns `PricingError::InvalidInput` if the structure violates its strike
/// ordering.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingParameters;
/// use pricer_models::combinations::price_combination;
/// use pricer_models::instruments::{Combination, CombinationLeg, Direction, RiskReversal};
///
/// let shared = PricingParameters::new(1.10, 1.10, 0.5, 0.03, 0.01, 0.10).unwrap();
/// let rr = RiskReversal::new(
///     Direction::Long,
///     CombinationLeg::new(1.15, 0.095).unwrap(),
///     CombinationLeg::new(1.05, 0.105).unwrap(),
/// );
///
/// let result = price_combination(&Combination::RiskReversal(rr), &shared, true).unwrap();
/// let legs = result.legs.unwrap();
/// assert_eq!(legs[0].label, "Long Call K=1.15");
/// assert_eq!(legs[1].label, "Short Put K=1.05");
/// assert!((legs[0].price + legs[1].price - result.price).abs() < 1e-15);
/// ```
pub fn price_combination(
    combination: &Combination,
    shared: &PricingParameters,
    with_legs: bool,
) -> Result<CombinationResult, PricingError> {
    combination.validate()?;

    let legs: Vec<LegResult> = combination
        .legs()
        .into_iter()
        .map(|(coefficient, kind, leg)| price_leg(shared, coefficient, kind, &leg))
        .collect();

    let mut price = 0.0;
    let mut greeks: Option<GreekSet> = None;
    for leg in &legs {
        price += leg.price;
        greeks = Some(match greeks {
            Some(total) => total + leg.greeks,
            None => leg.greeks,
        });
    }

    debug!(
        structure = combination.name(),
        legs = legs.len(),
        price,
        "combination priced"
    );

    Ok(CombinationResult {
        price,
        greeks: greeks.unwrap_or_default(),
        legs: with_legs.then_some(legs),
    })
}

fn price_leg(
    shared: &PricingParameters,
    coefficient: f64,
    kind: OptionKind,
    leg: &CombinationLeg,
) -> LegResult {
    let params = shared.with_strike(leg.strike).with_volatility(leg.volatility);
    let scaled = garman_kohlhagen::price_and_greeks(&params, kind).scaled(coefficient);
    let direction = if coefficient >= 0.0 {
        Direction::Long
    } else {
        Direction::Short
    };

    LegResult {
        label: format!("{} {} K={}", direction, kind, leg.strike),
        coefficient,
        kind,
        strike: leg.strike,
        volatility: leg.volatility,
        price: scaled.price,
        greeks: scaled.greeks,
    }
}
