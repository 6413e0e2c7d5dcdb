//! Digital (binary) option specification.

use pricer_core::types::PricingParameters;
use serde::{Deserialize, Serialize};

use super::error::InstrumentError;

/// Payoff style of a digital option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigitalKind {
    /// Pays a fixed cash amount if in the money at expiry.
    CashOrNothing,
    /// Pays one unit of the foreign currency if in the money at expiry.
    AssetOrNothing,
}

/// Currency in which a cash-or-nothing digital pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffCurrency {
    /// Pays `D` units of domestic currency.
    #[default]
    Domestic,
    /// Pays `D` units of foreign currency, valued in domestic terms.
    Foreign,
}

impl std::str::FromStr for DigitalKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" | "cash-or-nothing" => Ok(DigitalKind::CashOrNothing),
            "asset" | "asset-or-nothing" => Ok(DigitalKind::AssetOrNothing),
            other => Err(InstrumentError::InvalidParameter {
                message: format!("unknown digital kind '{}'", other),
            }),
        }
    }
}

impl std::str::FromStr for PayoffCurrency {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "domestic" | "dom" => Ok(PayoffCurrency::Domestic),
            "foreign" | "for" => Ok(PayoffCurrency::Foreign),
            other => Err(InstrumentError::InvalidParameter {
                message: format!("unknown payoff currency '{}'", other),
            }),
        }
    }
}

/// Digital option: market parameters, payoff style and cash amount.
///
/// The payout is ignored for asset-or-nothing digitals.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingParameters;
/// use pricer_models::instruments::{DigitalKind, DigitalSpec, PayoffCurrency};
///
/// let params = PricingParameters::new(1.1, 1.0, 0.25, 0.05, 0.03, 0.1).unwrap();
/// let spec = DigitalSpec::cash_or_nothing(params, PayoffCurrency::Domestic, 1_000.0).unwrap();
/// assert_eq!(spec.kind, DigitalKind::CashOrNothing);
/// assert!(DigitalSpec::cash_or_nothing(params, PayoffCurrency::Domestic, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitalSpec {
    /// Market and contract parameters.
    pub params: PricingParameters,
    /// Cash-or-nothing or asset-or-nothing.
    pub kind: DigitalKind,
    /// Payoff currency (cash-or-nothing only).
    pub currency: PayoffCurrency,
    /// Cash amount `D`.
    pub payout: f64,
}

impl DigitalSpec {
    /// Cash-or-nothing digital paying `payout` units of `currency`.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidPayout` unless `payout` is positive and finite.
    pub fn cash_or_nothing(
        params: PricingParameters,
        currency: PayoffCurrency,
        payout: f64,
    ) -> Result<Self, InstrumentError> {
        if !payout.is_finite() || payout <= 0.0 {
            return Err(InstrumentError::InvalidPayout { payout });
        }
        Ok(Self {
            params,
            kind: DigitalKind::CashOrNothing,
            currency,
            payout,
        })
    }

    /// Asset-or-nothing digital paying one unit of foreign currency.
    pub fn asset_or_nothing(params: PricingParameters) -> Self {
        Self {
            params,
            kind: DigitalKind::AssetOrNothing,
            currency: PayoffCurrency::Foreign,
            payout: 1.0,
        }
    }

    /// Returns a copy with different market parameters.
    #[inline]
    pub fn with_params(mut self, params: PricingParameters) -> Self {
        self.params = params;
        self
    }
}
