//! CLI command implementations
//!
//! Each submodule implements one subcommand. Market flags are shared through
//! [`MarketArgs`].

pub mod american;
pub mod asian;
pub mod check;
pub mod combination;
pub mod digital;
pub mod vanilla;

use clap::Args;
use pricer_core::types::PricingParameters;

use crate::{CliError, Result};

/// Market and contract flags common to every product.
#[derive(Debug, Clone, Args)]
pub struct MarketArgs {
    /// Spot exchange rate (domestic per foreign)
    #[arg(long)]
    pub spot: f64,

    /// Strike (combinations default to the call-leg strike)
    #[arg(long)]
    pub strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Time to settlement in years (defaults to expiry)
    #[arg(long)]
    pub settlement: Option<f64>,

    /// Domestic continuously-compounded rate
    #[arg(long)]
    pub rd: f64,

    /// Foreign continuously-compounded rate
    #[arg(long)]
    pub rf: f64,

    /// Volatility
    #[arg(long)]
    pub vol: f64,
}

impl MarketArgs {
    /// Validated parameters; `--strike` is required.
    pub fn params(&self) -> Result<PricingParameters> {
        let strike = self
            .strike
            .ok_or_else(|| CliError::InvalidArgument("--strike is required".to_string()))?;
        self.params_with_strike(strike)
    }

    /// Validated parameters with `strike` unless `--strike` was given.
    pub fn params_with_strike(&self, strike: f64) -> Result<PricingParameters> {
        let mut params = PricingParameters {
            spot: self.spot,
            strike: self.strike.unwrap_or(strike),
            expiry: self.expiry,
            settlement: None,
            rate_domestic: self.rd,
            rate_foreign: self.rf,
            volatility: self.vol,
        };
        if let Some(settlement) = self.settlement {
            params = params.with_settlement(settlement);
        }
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> MarketArgs {
        MarketArgs {
            spot: 1.10,
            strike: None,
            expiry: 0.5,
            settlement: Some(0.505),
            rd: 0.03,
            rf: 0.01,
            vol: 0.1,
        }
    }

    #[test]
    fn test_strike_required() {
        assert!(matches!(market().params(), Err(CliError::InvalidArgument(_))));
        let p = market().params_with_strike(1.2).unwrap();
        assert_eq!(p.strike, 1.2);
        assert_eq!(p.discount_tenor(), 0.505);
    }

    #[test]
    fn test_invalid_market_rejected() {
        let mut m = market();
        m.strike = Some(1.1);
        m.vol = -0.1;
        assert!(matches!(m.params(), Err(CliError::Pricing(_))));
    }
}
