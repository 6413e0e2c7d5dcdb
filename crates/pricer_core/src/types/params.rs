//! Immutable pricing parameter record.

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// One calendar day as a year fraction (Actual/365).
pub const ONE_DAY: f64 = 1.0 / 365.0;

/// Market and contract inputs shared by every engine.
///
/// The record carries two clocks: `expiry` (T, drives d1/d2) and an optional
/// `settlement` tenor (T2, drives premium and Greek discounting). When no
/// settlement tenor is given, discounting uses `expiry`.
///
/// Engines assume the record is valid. Callers check it with
/// [`PricingParameters::new`] or [`PricingParameters::validate`].
///
/// # Examples
///
/// ```
/// use pricer_core::types::PricingParameters;
///
/// let params = PricingParameters::new(1.10, 1.12, 0.5, 0.03, 0.01, 0.15)
///     .unwrap()
///     .with_settlement(0.51);
///
/// assert_eq!(params.discount_tenor(), 0.51);
/// assert!(PricingParameters::new(-1.0, 1.12, 0.5, 0.03, 0.01, 0.15).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    /// Spot exchange rate (domestic per foreign).
    pub spot: f64,
    /// Strike.
    pub strike: f64,
    /// Time to expiry in years (T).
    pub expiry: f64,
    /// Time to settlement in years (T2). `None` means "same as expiry".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement: Option<f64>,
    /// Domestic continuously-compounded rate.
    pub rate_domestic: f64,
    /// Foreign continuously-compounded rate.
    pub rate_foreign: f64,
    /// Volatility of the exchange rate.
    pub volatility: f64,
}

impl PricingParameters {
    /// Creates validated parameters with the settlement tenor equal to expiry.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` if any parameter is out of domain.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate_domestic: f64,
        rate_foreign: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            expiry,
            settlement: None,
            rate_domestic,
            rate_foreign,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Returns a copy with an explicit settlement (discount) tenor.
    #[inline]
    pub fn with_settlement(mut self, settlement: f64) -> Self {
        self.settlement = Some(settlement);
        self
    }

    /// Tenor used for premium and Greek discounting (T2, falling back to T).
    #[inline]
    pub fn discount_tenor(&self) -> f64 {
        self.settlement.unwrap_or(self.expiry)
    }

    /// Checks the domain of every field.
    ///
    /// Spot and strike must be positive, tenors and volatility non-negative,
    /// and every value finite. Rates may take any sign.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        let finite = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("rate_domestic", self.rate_domestic),
            ("rate_foreign", self.rate_foreign),
            ("volatility", self.volatility),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(PricingError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.spot <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "spot must be positive, got {}",
                self.spot
            )));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if self.expiry < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "expiry must be non-negative, got {}",
                self.expiry
            )));
        }
        if self.volatility < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if let Some(settlement) = self.settlement {
            if !settlement.is_finite() || settlement < 0.0 {
                return Err(PricingError::InvalidInput(format!(
                    "settlement must be finite and non-negative, got {}",
                    settlement
                )));
            }
        }
        Ok(())
    }

    /// Outright forward `S · exp((r_d - r_f) · T)`.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate_domestic - self.rate_foreign) * self.expiry).exp()
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(mut self, strike: f64) -> Self {
        self.strike = strike;
        self
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Returns a copy with different domestic and foreign rates.
    #[inline]
    pub fn with_rates(mut self, rate_domestic: f64, rate_foreign: f64) -> Self {
        self.rate_domestic = rate_domestic;
        self.rate_foreign = rate_foreign;
        self
    }

    /// Returns a copy with both clocks moved by `dt` years, floored at zero.
    ///
    /// A negative `dt` moves the valuation date towards expiry.
    pub fn shifted(mut self, dt: f64) -> Self {
        self.expiry = (self.expiry + dt).max(0.0);
        self.settlement = self.settlement.map(|t2| (t2 + dt).max(0.0));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PricingParameters {
        PricingParameters::new(1.10, 1.12, 1.0, 0.03, 0.01, 0.15).unwrap()
    }

    #[test]
    fn test_new_defaults_settlement_to_expiry() {
        let p = params();
        assert_eq!(p.settlement, None);
        assert_eq!(p.discount_tenor(), 1.0);
    }

    #[test]
    fn test_validate_rejects_out_of_domain() {
        assert!(PricingParameters::new(0.0, 1.0, 1.0, 0.0, 0.0, 0.1).is_err());
        assert!(PricingParameters::new(1.0, -1.0, 1.0, 0.0, 0.0, 0.1).is_err());
        assert!(PricingParameters::new(1.0, 1.0, -0.1, 0.0, 0.0, 0.1).is_err());
        assert!(PricingParameters::new(1.0, 1.0, 1.0, 0.0, 0.0, -0.1).is_err());
        assert!(PricingParameters::new(1.0, 1.0, 1.0, f64::NAN, 0.0, 0.1).is_err());
        assert!(params().with_settlement(-1.0).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_degenerate_but_valid() {
        assert!(PricingParameters::new(1.0, 1.0, 0.0, -0.01, 0.02, 0.0).is_ok());
    }

    #[test]
    fn test_validate_error_names_field() {
        let err = PricingParameters::new(1.0, 1.0, 1.0, 0.0, 0.0, -0.2).unwrap_err();
        assert!(err.to_string().contains("volatility"));
    }

    #[test]
    fn test_forward() {
        let p = params();
        assert!((p.forward() - 1.10 * 0.02_f64.exp()).abs() < 1e-12);
    }

    #[test]
    fn test_shifted_moves_both_clocks_and_floors() {
        let p = params().with_settlement(1.01);
        let earlier = p.shifted(-ONE_DAY);
        assert!((earlier.expiry - (1.0 - ONE_DAY)).abs() < 1e-15);
        assert!((earlier.discount_tenor() - (1.01 - ONE_DAY)).abs() < 1e-15);

        let expired = p.shifted(-2.0);
        assert_eq!(expired.expiry, 0.0);
        assert_eq!(expired.discount_tenor(), 0.0);
    }

    #[test]
    fn test_with_helpers() {
        let p = params().with_spot(1.2).with_strike(1.3).with_volatility(0.2).with_rates(0.04, 0.02);
        assert_eq!(p.spot, 1.2);
        assert_eq!(p.strike, 1.3);
        assert_eq!(p.volatility, 0.2);
        assert_eq!((p.rate_domestic, p.rate_foreign), (0.04, 0.02));
    }
}
