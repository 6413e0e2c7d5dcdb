//! Discounting and forward kernel shared by every closed-form pricer.
//!
//! Two clocks are kept apart on purpose:
//! - the **expiry** tenor `T` drives the risk-neutral moment terms d1/d2;
//! - the **discount** tenor `T2` (settlement) drives premium and Greek discounting.
//!
//! ```text
//! D_d = exp(-r_d · tenor)          D_f = exp(-r_f · tenor)
//! d1  = [ln(S/K) + (r_d - r_f + σ²/2)·T] / (σ√T)
//! d2  = d1 - σ√T
//! ```
//!
//! When `σ√T = 0` both moment terms are reported as zero (degenerate limit).
//! Exercise probabilities in that limit are taken from the sign of the log
//! forward moneyness, see [`MomentTerms::probabilities`].

use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::distributions::norm_cdf;
use crate::types::PricingParameters;

/// Continuous-compounding discount factor `exp(-rate · tenor)`.
///
/// The same formula serves the domestic and the foreign curve; callers pick
/// the rate and tenor.
///
/// # Examples
/// ```
/// use pricer_core::math::discounting::discount_factor;
///
/// let df = discount_factor(0.05_f64, 0.25);
/// assert!((df - 0.987_577_800_6).abs() < 1e-9);
/// ```
#[inline]
pub fn discount_factor<T: Float>(rate: T, tenor: T) -> T {
    (-rate * tenor).exp()
}

/// Computes `(d1, d2)` from the expiry tenor.
///
/// Returns `(0, 0)` when `σ√T = 0`.
///
/// # Examples
/// ```
/// use pricer_core::math::discounting::d1_d2;
///
/// let (d1, d2) = d1_d2(100.0_f64, 100.0, 0.05, 0.02, 0.2, 1.0);
/// assert!((d1 - d2 - 0.2).abs() < 1e-12);
///
/// let (z1, z2) = d1_d2(100.0_f64, 90.0, 0.05, 0.02, 0.0, 1.0);
/// assert_eq!((z1, z2), (0.0, 0.0));
/// ```
#[inline]
pub fn d1_d2<T: Float>(
    spot: T,
    strike: T,
    rate_domestic: T,
    rate_foreign: T,
    volatility: T,
    expiry: T,
) -> (T, T) {
    let zero = T::zero();
    let vol_sqrt_t = volatility * expiry.sqrt();
    if vol_sqrt_t == zero {
        return (zero, zero);
    }

    let half = T::from(0.5).unwrap();
    let drift = rate_domestic - rate_foreign + half * volatility * volatility;
    let d1 = ((spot / strike).ln() + drift * expiry) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Pre-computed moment terms for one parameter record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentTerms {
    /// d1 from the expiry tenor.
    pub d1: f64,
    /// d2 = d1 - σ√T.
    pub d2: f64,
    /// √T
    pub sqrt_t: f64,
    /// σ√T
    pub vol_sqrt_t: f64,
    /// ln(F/K) = ln(S/K) + (r_d - r_f)·T
    pub log_moneyness: f64,
}

impl MomentTerms {
    /// Computes the moment terms of `params` (expiry tenor only).
    pub fn from_params(params: &PricingParameters) -> Self {
        let sqrt_t = params.expiry.sqrt();
        let (d1, d2) = d1_d2(
            params.spot,
            params.strike,
            params.rate_domestic,
            params.rate_foreign,
            params.volatility,
            params.expiry,
        );
        let log_moneyness = (params.spot / params.strike).ln()
            + (params.rate_domestic - params.rate_foreign) * params.expiry;
        Self {
            d1,
            d2,
            sqrt_t,
            vol_sqrt_t: params.volatility * sqrt_t,
            log_moneyness,
        }
    }

    /// Whether `σ√T = 0`, in which case ratio-based Greeks are defined as zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vol_sqrt_t == 0.0
    }

    /// Returns `(Φ(s·d1), Φ(s·d2))` for the payoff sign `s` (+1 call, -1 put).
    ///
    /// In the degenerate limit the terminal spot is the forward, so both
    /// probabilities collapse to 1, 0 or 1/2 depending on the sign of
    /// `s·ln(F/K)`.
    pub fn probabilities(&self, sign: f64) -> (f64, f64) {
        if self.is_degenerate() {
            let p = match (sign * self.log_moneyness).partial_cmp(&0.0) {
                Some(std::cmp::Ordering::Greater) => 1.0,
                Some(std::cmp::Ordering::Less) => 0.0,
                _ => 0.5,
            };
            return (p, p);
        }
        (norm_cdf(sign * self.d1), norm_cdf(sign * self.d2))
    }
}

/// Domestic and foreign discount factors over one tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountFactors {
    /// exp(-r_d · tenor)
    pub domestic: f64,
    /// exp(-r_f · tenor)
    pub foreign: f64,
    /// Tenor the factors were computed over, in years.
    pub tenor: f64,
}

impl DiscountFactors {
    /// Discount factors over an explicit tenor.
    pub fn over(params: &PricingParameters, tenor: f64) -> Self {
        Self {
            domestic: discount_factor(params.rate_domestic, tenor),
            foreign: discount_factor(params.rate_foreign, tenor),
            tenor,
        }
    }

    /// Discount factors over the settlement (discount) tenor `T2`.
    pub fn settlement(params: &PricingParameters) -> Self {
        Self::over(params, params.discount_tenor())
    }

    /// Discount factors over the expiry tenor `T`.
    pub fn expiry(params: &PricingParameters) -> Self {
        Self::over(params, params.expiry)
    }
}
