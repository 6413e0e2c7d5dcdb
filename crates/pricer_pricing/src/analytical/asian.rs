//! Discrete geometric-average Asian options.
//!
//! The geometric mean of log-normal fixings is itself log-normal, so the
//! option has a Black-style closed form. Over the grid `t_i = i·T/N`,
//! `i = 0..=N` (the initial spot is the first fixing):
//!
//! ```text
//! μ     = r_d - r_f - σ²/2
//! m     = E[ln G]   = ln S + μ·T/2
//! s²    = Var[ln G] = σ²·T·(2N + 1) / (6(N + 1))
//! E[G]  = exp(m + s²/2)
//! d1    = (m - ln K + s²) / s          d2 = d1 - s
//! Call  = D_d(T)·[E[G]·Φ(d1) - K·Φ(d2)]
//! Put   = D_d(T)·[K·Φ(-d2) - E[G]·Φ(-d1)]
//! ```
//!
//! The effective volatility is `σ_G = s/√T = σ·√((2N + 1)/(6(N + 1)))`. As
//! `N → ∞` this tends to the continuous-averaging value `σ/√3`.

use pricer_core::math::discounting::discount_factor;
use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::{OptionKind, PricingParameters};
use serde::{Deserialize, Serialize};

/// Result from geometric Asian option pricing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometricAsianResult {
    /// Option price, discounted at `D_d(T)`.
    pub price: f64,
    /// Undiscounted expected payoff.
    pub expected_payoff: f64,
    /// Effective volatility σ_G.
    pub adjusted_volatility: f64,
    /// Effective carry b_G with `E[G] = S·exp(b_G·T)`.
    pub adjusted_drift: f64,
    /// d1 parameter (0 when `s = 0`).
    pub d1: f64,
    /// d2 parameter (0 when `s = 0`).
    pub d2: f64,
}

/// Prices a geometric-average Asian option with `observations` fixings
/// after the initial spot.
///
/// With `s = 0` (zero volatility or zero expiry) the average is
/// deterministic and the price is the discounted intrinsic value on `E[G]`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, PricingParameters};
/// use pricer_pricing::analytical::geometric_asian;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2).unwrap();
/// let result = geometric_asian(&params, OptionKind::Call, 1000);
///
/// // Dense sampling approaches continuous averaging: σ_G → σ/√3.
/// assert!((result.adjusted_volatility - 0.2 / 3.0_f64.sqrt()).abs() < 1e-4);
/// ```
pub fn geometric_asian(
    params: &PricingParameters,
    kind: OptionKind,
    observations: usize,
) -> GeometricAsianResult {
    let n = observations as f64;
    let t = params.expiry;
    let vol = params.volatility;
    let mu = params.rate_domestic - params.rate_foreign - 0.5 * vol * vol;

    let vol_factor = ((2.0 * n + 1.0) / (6.0 * (n + 1.0))).sqrt();
    let adjusted_volatility = vol * vol_factor;
    let s = adjusted_volatility * t.sqrt();
    let m = params.spot.ln() + 0.5 * mu * t;
    let expected_average = (m + 0.5 * s * s).exp();
    let adjusted_drift = if t > 0.0 {
        0.5 * mu + 0.5 * adjusted_volatility * adjusted_volatility
    } else {
        0.0
    };

    let df = discount_factor(params.rate_domestic, t);
    let strike = params.strike;

    let (expected_payoff, d1, d2) = if s == 0.0 {
        (kind.intrinsic(expected_average, strike), 0.0, 0.0)
    } else {
        let d1 = (m - strike.ln() + s * s) / s;
        let d2 = d1 - s;
        let payoff = match kind {
            OptionKind::Call => expected_average * norm_cdf(d1) - strike * norm_cdf(d2),
            OptionKind::Put => strike * norm_cdf(-d2) - expected_average * norm_cdf(-d1),
        };
        (payoff, d1, d2)
    };

    GeometricAsianResult {
        price: df * expected_payoff,
        expected_payoff,
        adjusted_volatility,
        adjusted_drift,
        d1,
        d2,
    }
}
