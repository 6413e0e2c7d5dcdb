//! Garman-Kohlhagen model for European FX options.
//!
//! # Mathematical Background
//!
//! With `S` spot (domestic per foreign), `K` strike, `r_d`/`r_f` the domestic
//! and foreign rates, `σ` the volatility, `T` the expiry tenor and `T2` the
//! settlement tenor:
//!
//! ```text
//! C = S·e^(-r_f·T2)·N(d1) - K·e^(-r_d·T2)·N(d2)
//! P = K·e^(-r_d·T2)·N(-d2) - S·e^(-r_f·T2)·N(-d1)
//! ```
//!
//! d1 and d2 use `T`; premium and every Greek are discounted over `T2`.
//!
//! # Greek units
//!
//! Gamma, vega and vanna are quoted per 1% (raw ÷ 100). Volga is built from
//! the scaled vega. Theta and time decay are per calendar day. Rho is the raw
//! derivative per unit rate.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{OptionKind, PricingParameters};
//! use pricer_models::analytical::garman_kohlhagen::{parity_gap, price};
//!
//! let params = PricingParameters::new(1.10, 1.12, 1.0, 0.03, 0.01, 0.15).unwrap();
//!
//! let call = price(&params, OptionKind::Call);
//! let put = price(&params, OptionKind::Put);
//!
//! assert!((call - put - parity_gap(&params)).abs() < 1e-12);
//! ```

use pricer_core::math::discounting::{DiscountFactors, MomentTerms};
use pricer_core::math::distributions::norm_pdf;
use pricer_core::types::params::ONE_DAY;
use pricer_core::types::{GreekSet, OptionKind, PricingParameters, PricingResult};

const DAYS_PER_YEAR: f64 = 365.0;
const PER_PERCENT: f64 = 100.0;

/// Garman-Kohlhagen evaluator for one parameter record.
///
/// Pre-computes d1, d2 and the settlement discount factors so that price and
/// Greeks share them.
#[derive(Debug, Clone, Copy)]
pub struct GarmanKohlhagen {
    params: PricingParameters,
    moments: MomentTerms,
    discount: DiscountFactors,
}

impl GarmanKohlhagen {
    /// Creates an evaluator. The parameters are assumed valid.
    pub fn new(params: &PricingParameters) -> Self {
        Self {
            params: *params,
            moments: MomentTerms::from_params(params),
            discount: DiscountFactors::settlement(params),
        }
    }

    /// Returns a reference to the parameters.
    #[inline]
    pub fn params(&self) -> &PricingParameters {
        &self.params
    }

    /// Returns d1.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.moments.d1
    }

    /// Returns d2.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.moments.d2
    }

    /// Option price in domestic currency.
    pub fn price(&self, kind: OptionKind) -> f64 {
        let s = kind.sign();
        let (n1, n2) = self.moments.probabilities(s);
        s * (self.params.spot * self.discount.foreign * n1
            - self.params.strike * self.discount.domestic * n2)
    }

    /// Delta: `D_f·N(d1)` for calls, `D_f·(N(d1) - 1)` for puts.
    pub fn delta(&self, kind: OptionKind) -> f64 {
        let (n1, _) = self.moments.probabilities(1.0);
        match kind {
            OptionKind::Call => self.discount.foreign * n1,
            OptionKind::Put => self.discount.foreign * (n1 - 1.0),
        }
    }

    /// Gamma per 1% spot move. Zero when `σ√T = 0`.
    pub fn gamma(&self) -> f64 {
        if self.moments.is_degenerate() {
            return 0.0;
        }
        self.discount.foreign * norm_pdf(self.moments.d1)
            / (self.params.spot * self.moments.vol_sqrt_t)
            / PER_PERCENT
    }

    /// Vega per 1% volatility move. Zero when `σ√T = 0`.
    pub fn vega(&self) -> f64 {
        if self.moments.is_degenerate() {
            return 0.0;
        }
        self.params.spot * self.discount.foreign * self.moments.sqrt_t * norm_pdf(self.moments.d1)
            / PER_PERCENT
    }

    /// Vanna `-S·D_f·√T·φ(d1)·d2/σ` per 1%. Zero when `σ√T = 0`.
    pub fn vanna(&self) -> f64 {
        if self.moments.is_degenerate() {
            return 0.0;
        }
        -self.params.spot
            * self.discount.foreign
            * self.moments.sqrt_t
            * norm_pdf(self.moments.d1)
            * (self.moments.d2 / self.params.volatility)
            / PER_PERCENT
    }

    /// Volga `vega·d1·d2/σ` on the scaled vega. Zero when `σ√T = 0`.
    pub fn volga(&self) -> f64 {
        if self.moments.is_degenerate() {
            return 0.0;
        }
        self.vega() * self.moments.d1 * self.moments.d2 / self.params.volatility
    }

    /// Analytic theta per calendar day.
    ///
    /// The volatility term vanishes when `σ√T = 0`; the carry terms remain.
    pub fn theta(&self, kind: OptionKind) -> f64 {
        let p = &self.params;
        let s = kind.sign();
        let (n1, n2) = self.moments.probabilities(s);

        let vol_term = if self.moments.is_degenerate() {
            0.0
        } else {
            -p.spot * self.discount.foreign * norm_pdf(self.moments.d1) * p.volatility
                / (2.0 * self.moments.sqrt_t)
        };
        let carry = s
            * (p.rate_foreign * p.spot * self.discount.foreign * n1
                - p.rate_domestic * p.strike * self.discount.domestic * n2);

        (vol_term + carry) / DAYS_PER_YEAR
    }

    /// Domestic rho per unit rate: `±K·T2·D_d·N(±d2)`.
    pub fn rho_domestic(&self, kind: OptionKind) -> f64 {
        let s = kind.sign();
        let (_, n2) = self.moments.probabilities(s);
        s * self.params.strike * self.discount.tenor * self.discount.domestic * n2
    }

    /// Foreign rho per unit rate: `∓S·T2·D_f·N(±d1)`.
    pub fn rho_foreign(&self, kind: OptionKind) -> f64 {
        let s = kind.sign();
        let (n1, _) = self.moments.probabilities(s);
        -s * self.params.spot * self.discount.tenor * self.discount.foreign * n1
    }

    /// Central one-day bump estimate `(P(T - 1d) - P(T + 1d)) / 2`.
    ///
    /// Both clocks move together; a tenor that would go negative is floored at zero.
    pub fn time_decay(&self, kind: OptionKind) -> f64 {
        let earlier = price(&self.params.shifted(-ONE_DAY), kind);
        let later = price(&self.params.shifted(ONE_DAY), kind);
        (earlier - later) / 2.0
    }

    /// Full Greek set.
    pub fn greeks(&self, kind: OptionKind) -> GreekSet {
        GreekSet {
            delta: Some(self.delta(kind)),
            gamma: Some(self.gamma()),
            vega: Some(self.vega()),
            theta: Some(self.theta(kind)),
            rho_domestic: Some(self.rho_domestic(kind)),
            rho_foreign: Some(self.rho_foreign(kind)),
            vanna: Some(self.vanna()),
            volga: Some(self.volga()),
            time_decay: Some(self.time_decay(kind)),
        }
    }
}

/// Vanilla European price.
#[inline]
pub fn price(params: &PricingParameters, kind: OptionKind) -> f64 {
    GarmanKohlhagen::new(params).price(kind)
}

/// Vanilla European Greek set.
pub fn greeks(params: &PricingParameters, kind: OptionKind) -> GreekSet {
    GarmanKohlhagen::new(params).greeks(kind)
}

/// Vanilla European price and Greeks from one evaluation.
pub fn price_and_greeks(params: &PricingParameters, kind: OptionKind) -> PricingResult {
    let model = GarmanKohlhagen::new(params);
    PricingResult::new(model.price(kind), model.greeks(kind))
}

/// Outright forward `S·e^{(r_d - r_f)T}`.
#[inline]
pub fn forward(params: &PricingParameters) -> f64 {
    params.forward()
}

/// Immediate-exercise value.
#[inline]
pub fn intrinsic(spot: f64, strike: f64, kind: OptionKind) -> f64 {
    kind.intrinsic(spot, strike)
}

/// Right-hand side of put-call parity, `C - P = S·D_f(T2) - K·D_d(T2)`.
pub fn parity_gap(params: &PricingParameters) -> f64 {
    let discount = DiscountFactors::settlement(params);
    params.spot * discount.foreign - params.strike * discount.domestic
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> PricingParameters {
        PricingParameters::new(1.10, 1.12, 1.0, 0.03, 0.01, 0.15).unwrap()
    }

    /// Central finite difference of `f` around `x`.
    fn central(f: impl Fn(f64) -> f64, x: f64, h: f64) -> f64 {
        (f(x + h) - f(x - h)) / (2.0 * h)
    }

    // ==========================================================
    // Price
    // ==========================================================

    #[test]
    fn test_price_reference_values() {
        // Reference values from an independent Garman-Kohlhagen evaluation.
        let p = params();
        let call = price(&p, OptionKind::Call);
        let put = price(&p, OptionKind::Put);
        assert_relative_eq!(call, 0.06612858719452941, epsilon = 1e-6);
        assert_relative_eq!(put, 0.06397276764477366, epsilon = 1e-6);
        assert_relative_eq!(call - put, parity_gap(&p), epsilon = 1e-12);
    }

    #[test]
    fn test_put_call_parity_with_settlement_tenor() {
        let p = params().with_settlement(1.02);
        let call = price(&p, OptionKind::Call);
        let put = price(&p, OptionKind::Put);
        let expected = p.spot * (-0.01_f64 * 1.02).exp() - p.strike * (-0.03_f64 * 1.02).exp();
        assert_relative_eq!(call - put, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_settlement_tenor_only_rescales_discounting() {
        let base = params();
        let delayed = base.with_settlement(1.5);
        let model_a = GarmanKohlhagen::new(&base);
        let model_b = GarmanKohlhagen::new(&delayed);
        assert_eq!(model_a.d1(), model_b.d1());
        assert!(price(&delayed, OptionKind::Call) < price(&base, OptionKind::Call));
    }

    #[test]
    fn test_degenerate_price_is_discounted_forward_intrinsic() {
        let p = PricingParameters::new(1.10, 1.00, 0.5, 0.03, 0.01, 0.0).unwrap();
        let call = price(&p, OptionKind::Call);
        let expected = 1.10 * (-0.01_f64 * 0.5).exp() - 1.00 * (-0.03_f64 * 0.5).exp();
        assert_relative_eq!(call, expected, epsilon = 1e-12);
        assert_eq!(price(&p, OptionKind::Put), 0.0);
    }

    #[test]
    fn test_expired_option_is_intrinsic() {
        let p = PricingParameters::new(1.10, 1.00, 0.0, 0.03, 0.01, 0.15).unwrap();
        assert_relative_eq!(price(&p, OptionKind::Call), 0.1, epsilon = 1e-12);
        assert_eq!(price(&p, OptionKind::Put), 0.0);
    }

    // ==========================================================
    // Greeks
    // ==========================================================

    #[test]
    fn test_delta_near_the_money_is_near_half() {
        // Regression: a negative-branch CDF of 1 - y pushed this delta to ~1.
        let p = PricingParameters::new(6.9487, 6.9387, 0.25, 0.0, 0.0, 0.1).unwrap();
        let delta = delta_of(&p, OptionKind::Call);
        assert!((delta - 0.5).abs() < 0.1, "delta = {}", delta);
        assert!((delta_of(&p, OptionKind::Put) + 0.5).abs() < 0.1);
    }

    fn delta_of(p: &PricingParameters, kind: OptionKind) -> f64 {
        GarmanKohlhagen::new(p).delta(kind)
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        let p = params();
        for kind in [OptionKind::Call, OptionKind::Put] {
            let fd = central(|s| price(&p.with_spot(s), kind), p.spot, 1e-5);
            assert_relative_eq!(delta_of(&p, kind), fd, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_gamma_and_vega_units() {
        let p = params();
        let model = GarmanKohlhagen::new(&p);

        let gamma_raw = central(|s| delta_of(&p.with_spot(s), OptionKind::Call), p.spot, 1e-5);
        assert_relative_eq!(model.gamma(), gamma_raw / 100.0, epsilon = 1e-7);

        let vega_raw = central(|v| price(&p.with_volatility(v), OptionKind::Call), p.volatility, 1e-6);
        assert_relative_eq!(model.vega(), vega_raw / 100.0, epsilon = 1e-7);
    }

    #[test]
    fn test_volga_built_from_scaled_vega() {
        let model = GarmanKohlhagen::new(&params());
        assert_relative_eq!(
            model.volga(),
            model.vega() * model.d1() * model.d2() / 0.15,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_vanna_formula() {
        let p = params().shifted(-0.7);
        let model = GarmanKohlhagen::new(&p);
        let df = (-p.rate_foreign * p.expiry).exp();
        let expected = -p.spot * df * p.expiry.sqrt() * norm_pdf(model.d1()) * (model.d2() / p.volatility)
            / 100.0;
        assert_relative_eq!(model.vanna(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_vanna_is_scaled_delta_vol_derivative() {
        // vanna = S·√T·∂Δ/∂σ / 100
        let p = params().shifted(-0.7);
        let model = GarmanKohlhagen::new(&p);
        for kind in [OptionKind::Call, OptionKind::Put] {
            let fd = central(|v| delta_of(&p.with_volatility(v), kind), p.volatility, 1e-6);
            let expected = p.spot * p.expiry.sqrt() * fd / 100.0;
            assert_relative_eq!(model.vanna(), expected, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_rho_matches_finite_difference() {
        let p = params().with_settlement(1.0);
        for kind in [OptionKind::Call, OptionKind::Put] {
            let model = GarmanKohlhagen::new(&p);
            let fd_d = central(
                |r| price(&p.with_rates(r, p.rate_foreign), kind),
                p.rate_domestic,
                1e-6,
            );
            let fd_f = central(
                |r| price(&p.with_rates(p.rate_domestic, r), kind),
                p.rate_foreign,
                1e-6,
            );
            assert_relative_eq!(model.rho_domestic(kind), fd_d, epsilon = 1e-5);
            assert_relative_eq!(model.rho_foreign(kind), fd_f, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_theta_close_to_time_decay() {
        let p = params();
        for kind in [OptionKind::Call, OptionKind::Put] {
            let model = GarmanKohlhagen::new(&p);
            assert_relative_eq!(model.theta(kind), model.time_decay(kind), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_degenerate_ratio_greeks_are_zero() {
        let p = PricingParameters::new(1.10, 1.00, 0.5, 0.03, 0.01, 0.0).unwrap();
        let g = greeks(&p, OptionKind::Call);
        assert_eq!(g.gamma, Some(0.0));
        assert_eq!(g.vega, Some(0.0));
        assert_eq!(g.vanna, Some(0.0));
        assert_eq!(g.volga, Some(0.0));
        assert!(g.theta.unwrap().is_finite());
        assert_relative_eq!(g.delta.unwrap(), (-0.01_f64 * 0.5).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_time_decay_floors_at_expiry() {
        let p = PricingParameters::new(1.10, 1.00, 0.0, 0.03, 0.01, 0.15).unwrap();
        let decay = GarmanKohlhagen::new(&p).time_decay(OptionKind::Call);
        assert!(decay.is_finite());
    }

    #[test]
    fn test_price_and_greeks_consistent() {
        let p = params();
        let result = price_and_greeks(&p, OptionKind::Put);
        assert_eq!(result.price, price(&p, OptionKind::Put));
        assert_eq!(result.greeks, greeks(&p, OptionKind::Put));
    }

    #[test]
    fn test_forward_and_intrinsic() {
        let p = params();
        assert_relative_eq!(forward(&p), 1.10 * 0.02_f64.exp(), epsilon = 1e-15);
        assert_eq!(intrinsic(1.0, 1.2, OptionKind::Put), 1.2 - 1.0);
    }
}
