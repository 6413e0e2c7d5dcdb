//! Closed-form digital (binary) option engine.
//!
//! Three payoff variants, with `s = +1` for calls and `-1` for puts:
//!
//! ```text
//! cash-or-nothing, domestic payoff:  V = D·e^(-r_d·T2)·N(s·d2)
//! cash-or-nothing, foreign payoff:   V = D·S·e^(-r_f·T)·N(s·d1)
//! asset-or-nothing:                  V =   S·e^(-r_f·T)·N(s·d1)
//! ```
//!
//! Greeks follow the vanilla units. Cash-or-nothing digitals with a foreign
//! payoff report no gamma and no analytic theta.

use pricer_core::math::discounting::{DiscountFactors, MomentTerms};
use pricer_core::math::distributions::norm_pdf;
use pricer_core::types::params::ONE_DAY;
use pricer_core::types::{GreekSet, OptionKind, PricingParameters, PricingResult};

use crate::instruments::{DigitalKind, DigitalSpec, PayoffCurrency};

const DAYS_PER_YEAR: f64 = 365.0;
const PER_PERCENT: f64 = 100.0;

/// Digital option price in domestic currency.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, PricingParameters};
/// use pricer_models::analytical::digital::price_digital;
/// use pricer_models::instruments::{DigitalSpec, PayoffCurrency};
///
/// let params = PricingParameters::new(1.1, 1.0, 0.25, 0.05, 0.03, 0.1).unwrap();
/// let spec = DigitalSpec::cash_or_nothing(params, PayoffCurrency::Domestic, 1.0).unwrap();
///
/// let call = price_digital(&spec, OptionKind::Call);
/// let put = price_digital(&spec, OptionKind::Put);
/// assert!((call + put - (-0.05_f64 * 0.25).exp()).abs() < 1e-9);
/// ```
pub fn price_digital(spec: &DigitalSpec, kind: OptionKind) -> f64 {
    DigitalTerms::new(spec, kind).value
}

/// Digital option Greek set.
pub fn greeks_digital(spec: &DigitalSpec, kind: OptionKind) -> GreekSet {
    let terms = DigitalTerms::new(spec, kind);
    let mut greeks = match (spec.kind, spec.currency) {
        (DigitalKind::CashOrNothing, PayoffCurrency::Domestic) => terms.cash_domestic_greeks(),
        (DigitalKind::CashOrNothing, PayoffCurrency::Foreign) => terms.foreign_greeks(false),
        (DigitalKind::AssetOrNothing, _) => terms.foreign_greeks(true),
    };
    greeks.time_decay = Some(time_decay(spec, kind));
    greeks
}

/// Digital option price and Greeks.
pub fn price_and_greeks_digital(spec: &DigitalSpec, kind: OptionKind) -> PricingResult {
    PricingResult::new(price_digital(spec, kind), greeks_digital(spec, kind))
}

/// Central one-day bump of the price, both clocks moving together.
fn time_decay(spec: &DigitalSpec, kind: OptionKind) -> f64 {
    let earlier = price_digital(&spec.with_params(spec.params.shifted(-ONE_DAY)), kind);
    let later = price_digital(&spec.with_params(spec.params.shifted(ONE_DAY)), kind);
    (earlier - later) / 2.0
}

/// Shared intermediate values of one digital evaluation.
struct DigitalTerms {
    params: PricingParameters,
    moments: MomentTerms,
    sign: f64,
    /// Cash amount, 1 for asset-or-nothing.
    payout: f64,
    /// Discount factor applied to the payoff.
    discount: f64,
    /// Tenor of `discount`.
    tenor: f64,
    value: f64,
}

impl DigitalTerms {
    fn new(spec: &DigitalSpec, kind: OptionKind) -> Self {
        let params = spec.params;
        let moments = MomentTerms::from_params(&params);
        let sign = kind.sign();
        let (n1, n2) = moments.probabilities(sign);

        match (spec.kind, spec.currency) {
            (DigitalKind::CashOrNothing, PayoffCurrency::Domestic) => {
                let df = DiscountFactors::settlement(&params);
                Self {
                    params,
                    moments,
                    sign,
                    payout: spec.payout,
                    discount: df.domestic,
                    tenor: df.tenor,
                    value: spec.payout * df.domestic * n2,
                }
            }
            (digital, _) => {
                let payout = match digital {
                    DigitalKind::CashOrNothing => spec.payout,
                    DigitalKind::AssetOrNothing => 1.0,
                };
                let df = DiscountFactors::expiry(&params);
                Self {
                    params,
                    moments,
                    sign,
                    payout,
                    discount: df.foreign,
                    tenor: df.tenor,
                    value: payout * params.spot * df.foreign * n1,
                }
            }
        }
    }

    /// Greeks of `D·D_d(T2)·N(s·d2)`.
    fn cash_domestic_greeks(&self) -> GreekSet {
        let p = &self.params;
        let rd_value = p.rate_domestic * self.value;
        if self.moments.is_degenerate() {
            return GreekSet {
                delta: Some(0.0),
                gamma: Some(0.0),
                vega: Some(0.0),
                theta: Some(rd_value / DAYS_PER_YEAR),
                rho_domestic: Some(-self.tenor * self.value),
                rho_foreign: Some(0.0),
                ..Default::default()
            };
        }

        let (d1, d2) = (self.moments.d1, self.moments.d2);
        let (sigma, t) = (p.volatility, p.expiry);
        // s·D·D_d·φ(d2)
        let density = self.sign * self.payout * self.discount * norm_pdf(d2);
        let dd2_dt = (p.rate_domestic - p.rate_foreign - 0.5 * sigma * sigma)
            / self.moments.vol_sqrt_t
            - d2 / (2.0 * t);
        let dd_drate = self.moments.sqrt_t / sigma;

        GreekSet {
            delta: Some(density / (p.spot * self.moments.vol_sqrt_t)),
            gamma: Some(-density * d1 / (p.spot * p.spot * sigma * sigma * t) / PER_PERCENT),
            vega: Some(-density * d1 / sigma / PER_PERCENT),
            theta: Some((rd_value - density * dd2_dt) / DAYS_PER_YEAR),
            rho_domestic: Some(-self.tenor * self.value + density * dd_drate),
            rho_foreign: Some(-density * dd_drate),
            ..Default::default()
        }
    }

    /// Greeks of `D·S·D_f(T)·N(s·d1)`; gamma and theta only for asset-or-nothing.
    fn foreign_greeks(&self, asset: bool) -> GreekSet {
        let p = &self.params;
        let (n1, _) = self.moments.probabilities(self.sign);
        let rf_value = p.rate_foreign * self.value;

        if self.moments.is_degenerate() {
            return GreekSet {
                delta: Some(self.payout * self.discount * n1),
                gamma: asset.then_some(0.0),
                vega: Some(0.0),
                theta: asset.then_some(rf_value / DAYS_PER_YEAR),
                rho_domestic: Some(0.0),
                rho_foreign: Some(-self.tenor * self.value),
                ..Default::default()
            };
        }

        let (d1, d2) = (self.moments.d1, self.moments.d2);
        let (sigma, t) = (p.volatility, p.expiry);
        // s·D·D_f·φ(d1)
        let density = self.sign * self.payout * self.discount * norm_pdf(d1);
        let dd_drate = self.moments.sqrt_t / sigma;

        let gamma = asset.then(|| {
            -density * d2 / (p.spot * sigma * sigma * t) / PER_PERCENT
        });
        let theta = asset.then(|| {
            let dd1_dt = (p.rate_domestic - p.rate_foreign + 0.5 * sigma * sigma)
                / self.moments.vol_sqrt_t
                - d1 / (2.0 * t);
            (rf_value - p.spot * density * dd1_dt) / DAYS_PER_YEAR
        });

        GreekSet {
            delta: Some(self.payout * self.discount * n1 + density / self.moments.vol_sqrt_t),
            gamma,
            vega: Some(-p.spot * density * d2 / sigma / PER_PERCENT),
            theta,
            rho_domestic: Some(p.spot * density * dd_drate),
            rho_foreign: Some(-self.tenor * self.value - p.spot * density * dd_drate),
            ..Default::default()
        }
    }
}
