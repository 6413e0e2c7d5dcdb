//! Pricing result records.
//!
//! Provides [`GreekSet`], [`PricingResult`] and [`ConfidenceInterval`].
//!
//! # Greek units
//!
//! Every engine reports sensitivities in the same units so that results can be
//! combined across product families:
//!
//! - `delta`: per unit of spot
//! - `gamma`, `vega`, `vanna`: per 1% move (raw derivative divided by 100)
//! - `volga`: per 1% vol move, in vega units
//! - `theta`, `time_decay`: per calendar day
//! - `rho_domestic`, `rho_foreign`: per unit of rate (raw derivative)

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Sensitivity set of one priced instrument.
///
/// A Greek an engine does not compute is `None`. Summation keeps a Greek only
/// when both operands carry it.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::GreekSet;
///
/// let call = GreekSet { delta: Some(0.55), gamma: Some(0.04), ..Default::default() };
/// let put = GreekSet { delta: Some(-0.45), ..Default::default() };
///
/// let position = call + put.scaled(-1.0);
/// assert!((position.delta.unwrap() - 1.0).abs() < 1e-12);
/// assert_eq!(position.gamma, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GreekSet {
    /// ∂V/∂S.
    pub delta: Option<f64>,
    /// ∂²V/∂S², per 1%.
    pub gamma: Option<f64>,
    /// ∂V/∂σ, per 1%.
    pub vega: Option<f64>,
    /// Analytic ∂V/∂t, per day.
    pub theta: Option<f64>,
    /// ∂V/∂r_d, per unit rate.
    pub rho_domestic: Option<f64>,
    /// ∂V/∂r_f, per unit rate.
    pub rho_foreign: Option<f64>,
    /// ∂²V/∂S∂σ, per 1%.
    pub vanna: Option<f64>,
    /// ∂²V/∂σ², per 1%.
    pub volga: Option<f64>,
    /// Central-difference price change over one day.
    pub time_decay: Option<f64>,
}

impl GreekSet {
    /// Multiplies every present Greek by `coefficient`.
    pub fn scaled(&self, coefficient: f64) -> Self {
        let scale = |g: Option<f64>| g.map(|v| v * coefficient);
        Self {
            delta: scale(self.delta),
            gamma: scale(self.gamma),
            vega: scale(self.vega),
            theta: scale(self.theta),
            rho_domestic: scale(self.rho_domestic),
            rho_foreign: scale(self.rho_foreign),
            vanna: scale(self.vanna),
            volga: scale(self.volga),
            time_decay: scale(self.time_decay),
        }
    }

    /// Whether no Greek is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for GreekSet {
    type Output = GreekSet;

    fn add(self, rhs: GreekSet) -> GreekSet {
        fn both(a: Option<f64>, b: Option<f64>) -> Option<f64> {
            Some(a? + b?)
        }
        GreekSet {
            delta: both(self.delta, rhs.delta),
            gamma: both(self.gamma, rhs.gamma),
            vega: both(self.vega, rhs.vega),
            theta: both(self.theta, rhs.theta),
            rho_domestic: both(self.rho_domestic, rhs.rho_domestic),
            rho_foreign: both(self.rho_foreign, rhs.rho_foreign),
            vanna: both(self.vanna, rhs.vanna),
            volga: both(self.volga, rhs.volga),
            time_decay: both(self.time_decay, rhs.time_decay),
        }
    }
}

/// Price together with its sensitivities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Present value in domestic currency.
    pub price: f64,
    /// Sensitivities.
    pub greeks: GreekSet,
}

impl PricingResult {
    /// Creates a result.
    pub fn new(price: f64, greeks: GreekSet) -> Self {
        Self { price, greeks }
    }

    /// Multiplies price and Greeks by `coefficient`.
    pub fn scaled(&self, coefficient: f64) -> Self {
        Self {
            price: self.price * coefficient,
            greeks: self.greeks.scaled(coefficient),
        }
    }
}

impl Add for PricingResult {
    type Output = PricingResult;

    fn add(self, rhs: PricingResult) -> PricingResult {
        PricingResult {
            price: self.price + rhs.price,
            greeks: self.greeks + rhs.greeks,
        }
    }
}

/// Two-sided confidence interval around a Monte Carlo estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// z-score of the two-sided 95% interval.
    pub const Z_95: f64 = 1.96;

    /// 95% interval `estimate ± 1.96 · std_error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_core::types::ConfidenceInterval;
    ///
    /// let ci = ConfidenceInterval::normal_95(10.0, 0.1);
    /// assert!((ci.upper - 10.196).abs() < 1e-12);
    /// assert!(ci.contains(10.0));
    /// ```
    pub fn normal_95(estimate: f64, std_error: f64) -> Self {
        let half_width = Self::Z_95 * std_error;
        Self {
            lower: estimate - half_width,
            upper: estimate + half_width,
        }
    }

    /// Interval width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether `value` lies inside the closed interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full(value: f64) -> GreekSet {
        GreekSet {
            delta: Some(value),
            gamma: Some(value),
            vega: Some(value),
            theta: Some(value),
            rho_domestic: Some(value),
            rho_foreign: Some(value),
            vanna: Some(value),
            volga: Some(value),
            time_decay: Some(value),
        }
    }

    #[test]
    fn test_default_is_empty() {
        assert!(GreekSet::default().is_empty());
        assert!(!full(1.0).is_empty());
    }

    #[test]
    fn test_scaled_keeps_absent_greeks_absent() {
        let g = GreekSet {
            delta: Some(0.5),
            ..Default::default()
        };
        let s = g.scaled(-2.0);
        assert_eq!(s.delta, Some(-1.0));
        assert_eq!(s.gamma, None);
    }

    #[test]
    fn test_add_requires_both_operands() {
        let a = full(1.0);
        let mut b = full(2.0);
        b.theta = None;

        let sum = a + b;
        assert_eq!(sum.delta, Some(3.0));
        assert_eq!(sum.theta, None);
        assert_eq!(sum.time_decay, Some(3.0));
    }

    #[test]
    fn test_pricing_result_linear() {
        let a = PricingResult::new(1.5, full(1.0));
        let b = PricingResult::new(0.5, full(0.25));
        let spread = a + b.scaled(-1.0);
        assert_relative_eq!(spread.price, 1.0, epsilon = 1e-15);
        assert_relative_eq!(spread.greeks.vega.unwrap(), 0.75, epsilon = 1e-15);
    }

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::normal_95(2.0, 0.5);
        assert_relative_eq!(ci.lower, 1.02, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 2.98, epsilon = 1e-12);
        assert_relative_eq!(ci.width(), 1.96, epsilon = 1e-12);
        assert!(!ci.contains(3.0));
    }

    #[test]
    fn test_serde_round_trip() {
        let result = PricingResult::new(0.0123, full(0.1));
        let json = serde_json::to_string(&result).unwrap();
        let back: PricingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
