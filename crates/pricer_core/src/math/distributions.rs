//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both functions are generic over `T: Float` so the same primitives serve
//! `f64` pricing and `f32` experimentation.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Beyond this magnitude the CDF is reported as exactly 0 or 1.
const SATURATION: f64 = 6.0;

/// Abramowitz and Stegun 26.2.17 constants.
const P: f64 = 0.231_641_9;
const B1: f64 = 0.319_381_530;
const B2: f64 = -0.356_563_782;
const B3: f64 = 1.781_477_937;
const B4: f64 = -1.821_255_978;
const B5: f64 = 1.330_274_429;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) with the Abramowitz and Stegun
/// rational approximation (formula 26.2.17):
///
/// ```text
/// t = 1 / (1 + p|x|)
/// y = t (b1 + t (b2 + t (b3 + t (b4 + t b5))))
/// Φ(x) = 1 - φ(x) y   for x >= 0
/// Φ(x) =     φ(x) y   for x <  0
/// ```
///
/// The negative branch returns `φ(x)·y` directly rather than `1 - (1 - φ(x)·y)`;
/// the latter cancels catastrophically and pushes near-the-money deltas towards 1.
///
/// # Accuracy
/// Absolute error below 7.5e-8 on the whole real line. Saturates to exactly
/// `0` / `1` for `|x| >= 6`.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert_eq!(norm_cdf(7.0_f64), 1.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();
    let abs_x = x.abs();

    if abs_x >= T::from(SATURATION).unwrap() {
        return if x > zero { one } else { zero };
    }
    // The polynomial lands 2e-10 off 0.5 here; pin it so Φ(x) + Φ(-x) = 1 holds at 0.
    if x == zero {
        return T::from(0.5).unwrap();
    }

    let t = one / (one + T::from(P).unwrap() * abs_x);
    let poly = T::from(B1).unwrap()
        + t * (T::from(B2).unwrap()
            + t * (T::from(B3).unwrap() + t * (T::from(B4).unwrap() + t * T::from(B5).unwrap())));
    let tail = norm_pdf(abs_x) * t * poly;

    if x >= zero {
        one - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}
