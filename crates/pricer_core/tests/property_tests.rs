//! Property-based tests for the probability primitives and discounting kernel.

use approx::assert_relative_eq;
use pricer_core::math::{d1_d2, discount_factor, norm_cdf, norm_pdf};
use proptest::prelude::*;

fn argument_strategy() -> impl Strategy<Value = f64> {
    -8.0..8.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_norm_cdf_symmetry(x in argument_strategy()) {
        assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_in_unit_interval(x in argument_strategy()) {
        let p = norm_cdf(x);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_norm_cdf_non_decreasing(x in argument_strategy(), dx in 0.001..1.0_f64) {
        prop_assert!(norm_cdf(x + dx) >= norm_cdf(x));
    }

    #[test]
    fn test_norm_pdf_even_and_positive(x in argument_strategy()) {
        prop_assert!(norm_pdf(x) > 0.0);
        assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-15);
    }

    #[test]
    fn test_d1_minus_d2_is_total_vol(
        spot in 0.5..2.0_f64,
        strike in 0.5..2.0_f64,
        rd in -0.02..0.1_f64,
        rf in -0.02..0.1_f64,
        vol in 0.01..0.6_f64,
        expiry in 0.01..5.0_f64,
    ) {
        let (d1, d2) = d1_d2(spot, strike, rd, rf, vol, expiry);
        assert_relative_eq!(d1 - d2, vol * expiry.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_discount_factor_multiplicative(
        rate in -0.05..0.2_f64,
        t1 in 0.0..5.0_f64,
        t2 in 0.0..5.0_f64,
    ) {
        assert_relative_eq!(
            discount_factor(rate, t1) * discount_factor(rate, t2),
            discount_factor(rate, t1 + t2),
            max_relative = 1e-12
        );
    }
}
