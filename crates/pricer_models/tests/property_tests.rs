//! Property-based tests for the closed-form engines.

use approx::assert_relative_eq;
use pricer_core::types::{OptionKind, PricingParameters};
use pricer_models::analytical::garman_kohlhagen::{self, parity_gap};
use pricer_models::analytical::price_digital;
use pricer_models::instruments::{DigitalSpec, PayoffCurrency};
use proptest::prelude::*;

prop_compose! {
    fn valid_params()(
        spot in 0.5..2.0_f64,
        strike in 0.5..2.0_f64,
        expiry in 0.0..3.0_f64,
        extra in 0.0..0.1_f64,
        rd in -0.02..0.10_f64,
        rf in -0.02..0.10_f64,
        vol in 0.0..0.5_f64,
    ) -> PricingParameters {
        PricingParameters::new(spot, strike, expiry, rd, rf, vol)
            .unwrap()
            .with_settlement(expiry + extra)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_cash_domestic_digital_parity(p in valid_params(), payout in 0.1..1000.0_f64) {
        let spec = DigitalSpec::cash_or_nothing(p, PayoffCurrency::Domestic, payout).unwrap();
        let sum = price_digital(&spec, OptionKind::Call) + price_digital(&spec, OptionKind::Put);
        let expected = payout * (-p.rate_domestic * p.discount_tenor()).exp();
        prop_assert!((sum - expected).abs() <= 1e-9 * payout.max(1.0));
    }

    #[test]
    fn test_vanilla_put_call_parity(p in valid_params()) {
        let call = garman_kohlhagen::price(&p, OptionKind::Call);
        let put = garman_kohlhagen::price(&p, OptionKind::Put);
        assert_relative_eq!(call - put, parity_gap(&p), epsilon = 1e-10);
    }

    #[test]
    fn test_vanilla_prices_non_negative(p in valid_params()) {
        prop_assert!(garman_kohlhagen::price(&p, OptionKind::Call) >= -1e-12);
        prop_assert!(garman_kohlhagen::price(&p, OptionKind::Put) >= -1e-12);
    }

    #[test]
    fn test_vanilla_greeks_finite(p in valid_params()) {
        let g = garman_kohlhagen::greeks(&p, OptionKind::Call);
        for value in [g.delta, g.gamma, g.vega, g.theta, g.rho_domestic, g.rho_foreign, g.vanna, g.volga, g.time_decay] {
            prop_assert!(value.unwrap().is_finite());
        }
    }

    #[test]
    fn test_call_delta_bounded_by_foreign_discount(p in valid_params()) {
        let delta = garman_kohlhagen::greeks(&p, OptionKind::Call).delta.unwrap();
        let df = (-p.rate_foreign * p.discount_tenor()).exp();
        prop_assert!(delta >= 0.0 && delta <= df + 1e-12);
    }
}
