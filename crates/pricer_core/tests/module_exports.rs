//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute paths
//! and through the module-level re-exports.

/// Distribution functions are accessible via absolute path and re-export.
#[test]
fn test_distributions_module_exports() {
    use pricer_core::math::distributions::{norm_cdf, norm_pdf};

    assert_eq!(norm_cdf(0.0_f64), pricer_core::math::norm_cdf(0.0_f64));
    assert_eq!(norm_pdf(1.0_f64), pricer_core::math::norm_pdf(1.0_f64));
}

/// Discounting kernel is accessible via absolute path and re-export.
#[test]
fn test_discounting_module_exports() {
    use pricer_core::math::discounting::{d1_d2, discount_factor, DiscountFactors, MomentTerms};
    use pricer_core::types::PricingParameters;

    let params = PricingParameters::new(1.25, 1.30, 0.75, 0.02, 0.035, 0.11).unwrap();
    let moments = MomentTerms::from_params(&params);
    let (d1, d2) = d1_d2(1.25_f64, 1.30, 0.02, 0.035, 0.11, 0.75);

    assert_eq!((moments.d1, moments.d2), (d1, d2));
    assert_eq!(
        DiscountFactors::expiry(&params).domestic,
        discount_factor(0.02_f64, 0.75)
    );
    assert_eq!(pricer_core::math::discount_factor(0.02_f64, 0.75), discount_factor(0.02_f64, 0.75));
}

/// Types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::option::OptionKind;
    use pricer_core::types::params::{PricingParameters, ONE_DAY};
    use pricer_core::types::result::{ConfidenceInterval, GreekSet, PricingResult};

    let params = PricingParameters::new(1.0, 1.0, 1.0, 0.0, 0.0, 0.1).unwrap();
    assert_eq!(params.shifted(-ONE_DAY).expiry, 1.0 - ONE_DAY);
    assert_eq!(OptionKind::Call.intrinsic(1.1, 1.0), 1.1 - 1.0);

    let result = PricingResult::new(1.0, GreekSet::default());
    assert!(result.greeks.is_empty());

    let ci = ConfidenceInterval::normal_95(1.0, 0.0);
    assert_eq!(ci.width(), 0.0);

    let err: PricingError = params.with_volatility(-1.0).validate().unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput(_)));
}
