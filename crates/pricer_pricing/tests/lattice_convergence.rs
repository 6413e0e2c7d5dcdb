//! American Engine scenarios and convergence.

use approx::assert_relative_eq;
use pricer_core::types::{OptionKind, PricingParameters};
use pricer_models::analytical::garman_kohlhagen;
use pricer_models::instruments::{AmericanSpec, ExerciseStyle, TreeType};
use pricer_pricing::lattice::{lattice_price, price_american};

fn scenario() -> PricingParameters {
    PricingParameters::new(100.0, 100.0, 0.25, 0.05, 0.02, 0.2).unwrap()
}

// ============================================================================
// Early Exercise
// ============================================================================

#[test]
fn test_american_put_crr_200_at_least_european() {
    let spec = AmericanSpec::new(scenario(), 200, TreeType::Binomial).unwrap();
    let result = price_american(&spec, OptionKind::Put);
    let european = garman_kohlhagen::price(&scenario(), OptionKind::Put);

    assert_relative_eq!(result.european_price, european, epsilon = 1e-15);
    assert!(result.price >= european);
    assert_relative_eq!(
        result.early_exercise_premium,
        result.price - european,
        epsilon = 1e-15
    );
}

#[test]
fn test_call_without_foreign_carry_matches_european() {
    let params = scenario().with_rates(0.05, 0.0);
    for tree in [TreeType::Binomial, TreeType::Trinomial] {
        let spec = AmericanSpec::new(params, 200, tree).unwrap();
        let result = price_american(&spec, OptionKind::Call);

        let rel = (result.price - result.european_price).abs() / result.european_price;
        assert!(rel < 0.01, "{}: relative error {}", tree, rel);
        assert!(result.early_exercise_premium <= 1e-2);
        assert!(result.boundary.is_none());
    }
}

#[test]
fn test_european_exercise_switch_removes_premium() {
    for tree in [TreeType::Binomial, TreeType::Trinomial] {
        let spec = AmericanSpec::new(scenario(), 300, tree).unwrap();
        let american = lattice_price(&spec, OptionKind::Put);
        let european = lattice_price(&spec.with_exercise(ExerciseStyle::European), OptionKind::Put);
        assert!(american > european);
        assert_relative_eq!(
            european,
            garman_kohlhagen::price(&scenario(), OptionKind::Put),
            max_relative = 5e-3
        );
    }
}

// ============================================================================
// Boundary
// ============================================================================

#[test]
fn test_put_boundary_rises_towards_expiry() {
    let params = PricingParameters::new(100.0, 100.0, 1.0, 0.08, 0.0, 0.2).unwrap();
    let spec = AmericanSpec::new(params, 200, TreeType::Trinomial).unwrap();
    let boundary = price_american(&spec, OptionKind::Put).boundary.unwrap();

    assert!(boundary.len() > 100);
    let nearest = boundary.first().unwrap();
    let furthest = boundary.last().unwrap();
    assert!(nearest.time_to_expiry < furthest.time_to_expiry);
    assert!(nearest.critical_spot > furthest.critical_spot);
    assert!(nearest.critical_spot <= 100.0);
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_step_refinement_tightens() {
    for tree in [TreeType::Binomial, TreeType::Trinomial] {
        let price = |steps| {
            lattice_price(
                &AmericanSpec::new(scenario(), steps, tree).unwrap(),
                OptionKind::Put,
            )
        };
        let (p50, p200, p500) = (price(50), price(200), price(500));
        assert!(
            (p200 - p500).abs() <= (p50 - p200).abs() + 1e-3,
            "{}: {} {} {}",
            tree,
            p50,
            p200,
            p500
        );
    }
}

#[test]
fn test_trees_agree() {
    let binomial = lattice_price(
        &AmericanSpec::new(scenario(), 800, TreeType::Binomial).unwrap(),
        OptionKind::Put,
    );
    let trinomial = lattice_price(
        &AmericanSpec::new(scenario(), 800, TreeType::Trinomial).unwrap(),
        OptionKind::Put,
    );
    assert_relative_eq!(binomial, trinomial, max_relative = 2e-3);
}
