//! Cross-engine Greek units: lattice Greeks of a European-exercise option
//! must agree with the Garman-Kohlhagen Greeks in the same units.

use pricer_core::types::{GreekSet, OptionKind, PricingParameters};
use pricer_models::analytical::garman_kohlhagen;
use pricer_models::instruments::{AmericanSpec, ExerciseStyle, TreeType};
use pricer_pricing::lattice::price_american;

// T = 73 days with Δt of 1/10 day; the one-day roll keeps an even step count.
fn params() -> PricingParameters {
    PricingParameters::new(100.0, 100.0, 73.0 / 365.0, 0.04, 0.01, 0.2).unwrap()
}

fn lattice_greeks(tree: TreeType, kind: OptionKind) -> GreekSet {
    let spec = AmericanSpec::new(params(), 730, tree)
        .unwrap()
        .with_exercise(ExerciseStyle::European);
    price_american(&spec, kind).greeks
}

fn close(lattice: Option<f64>, analytic: Option<f64>, tolerance: f64, name: &str) {
    let (l, a) = (lattice.unwrap(), analytic.unwrap());
    let rel = (l - a).abs() / a.abs();
    assert!(rel < tolerance, "{}: lattice {} analytic {} rel {}", name, l, a, rel);
}

#[test]
fn test_first_and_second_order_units() {
    for tree in [TreeType::Binomial, TreeType::Trinomial] {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let lattice = lattice_greeks(tree, kind);
            let analytic = garman_kohlhagen::greeks(&params(), kind);

            close(lattice.delta, analytic.delta, 0.02, "delta");
            close(lattice.gamma, analytic.gamma, 0.05, "gamma");
            close(lattice.vega, analytic.vega, 0.03, "vega");
        }
    }
}

#[test]
fn test_rate_sensitivities_per_unit() {
    for kind in [OptionKind::Call, OptionKind::Put] {
        let lattice = lattice_greeks(TreeType::Trinomial, kind);
        let analytic = garman_kohlhagen::greeks(&params(), kind);

        close(lattice.rho_domestic, analytic.rho_domestic, 0.08, "rho_domestic");
        close(lattice.rho_foreign, analytic.rho_foreign, 0.08, "rho_foreign");
    }
}

#[test]
fn test_theta_per_day() {
    for tree in [TreeType::Binomial, TreeType::Trinomial] {
        let lattice = lattice_greeks(tree, OptionKind::Call);
        let analytic = garman_kohlhagen::greeks(&params(), OptionKind::Call);

        close(lattice.theta, analytic.theta, 0.1, "theta");
        close(lattice.time_decay, analytic.time_decay, 0.1, "time_decay");
    }
}

#[test]
fn test_cross_vol_greeks_units() {
    for tree in [TreeType::Binomial, TreeType::Trinomial] {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let lattice = lattice_greeks(tree, kind);
            let analytic = garman_kohlhagen::greeks(&params(), kind);

            close(lattice.vanna, analytic.vanna, 0.05, "vanna");
            close(lattice.volga, analytic.volga, 0.1, "volga");
        }
    }
}
