//! Criterion benchmarks for the closed-form engines.
//!
//! Measures vanilla price, full vanilla Greek set, digital price and Greeks,
//! and seagull composition with leg breakdown.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricer_core::types::{OptionKind, PricingParameters};
use pricer_models::analytical::{greeks_digital, price, price_and_greeks};
use pricer_models::combinations::price_combination;
use pricer_models::instruments::{
    Combination, CombinationLeg, DigitalSpec, PayoffCurrency, Seagull,
};

fn params() -> PricingParameters {
    PricingParameters::new(1.10, 1.12, 0.5, 0.03, 0.01, 0.15)
        .unwrap()
        .with_settlement(0.505)
}

/// Benchmark the vanilla engine.
fn bench_vanilla(c: &mut Criterion) {
    let mut group = c.benchmark_group("vanilla");
    let p = params();

    group.bench_function("price", |b| {
        b.iter(|| price(black_box(&p), OptionKind::Call));
    });
    group.bench_function("price_and_greeks", |b| {
        b.iter(|| price_and_greeks(black_box(&p), OptionKind::Put));
    });

    group.finish();
}

/// Benchmark the digital engine across payoff variants.
fn bench_digital(c: &mut Criterion) {
    let mut group = c.benchmark_group("digital");
    let p = params();
    let specs = [
        ("cash_domestic", DigitalSpec::cash_or_nothing(p, PayoffCurrency::Domestic, 1.0).unwrap()),
        ("cash_foreign", DigitalSpec::cash_or_nothing(p, PayoffCurrency::Foreign, 1.0).unwrap()),
        ("asset", DigitalSpec::asset_or_nothing(p)),
    ];

    for (name, spec) in specs {
        group.bench_function(name, |b| {
            b.iter(|| greeks_digital(black_box(&spec), OptionKind::Call));
        });
    }

    group.finish();
}

/// Benchmark seagull composition with per-leg breakdown.
fn bench_combination(c: &mut Criterion) {
    let p = params();
    let seagull = Seagull::new(
        CombinationLeg::new(1.18, 0.14).unwrap(),
        CombinationLeg::new(1.08, 0.155).unwrap(),
        CombinationLeg::new(1.02, 0.17).unwrap(),
    )
    .unwrap();
    let structure = Combination::Seagull(seagull);

    c.bench_function("seagull_with_legs", |b| {
        b.iter(|| price_combination(black_box(&structure), black_box(&p), true).unwrap());
    });
}

criterion_group!(benches, bench_vanilla, bench_digital, bench_combination);
criterion_main!(benches);
