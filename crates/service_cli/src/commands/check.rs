//! Check command: settings summary and engine self-checks.
//!
//! Runs reference scenarios with known answers and reports each outcome.

use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::{OptionKind, PricingParameters};
use pricer_models::analytical::{garman_kohlhagen, price_digital};
use pricer_models::instruments::{AmericanSpec, DigitalSpec, PayoffCurrency, TreeType};
use pricer_pricing::lattice::price_american;
use tracing::{info, warn};

use crate::config::Settings;
use crate::output::Table;
use crate::{CliError, Result};

struct Check {
    name: &'static str,
    passed: bool,
    detail: String,
}

fn normal_cdf_midpoint() -> Check {
    let value = norm_cdf(0.0_f64);
    Check {
        name: "N(0) = 0.5",
        passed: value == 0.5,
        detail: format!("{}", value),
    }
}

fn digital_parity() -> Result<Check> {
    let params = PricingParameters::new(1.1, 1.0, 0.25, 0.05, 0.03, 0.1)?;
    let spec = DigitalSpec::cash_or_nothing(params, PayoffCurrency::Domestic, 1.0)?;
    let sum = price_digital(&spec, OptionKind::Call) + price_digital(&spec, OptionKind::Put);
    let expected = (-0.05_f64 * 0.25).exp();
    Ok(Check {
        name: "Digital call + put = D_d",
        passed: (sum - expected).abs() < 1e-9,
        detail: format!("{:.9} vs {:.9}", sum, expected),
    })
}

fn american_dominates_european() -> Result<Check> {
    let params = PricingParameters::new(100.0, 100.0, 0.25, 0.05, 0.02, 0.2)?;
    let spec = AmericanSpec::new(params, 200, TreeType::Binomial)?;
    let result = price_american(&spec, OptionKind::Put);
    Ok(Check {
        name: "American put >= European put",
        passed: result.price >= result.european_price,
        detail: format!("{:.6} vs {:.6}", result.price, result.european_price),
    })
}

fn near_money_delta() -> Result<Check> {
    let params = PricingParameters::new(6.9487, 6.9387, 0.25, 0.0, 0.0, 0.1)?;
    let delta = garman_kohlhagen::greeks(&params, OptionKind::Call)
        .delta
        .unwrap_or(f64::NAN);
    Ok(Check {
        name: "Near-money delta ~ 0.5",
        passed: (delta - 0.5).abs() < 0.1,
        detail: format!("{:.6}", delta),
    })
}

/// Run the check command
pub fn run(settings: &Settings, config_path: &str) -> Result<()> {
    info!("Checking configuration and engines...");

    let mut table = Table::new("neutryx-fx check");
    table
        .row("Config file", config_path)
        .row("Log level", &settings.log_level)
        .row("Output", format!("{:?}", settings.output))
        .row("Lattice", format!("{} x {}", settings.lattice.tree, settings.lattice.steps))
        .row("MC paths", settings.monte_carlo.paths)
        .row(
            "MC seed",
            settings
                .monte_carlo
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string()),
        )
        .row("MC antithetic", settings.monte_carlo.antithetic)
        .row("MC control variate", settings.monte_carlo.control_variate)
        .row("MC chunk size", settings.monte_carlo.chunk_size);

    let checks = vec![
        normal_cdf_midpoint(),
        digital_parity()?,
        american_dominates_european()?,
        near_money_delta()?,
    ];
    let total = checks.len();
    let mut failed = 0;
    for check in &checks {
        if !check.passed {
            warn!(check = check.name, detail = %check.detail, "check failed");
            failed += 1;
        }
        let status = if check.passed { "ok" } else { "FAILED" };
        table.row(check.name, format!("{} ({})", status, check.detail));
    }
    println!("{}", table.render());

    if failed > 0 {
        return Err(CliError::CheckFailed { failed, total });
    }
    info!("All {} checks passed", total);
    Ok(())
}
