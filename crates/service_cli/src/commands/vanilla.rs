//! Vanilla command: Garman-Kohlhagen price and Greeks.

use pricer_core::types::OptionKind;
use pricer_models::analytical::garman_kohlhagen;
use serde::Serialize;
use tracing::info;

use super::MarketArgs;
use crate::output::{emit, OutputFormat, Table};
use crate::Result;

#[derive(Serialize)]
struct VanillaReport {
    kind: OptionKind,
    forward: f64,
    #[serde(flatten)]
    result: pricer_core::types::PricingResult,
}

/// Run the vanilla command
pub fn run(market: &MarketArgs, kind: OptionKind, format: OutputFormat) -> Result<()> {
    let params = market.params()?;
    info!(%kind, "pricing vanilla");

    let report = VanillaReport {
        kind,
        forward: garman_kohlhagen::forward(&params),
        result: garman_kohlhagen::price_and_greeks(&params, kind),
    };

    emit(format, &report, || {
        let mut table = Table::new(format!("Vanilla {}", kind));
        table
            .number("Forward", report.forward)
            .number("Price", report.result.price)
            .greeks(&report.result.greeks);
        table
    })
}
