//! Digital command: cash-or-nothing and asset-or-nothing options.

use pricer_core::types::{OptionKind, PricingResult};
use pricer_models::analytical::price_and_greeks_digital;
use pricer_models::instruments::{DigitalKind, DigitalSpec, PayoffCurrency};
use serde::Serialize;
use tracing::info;

use super::MarketArgs;
use crate::output::{emit, OutputFormat, Table};
use crate::Result;

#[derive(Serialize)]
struct DigitalReport {
    kind: OptionKind,
    digital: DigitalKind,
    currency: PayoffCurrency,
    payout: f64,
    #[serde(flatten)]
    result: PricingResult,
}

/// Run the digital command
pub fn run(
    market: &MarketArgs,
    kind: OptionKind,
    digital: DigitalKind,
    currency: PayoffCurrency,
    payout: f64,
    format: OutputFormat,
) -> Result<()> {
    let params = market.params()?;
    let spec = match digital {
        DigitalKind::CashOrNothing => DigitalSpec::cash_or_nothing(params, currency, payout)?,
        DigitalKind::AssetOrNothing => DigitalSpec::asset_or_nothing(params),
    };
    info!(%kind, ?digital, currency = ?spec.currency, "pricing digital");

    let report = DigitalReport {
        kind,
        digital: spec.kind,
        currency: spec.currency,
        payout: spec.payout,
        result: price_and_greeks_digital(&spec, kind),
    };

    emit(format, &report, || {
        let mut table = Table::new(format!("Digital {:?} {}", report.digital, kind));
        table
            .row("Payoff currency", format!("{:?}", report.currency))
            .number("Payout", report.payout)
            .number("Price", report.result.price)
            .greeks(&report.result.greeks);
        table
    })
}
