//! Asian command: Monte Carlo arithmetic or closed-form geometric average.

use pricer_core::types::OptionKind;
use pricer_models::instruments::{AsianSpec, AverageType};
use pricer_pricing::asian::price_asian_with;
use pricer_pricing::mc::MonteCarloConfig;
use pricer_pricing::rng::SeededSource;
use tracing::info;

use super::MarketArgs;
use crate::output::{emit, OutputFormat, Table};
use crate::Result;

/// Run the asian command
pub fn run(
    market: &MarketArgs,
    kind: OptionKind,
    average: AverageType,
    fixings: usize,
    config: &MonteCarloConfig,
    format: OutputFormat,
) -> Result<()> {
    let params = market.params()?;
    let spec = AsianSpec::new(params, average, fixings)?;
    let source = match config.seed() {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::from_entropy(),
    };
    info!(
        %kind,
        %average,
        fixings,
        paths = config.n_paths(),
        seed = source.seed(),
        "pricing asian"
    );

    let result = price_asian_with(&spec, kind, config, &source)?;

    emit(format, &result, || {
        let mut table = Table::new(format!("Asian {} {}", result.average_type, kind));
        table.number("Price", result.price).row("Fixings", fixings);
        if let Some(se) = result.std_error {
            table.number("Standard error", se);
        }
        if let Some(ci) = result.confidence_interval {
            table.number("95% CI lower", ci.lower).number("95% CI upper", ci.upper);
        }
        if let Some(paths) = result.num_paths {
            table.row("Paths", paths);
        }
        table
    })
}
