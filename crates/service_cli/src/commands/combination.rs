//! Risk-reversal and seagull commands.

use clap::Args;
use pricer_models::combinations::{price_combination, CombinationResult};
use pricer_models::instruments::{Combination, CombinationLeg, Direction, RiskReversal, Seagull};
use tracing::info;

use super::MarketArgs;
use crate::output::{emit, OutputFormat, Table};
use crate::Result;

/// Risk-reversal legs.
#[derive(Debug, Clone, Args)]
pub struct RiskReversalArgs {
    /// Long (long call, short put) or short
    #[arg(long, default_value = "long")]
    pub direction: Direction,

    /// Call-leg strike
    #[arg(long)]
    pub call_strike: f64,

    /// Call-leg volatility (defaults to --vol)
    #[arg(long)]
    pub call_vol: Option<f64>,

    /// Put-leg strike
    #[arg(long)]
    pub put_strike: f64,

    /// Put-leg volatility (defaults to --vol)
    #[arg(long)]
    pub put_vol: Option<f64>,
}

/// Seagull legs.
#[derive(Debug, Clone, Args)]
pub struct SeagullArgs {
    /// Long (long call, two short puts) or short
    #[arg(long, default_value = "long")]
    pub direction: Direction,

    /// Call-leg strike
    #[arg(long)]
    pub call_strike: f64,

    /// Call-leg volatility (defaults to --vol)
    #[arg(long)]
    pub call_vol: Option<f64>,

    /// Upper put strike
    #[arg(long)]
    pub put_mid_strike: f64,

    /// Upper put volatility (defaults to --vol)
    #[arg(long)]
    pub put_mid_vol: Option<f64>,

    /// Lower put strike
    #[arg(long)]
    pub put_low_strike: f64,

    /// Lower put volatility (defaults to --vol)
    #[arg(long)]
    pub put_low_vol: Option<f64>,
}

fn leg(strike: f64, vol: Option<f64>, market: &MarketArgs) -> Result<CombinationLeg> {
    Ok(CombinationLeg::new(strike, vol.unwrap_or(market.vol))?)
}

/// Run the risk-reversal command
pub fn run_risk_reversal(
    market: &MarketArgs,
    args: &RiskReversalArgs,
    with_legs: bool,
    format: OutputFormat,
) -> Result<()> {
    let rr = RiskReversal::new(
        args.direction,
        leg(args.call_strike, args.call_vol, market)?,
        leg(args.put_strike, args.put_vol, market)?,
    );
    run(market, Combination::RiskReversal(rr), args.call_strike, with_legs, format)
}

/// Run the seagull command
pub fn run_seagull(
    market: &MarketArgs,
    args: &SeagullArgs,
    with_legs: bool,
    format: OutputFormat,
) -> Result<()> {
    let seagull = Seagull::new(
        leg(args.call_strike, args.call_vol, market)?,
        leg(args.put_mid_strike, args.put_mid_vol, market)?,
        leg(args.put_low_strike, args.put_low_vol, market)?,
    )?
    .with_direction(args.direction);
    run(market, Combination::Seagull(seagull), args.call_strike, with_legs, format)
}

fn run(
    market: &MarketArgs,
    combination: Combination,
    call_strike: f64,
    with_legs: bool,
    format: OutputFormat,
) -> Result<()> {
    let shared = market.params_with_strike(call_strike)?;
    info!(structure = combination.name(), with_legs, "pricing combination");

    let result = price_combination(&combination, &shared, with_legs)?;
    emit(format, &result, || table(combination.name(), &result))
}

fn table(name: &str, result: &CombinationResult) -> Table {
    let mut table = Table::new(name);
    table.number("Net price", result.price).greeks(&result.greeks);
    if let Some(legs) = &result.legs {
        for leg in legs {
            table
                .number(format!("{} price", leg.label), leg.price)
                .number(format!("{} delta", leg.label), leg.greeks.delta.unwrap_or(f64::NAN))
                .number(format!("{} vega", leg.label), leg.greeks.vega.unwrap_or(f64::NAN));
        }
    }
    table
}
