//! American command: lattice price, Greeks and exercise boundary.

use pricer_core::types::OptionKind;
use pricer_models::instruments::{AmericanSpec, ExerciseStyle, TreeType};
use pricer_pricing::lattice::{price_american, AmericanResult};
use tracing::info;

use super::MarketArgs;
use crate::output::{emit, OutputFormat, Table};
use crate::Result;

/// Lattice options resolved from flags and settings.
#[derive(Debug, Clone, Copy)]
pub struct LatticeOptions {
    pub steps: usize,
    pub tree: TreeType,
    pub exercise: ExerciseStyle,
    pub show_boundary: bool,
}

/// Run the american command
pub fn run(
    market: &MarketArgs,
    kind: OptionKind,
    options: LatticeOptions,
    format: OutputFormat,
) -> Result<()> {
    let params = market.params()?;
    let spec = AmericanSpec::new(params, options.steps, options.tree)?.with_exercise(options.exercise);
    info!(%kind, tree = %spec.tree_type, steps = spec.steps, exercise = %spec.exercise, "pricing on lattice");

    let result = price_american(&spec, kind);

    emit(format, &result, || table(&result, kind, options.show_boundary))
}

fn table(result: &AmericanResult, kind: OptionKind, show_boundary: bool) -> Table {
    let mut table = Table::new(format!("American {} ({}, {} steps)", kind, result.tree_type, result.steps));
    table
        .number("Price", result.price)
        .number("European price", result.european_price)
        .number("Early-exercise premium", result.early_exercise_premium)
        .greeks(&result.greeks);

    if show_boundary {
        if let Some(boundary) = &result.boundary {
            for point in boundary {
                table.number(format!("Boundary t={:.6}", point.time_to_expiry), point.critical_spot);
            }
        }
    }
    table
}
