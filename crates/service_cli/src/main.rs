//! neutryx-fx - Command Line Pricing of FX Options
//!
//! This is the operational entry point for the FX option engines.
//!
//! # Commands
//!
//! - `neutryx-fx vanilla` - Garman-Kohlhagen price and Greeks
//! - `neutryx-fx digital` - Cash-or-nothing and asset-or-nothing digitals
//! - `neutryx-fx american` - Lattice price, Greeks and exercise boundary
//! - `neutryx-fx asian` - Monte Carlo or closed-form average-rate options
//! - `neutryx-fx risk-reversal` / `seagull` - Multi-leg combinations
//! - `neutryx-fx check` - Settings summary and engine self-checks
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate parses flags, merges them
//! with the layered settings, validates parameters and prints the result as
//! a table or JSON. Logs go to stderr so JSON output can be piped.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pricer_core::types::OptionKind;
use pricer_models::instruments::{
    AverageType, DigitalKind, ExerciseStyle, PayoffCurrency, TreeType,
};
use pricer_pricing::mc::MonteCarloConfig;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use crate::commands::american::LatticeOptions;
use crate::commands::combination::{RiskReversalArgs, SeagullArgs};
use crate::commands::MarketArgs;
use crate::config::{Settings, DEFAULT_CONFIG_FILE};
use crate::output::OutputFormat;

/// FX option pricing CLI
#[derive(Parser)]
#[command(name = "neutryx-fx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Output format (overrides the configured one)
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a vanilla option
    Vanilla {
        #[command(flatten)]
        market: MarketArgs,

        /// Option kind (call, put)
        #[arg(short, long, default_value = "call")]
        kind: OptionKind,
    },

    /// Price a digital option
    Digital {
        #[command(flatten)]
        market: MarketArgs,

        /// Option kind (call, put)
        #[arg(short, long, default_value = "call")]
        kind: OptionKind,

        /// Digital payoff (cash, asset)
        #[arg(long, default_value = "cash")]
        digital: DigitalKind,

        /// Currency of the cash payoff (domestic, foreign)
        #[arg(long, default_value = "domestic")]
        currency: PayoffCurrency,

        /// Cash payout amount
        #[arg(long, default_value_t = 1.0)]
        payout: f64,
    },

    /// Price an American option on a lattice
    American {
        #[command(flatten)]
        market: MarketArgs,

        /// Option kind (call, put)
        #[arg(short, long, default_value = "put")]
        kind: OptionKind,

        /// Lattice time steps
        #[arg(long)]
        steps: Option<usize>,

        /// Lattice family (binomial, trinomial)
        #[arg(long)]
        tree: Option<TreeType>,

        /// Disable early exercise
        #[arg(long)]
        european: bool,

        /// Print the early-exercise boundary
        #[arg(long)]
        boundary: bool,
    },

    /// Price an average-rate option
    Asian {
        #[command(flatten)]
        market: MarketArgs,

        /// Option kind (call, put)
        #[arg(short, long, default_value = "call")]
        kind: OptionKind,

        /// Averaging method (arithmetic, geometric)
        #[arg(long, default_value = "arithmetic")]
        average: AverageType,

        /// Number of fixings after the initial spot
        #[arg(long)]
        fixings: usize,

        /// Number of Monte Carlo paths
        #[arg(short = 'n', long)]
        num_paths: Option<usize>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Use antithetic variates
        #[arg(long)]
        antithetic: bool,

        /// Use the geometric-average control variate
        #[arg(long)]
        control_variate: bool,

        /// Paths per parallel chunk
        #[arg(long)]
        chunk_size: Option<usize>,
    },

    /// Price a risk reversal
    RiskReversal {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        legs: RiskReversalArgs,

        /// Show the per-leg breakdown
        #[arg(long)]
        with_legs: bool,
    },

    /// Price a seagull
    Seagull {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        legs: SeagullArgs,

        /// Show the per-leg breakdown
        #[arg(long)]
        with_legs: bool,
    },

    /// Check configuration and run engine self-checks
    Check,
}

fn init_tracing(settings: &Settings, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli, settings: Settings) -> Result<()> {
    let format = cli.output.unwrap_or(settings.output);

    match cli.command {
        Commands::Vanilla { market, kind } => commands::vanilla::run(&market, kind, format),
        Commands::Digital {
            market,
            kind,
            digital,
            currency,
            payout,
        } => commands::digital::run(&market, kind, digital, currency, payout, format),
        Commands::American {
            market,
            kind,
            steps,
            tree,
            european,
            boundary,
        } => {
            let options = LatticeOptions {
                steps: steps.unwrap_or(settings.lattice.steps),
                tree: tree.unwrap_or(settings.lattice.tree),
                exercise: if european {
                    ExerciseStyle::European
                } else {
                    ExerciseStyle::American
                },
                show_boundary: boundary,
            };
            commands::american::run(&market, kind, options, format)
        }
        Commands::Asian {
            market,
            kind,
            average,
            fixings,
            num_paths,
            seed,
            antithetic,
            control_variate,
            chunk_size,
        } => {
            let mc = &settings.monte_carlo;
            let config = MonteCarloConfig::builder()
                .n_paths(num_paths.unwrap_or(mc.paths))
                .chunk_size(chunk_size.unwrap_or(mc.chunk_size))
                .antithetic(antithetic || mc.antithetic)
                .control_variate(control_variate || mc.control_variate)
                .maybe_seed(seed.or(mc.seed))
                .build()?;
            commands::asian::run(&market, kind, average, fixings, &config, format)
        }
        Commands::RiskReversal {
            market,
            legs,
            with_legs,
        } => commands::combination::run_risk_reversal(&market, &legs, with_legs, format),
        Commands::Seagull {
            market,
            legs,
            with_legs,
        } => commands::combination::run_seagull(&market, &legs, with_legs, format),
        Commands::Check => commands::check::run(&settings, &cli.config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(&cli.config) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("neutryx-fx: {}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&settings, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match run(cli, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("neutryx-fx: {}", err);
            ExitCode::FAILURE
        }
    }
}
