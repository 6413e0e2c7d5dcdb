//! Layered CLI settings.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `neutryx-fx.toml` (or the `--config` path), optional
//! 3. `NEUTRYX_FX_*` environment variables, `__` separating nested keys
//!    (`NEUTRYX_FX_LATTICE__STEPS=400`)
//!
//! Command-line flags override the loaded settings per command.

use config::{Config, Environment, File};
use pricer_models::instruments::TreeType;
use serde::Deserialize;

use crate::output::OutputFormat;
use crate::Result;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "neutryx-fx.toml";

/// Lattice defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct LatticeSettings {
    /// Time steps.
    pub steps: usize,
    /// Tree family.
    pub tree: TreeType,
}

/// Monte Carlo defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct MonteCarloSettings {
    /// Sample count.
    pub paths: usize,
    /// Fixed seed; a fresh seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Antithetic variates.
    pub antithetic: bool,
    /// Geometric control variate.
    pub control_variate: bool,
    /// Samples per parallel chunk.
    pub chunk_size: usize,
}

/// Top-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Result format.
    pub output: OutputFormat,
    /// Lattice defaults.
    pub lattice: LatticeSettings,
    /// Monte Carlo defaults.
    pub monte_carlo: MonteCarloSettings,
}

impl Settings {
    /// Loads settings from defaults, `path` and the environment.
    pub fn load(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("log_level", "info")?
            .set_default("output", "table")?
            .set_default("lattice.steps", 200_i64)?
            .set_default("lattice.tree", "binomial")?
            .set_default("monte_carlo.paths", 10_000_i64)?
            .set_default("monte_carlo.antithetic", false)?
            .set_default("monte_carlo.control_variate", false)?
            .set_default("monte_carlo.chunk_size", 1024_i64)?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("NEUTRYX_FX")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load("does-not-exist.toml").unwrap();
        assert_eq!(settings.output, OutputFormat::Table);
        assert_eq!(settings.lattice.steps, 200);
        assert_eq!(settings.lattice.tree, TreeType::Binomial);
        assert_eq!(settings.monte_carlo.paths, 10_000);
        assert_eq!(settings.monte_carlo.chunk_size, 1024);
        assert_eq!(settings.monte_carlo.seed, None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("neutryx-fx-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            "output = \"json\"\n[lattice]\ntree = \"trinomial\"\n[monte_carlo]\nseed = 7\n",
        )
        .unwrap();

        let settings = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.lattice.tree, TreeType::Trinomial);
        assert_eq!(settings.lattice.steps, 200);
        assert_eq!(settings.monte_carlo.seed, Some(7));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
