//! Monte Carlo kernel for arithmetic-average Asian options.
//!
//! Each path starts at the spot, which counts as the first fixing, and takes
//! `N` log-normal steps of `Δt = T/N` under the risk-neutral FX drift:
//!
//! ```text
//! ln S_{i+1} = ln S_i + (r_d - r_f - σ²/2)·Δt + σ·√Δt·Z_i
//! A = (S_0 + S_1 + ... + S_N) / (N + 1)
//! ```
//!
//! Paths are grouped in chunks of `chunk_size` samples. Chunk `c` draws from
//! stream `c` of the [`NormalSource`], the chunks run on the rayon pool, and
//! their accumulators are merged in chunk order.

use pricer_core::math::discounting::discount_factor;
use pricer_core::types::{ConfidenceInterval, OptionKind};
use pricer_models::instruments::AsianSpec;
use rayon::prelude::*;
use tracing::debug;

use super::config::{validate_observations, MonteCarloConfig};
use super::error::ConfigError;
use super::stats::SampleStats;
use crate::analytical::geometric_asian;
use crate::rng::{NormalGenerator, NormalSource};

/// Discounted Monte Carlo estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McEstimate {
    /// Discounted sample mean.
    pub price: f64,
    /// Discounted standard error of the mean.
    pub std_error: f64,
    /// 95% confidence interval.
    pub confidence_interval: ConfidenceInterval,
    /// Number of samples.
    pub num_paths: usize,
    /// Discounted sample mean of the geometric-average payoff.
    pub control_price: f64,
    /// Control-variate coefficient β, when applied.
    pub beta: Option<f64>,
}

/// Path constants shared by every chunk.
#[derive(Clone, Copy, Debug)]
struct PathModel {
    log_spot: f64,
    drift: f64,
    diffusion: f64,
    strike: f64,
    kind: OptionKind,
    fixings: f64,
}

impl PathModel {
    fn new(spec: &AsianSpec, kind: OptionKind) -> Self {
        let p = &spec.params;
        let dt = spec.time_step();
        Self {
            log_spot: p.spot.ln(),
            drift: (p.rate_domestic - p.rate_foreign - 0.5 * p.volatility * p.volatility) * dt,
            diffusion: p.volatility * dt.sqrt(),
            strike: p.strike,
            kind,
            fixings: (spec.observation_count + 1) as f64,
        }
    }

    /// Arithmetic and geometric payoffs of the path driven by `sign · z`.
    #[inline]
    fn payoffs(&self, z: &[f64], sign: f64) -> (f64, f64) {
        let mut log_s = self.log_spot;
        let mut sum = log_s.exp();
        let mut log_sum = log_s;
        for &zi in z {
            log_s += self.drift + self.diffusion * sign * zi;
            sum += log_s.exp();
            log_sum += log_s;
        }
        let arithmetic = sum / self.fixings;
        let geometric = (log_sum / self.fixings).exp();
        (
            self.kind.intrinsic(arithmetic, self.strike),
            self.kind.intrinsic(geometric, self.strike),
        )
    }
}

fn run_chunk<S: NormalSource>(
    model: &PathModel,
    source: &S,
    index: usize,
    samples: usize,
    steps: usize,
    antithetic: bool,
) -> SampleStats {
    let mut rng = source.stream(index as u64);
    let mut z = vec![0.0; steps];
    let mut stats = SampleStats::default();
    for _ in 0..samples {
        rng.fill_normal(&mut z);
        let (mut arithmetic, mut geometric) = model.payoffs(&z, 1.0);
        if antithetic {
            let (a, g) = model.payoffs(&z, -1.0);
            arithmetic = 0.5 * (arithmetic + a);
            geometric = 0.5 * (geometric + g);
        }
        stats.push(arithmetic, geometric);
    }
    stats
}

/// Estimates an arithmetic-average Asian option by simulation.
///
/// The geometric payoff of every path is accumulated alongside the
/// arithmetic one. With the control variate enabled, the estimator becomes
/// `mean(X) - β·(mean(Y) - E[Y])` with `β = Cov(X, Y)/Var(Y)` and `E[Y]`
/// from [`geometric_asian`] on the same fixing grid.
///
/// # Errors
///
/// Returns `ConfigError` if `config` is invalid or the fixing count exceeds
/// 10,000.
pub fn simulate_arithmetic_asian<S: NormalSource>(
    spec: &AsianSpec,
    kind: OptionKind,
    config: &MonteCarloConfig,
    source: &S,
) -> Result<McEstimate, ConfigError> {
    config.validate()?;
    validate_observations(spec.observation_count)?;

    let model = PathModel::new(spec, kind);
    let n_paths = config.n_paths();
    let chunk_size = config.chunk_size();
    let n_chunks = n_paths.div_ceil(chunk_size);
    let steps = spec.observation_count;

    debug!(
        n_paths,
        n_chunks,
        chunk_size,
        steps,
        antithetic = config.antithetic(),
        control_variate = config.control_variate(),
        "simulating arithmetic asian"
    );

    let chunks: Vec<SampleStats> = (0..n_chunks)
        .into_par_iter()
        .map(|c| {
            let samples = chunk_size.min(n_paths - c * chunk_size);
            run_chunk(&model, source, c, samples, steps, config.antithetic())
        })
        .collect();
    let stats = chunks
        .into_iter()
        .fold(SampleStats::default(), SampleStats::merge);

    let (estimate, variance, beta) = if config.control_variate() {
        let expected = geometric_asian(&spec.params, kind, spec.observation_count).expected_payoff;
        let var_y = stats.variance_y();
        let beta = if var_y > 0.0 {
            stats.covariance() / var_y
        } else {
            0.0
        };
        let estimate = stats.mean_x() - beta * (stats.mean_y() - expected);
        let variance = stats.variance_x() - 2.0 * beta * stats.covariance() + beta * beta * var_y;
        (estimate, variance.max(0.0), Some(beta))
    } else {
        (stats.mean_x(), stats.variance_x(), None)
    };

    let df = discount_factor(spec.params.rate_domestic, spec.params.expiry);
    let price = df * estimate;
    let std_error = df * (variance / n_paths as f64).sqrt();

    debug!(price, std_error, ?beta, "arithmetic asian estimate");

    Ok(McEstimate {
        price,
        std_error,
        confidence_interval: ConfidenceInterval::normal_95(price, std_error),
        num_paths: n_paths,
        control_price: df * stats.mean_y(),
        beta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededSource;
    use pricer_core::types::PricingParameters;
    use pricer_models::instruments::AverageType;

    fn spec(vol: f64) -> AsianSpec {
        let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, vol).unwrap();
        AsianSpec::new(params, AverageType::Arithmetic, 12).unwrap()
    }

    fn config(paths: usize) -> MonteCarloConfig {
        MonteCarloConfig::builder().n_paths(paths).chunk_size(256).build().unwrap()
    }

    struct ZeroSource;

    impl NormalGenerator for ZeroSource {
        fn next_normal(&mut self) -> f64 {
            0.0
        }
    }

    impl NormalSource for ZeroSource {
        type Generator = ZeroSource;
        fn stream(&self, _index: u64) -> ZeroSource {
            ZeroSource
        }
    }

    #[test]
    fn test_deterministic_generator_gives_drift_path() {
        let s = spec(0.2);
        let est = simulate_arithmetic_asian(&s, OptionKind::Call, &config(10), &ZeroSource).unwrap();

        let drift = (0.03 - 0.02) / 12.0;
        let average = (0..=12).map(|i| 100.0 * (drift * i as f64).exp()).sum::<f64>() / 13.0;
        let expected = (-0.05_f64).exp() * (average - 100.0);
        assert!((est.price - expected).abs() < 1e-10);
        assert_eq!(est.std_error, 0.0);
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let s = spec(0.2);
        let source = SeededSource::new(7);
        let a = simulate_arithmetic_asian(&s, OptionKind::Put, &config(2000), &source).unwrap();
        let b = simulate_arithmetic_asian(&s, OptionKind::Put, &config(2000), &source).unwrap();
        assert_eq!(a, b);
        assert!(a.confidence_interval.contains(a.price));
    }

    #[test]
    fn test_control_variate_shrinks_error() {
        let s = spec(0.2);
        let source = SeededSource::new(11);
        let plain = simulate_arithmetic_asian(&s, OptionKind::Call, &config(5000), &source).unwrap();
        let cv_config = MonteCarloConfig::builder()
            .n_paths(5000)
            .chunk_size(256)
            .control_variate(true)
            .build()
            .unwrap();
        let cv = simulate_arithmetic_asian(&s, OptionKind::Call, &cv_config, &source).unwrap();

        assert!(cv.std_error < 0.2 * plain.std_error);
        assert!(cv.beta.unwrap() > 0.5);
    }

    #[test]
    fn test_rejects_too_many_fixings() {
        let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.02, 0.2).unwrap();
        let s = AsianSpec::new(params, AverageType::Arithmetic, 10_001).unwrap();
        let err = simulate_arithmetic_asian(&s, OptionKind::Call, &config(10), &ZeroSource);
        assert_eq!(err, Err(ConfigError::InvalidObservationCount(10_001)));
    }
}
