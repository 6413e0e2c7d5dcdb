//! American Engine: backward induction on recombining lattices.
//!
//! Two lattice families share one driver:
//!
//! - [`TreeType::Binomial`]: Cox-Ross-Rubinstein
//! - [`TreeType::Trinomial`]: moment-matched, middle factor 1
//!
//! Both roll a single flat buffer back from expiry, applying
//! `max(intrinsic, hold)` at every interior node when early exercise is
//! allowed. Settlement is not modelled on the lattice: discounting uses the
//! domestic rate over the expiry tenor.
//!
//! # Early-exercise boundary
//!
//! For puts with American exercise, each backward slice contributes the
//! highest spot at which exercise beats holding. Points are emitted in
//! backward-induction order, nearest to expiry first. Slices where holding
//! dominates everywhere contribute nothing.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingParameters};
//! use pricer_models::instruments::{AmericanSpec, TreeType};
//! use pricer_pricing::lattice::price_american;
//!
//! let params = PricingParameters::new(100.0, 100.0, 0.25, 0.05, 0.02, 0.2).unwrap();
//! let spec = AmericanSpec::new(params, 200, TreeType::Binomial).unwrap();
//!
//! let result = price_american(&spec, OptionKind::Put);
//! assert!(result.price >= result.european_price - 1e-3);
//! assert!(result.boundary.is_some());
//! ```

mod binomial;
mod greeks;
mod trinomial;

use pricer_core::types::{GreekSet, OptionKind, PricingParameters};
use pricer_models::analytical::garman_kohlhagen;
use pricer_models::instruments::{AmericanSpec, ExerciseStyle, TreeType};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use greeks::{MAX_ROLLED_STEPS, SPOT_BUMP, VOL_BUMP};

/// One point of the early-exercise boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    /// Time to expiry of the slice, in years.
    pub time_to_expiry: f64,
    /// Highest spot at which immediate exercise beats holding.
    pub critical_spot: f64,
}

/// Result of an American lattice valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmericanResult {
    /// Lattice price.
    pub price: f64,
    /// Garman-Kohlhagen price of the European counterpart (`T2 = T`).
    pub european_price: f64,
    /// `price - european_price`.
    pub early_exercise_premium: f64,
    /// Numerical Greeks in the vanilla units.
    pub greeks: GreekSet,
    /// Early-exercise boundary, nearest to expiry first. `None` for calls
    /// and for European exercise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Vec<BoundaryPoint>>,
    /// Requested step count. The binomial lattice refines coarser requests
    /// whose carry would push `q` outside `[0, 1]`.
    pub steps: usize,
    /// Lattice family.
    pub tree_type: TreeType,
}

/// Inputs of one backward induction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LatticeRequest {
    pub params: PricingParameters,
    pub steps: usize,
    pub tree_type: TreeType,
    pub early_exercise: bool,
    pub track_boundary: bool,
}

impl LatticeRequest {
    fn from_spec(spec: &AmericanSpec) -> Self {
        Self {
            params: spec.params,
            steps: spec.steps,
            tree_type: spec.tree_type,
            early_exercise: spec.exercise.allows_early_exercise(),
            track_boundary: false,
        }
    }

    fn with_params(mut self, params: PricingParameters) -> Self {
        self.params = params;
        self
    }
}

/// Delta and raw gamma read off three adjacent lattice nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NodeGreeks {
    pub delta: f64,
    pub gamma: f64,
}

impl NodeGreeks {
    /// `spots` and `values` ordered from the lowest node upwards.
    pub(crate) fn from_slice(spots: [f64; 3], values: [f64; 3]) -> Self {
        let [s0, s1, s2] = spots;
        let [f0, f1, f2] = values;
        let delta = (f2 - f0) / (s2 - s0);
        let upper = (f2 - f1) / (s2 - s1);
        let lower = (f1 - f0) / (s1 - s0);
        Self {
            delta,
            gamma: (upper - lower) / (0.5 * (s2 - s0)),
        }
    }
}

/// Outcome of one backward induction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Induction {
    pub price: f64,
    /// `None` when the lattice collapses (`σ√T = 0`).
    pub nodes: Option<NodeGreeks>,
    pub boundary: Vec<BoundaryPoint>,
}

/// Prices an American (or European-exercise) option on the lattice of `spec`.
///
/// Greeks are numerical. Delta and gamma come from the nodes next to the
/// root; vega, vanna and volga from a one basis point vol bump; rho from a
/// 1% rate bump; theta from a one-day roll with the step count rescaled to
/// keep `Δt`. When `σ√T = 0` the lattice collapses to the forward path and
/// delta and gamma fall back to a relative spot bump of [`SPOT_BUMP`].
///
/// Inputs are assumed valid (see [`AmericanSpec::new`]).
pub fn price_american(spec: &AmericanSpec, kind: OptionKind) -> AmericanResult {
    let mut request = LatticeRequest::from_spec(spec);
    let wants_boundary = kind.is_put() && spec.exercise == ExerciseStyle::American;
    request.track_boundary = wants_boundary;

    let base = induct(&request, kind);
    let greeks = greeks::lattice_greeks(&request, kind, &base);

    let european_params = PricingParameters {
        settlement: None,
        ..spec.params
    };
    let european_price = garman_kohlhagen::price(&european_params, kind);

    debug!(
        tree = %spec.tree_type,
        steps = spec.steps,
        %kind,
        price = base.price,
        european_price,
        boundary_points = base.boundary.len(),
        "american lattice priced"
    );

    AmericanResult {
        price: base.price,
        european_price,
        early_exercise_premium: base.price - european_price,
        greeks,
        boundary: wants_boundary.then_some(base.boundary),
        steps: spec.steps,
        tree_type: spec.tree_type,
    }
}

/// Lattice price only, without Greeks or boundary.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, PricingParameters};
/// use pricer_models::instruments::{AmericanSpec, ExerciseStyle, TreeType};
/// use pricer_pricing::lattice::lattice_price;
///
/// let params = PricingParameters::new(1.10, 1.10, 0.5, 0.03, 0.01, 0.1).unwrap();
/// let spec = AmericanSpec::new(params, 100, TreeType::Trinomial).unwrap();
///
/// let american = lattice_price(&spec, OptionKind::Put);
/// let european = lattice_price(&spec.with_exercise(ExerciseStyle::European), OptionKind::Put);
/// assert!(american >= european);
/// ```
pub fn lattice_price(spec: &AmericanSpec, kind: OptionKind) -> f64 {
    induct(&LatticeRequest::from_spec(spec), kind).price
}

fn induct(request: &LatticeRequest, kind: OptionKind) -> Induction {
    let p = &request.params;
    if p.volatility * p.expiry.sqrt() == 0.0 {
        return forward_path(request, kind);
    }
    match request.tree_type {
        TreeType::Binomial => binomial::induct(request, kind),
        TreeType::Trinomial => trinomial::induct(request, kind),
    }
}

/// Degenerate lattice: a single node per slice on the forward path.
fn forward_path(request: &LatticeRequest, kind: OptionKind) -> Induction {
    let p = &request.params;
    if p.expiry == 0.0 {
        return Induction {
            price: kind.intrinsic(p.spot, p.strike),
            nodes: None,
            boundary: Vec::new(),
        };
    }

    let n = request.steps;
    let dt = p.expiry / n as f64;
    let growth = ((p.rate_domestic - p.rate_foreign) * dt).exp();
    let disc = (-p.rate_domestic * dt).exp();

    let mut value = kind.intrinsic(p.spot * growth.powi(n as i32), p.strike);
    let mut boundary = Vec::new();
    for i in (0..n).rev() {
        let hold = disc * value;
        value = hold;
        if request.early_exercise {
            let spot = p.spot * growth.powi(i as i32);
            let exercise = kind.intrinsic(spot, p.strike);
            if exercise > hold {
                value = exercise;
                if request.track_boundary {
                    boundary.push(BoundaryPoint {
                        time_to_expiry: p.expiry - i as f64 * dt,
                        critical_spot: spot,
                    });
                }
            }
        }
    }

    Induction {
        price: value,
        nodes: None,
        boundary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec(steps: usize, tree: TreeType) -> AmericanSpec {
        let params = PricingParameters::new(100.0, 100.0, 0.25, 0.05, 0.02, 0.2).unwrap();
        AmericanSpec::new(params, steps, tree).unwrap()
    }

    // ========================================
    // Node Greeks
    // ========================================

    #[test]
    fn test_node_greeks_exact_on_quadratic() {
        // f(s) = s² has delta 2s and gamma 2 for any three nodes.
        let spots = [0.9, 1.0, 1.2];
        let nodes = NodeGreeks::from_slice(spots, spots.map(|s| s * s));
        assert_relative_eq!(nodes.gamma, 2.0, epsilon = 1e-12);
        assert_relative_eq!(nodes.delta, 2.1, epsilon = 1e-12);
    }

    // ========================================
    // Induction
    // ========================================

    #[test]
    fn test_european_exercise_converges_to_closed_form() {
        for tree in [TreeType::Binomial, TreeType::Trinomial] {
            let s = spec(400, tree).with_exercise(ExerciseStyle::European);
            for kind in [OptionKind::Call, OptionKind::Put] {
                let closed = garman_kohlhagen::price(&s.params, kind);
                assert_relative_eq!(lattice_price(&s, kind), closed, max_relative = 5e-3);
            }
        }
    }

    #[test]
    fn test_american_put_at_least_european() {
        let s = spec(200, TreeType::Binomial);
        let result = price_american(&s, OptionKind::Put);
        assert!(result.price >= result.european_price - 1e-6);
        assert!(result.early_exercise_premium > 0.0);
    }

    #[test]
    fn test_boundary_only_for_american_puts() {
        let s = spec(100, TreeType::Trinomial);
        assert!(price_american(&s, OptionKind::Call).boundary.is_none());
        assert!(price_american(&s, OptionKind::Put).boundary.is_some());
        let european = s.with_exercise(ExerciseStyle::European);
        assert!(price_american(&european, OptionKind::Put).boundary.is_none());
    }

    #[test]
    fn test_boundary_nearest_expiry_first() {
        let s = spec(100, TreeType::Binomial);
        let boundary = price_american(&s, OptionKind::Put).boundary.unwrap();
        assert!(!boundary.is_empty());
        for pair in boundary.windows(2) {
            assert!(pair[0].time_to_expiry < pair[1].time_to_expiry);
        }
        for point in &boundary {
            assert!(point.critical_spot < 100.0);
            assert!(point.time_to_expiry > 0.0 && point.time_to_expiry <= 0.25);
        }
    }

    #[test]
    fn test_zero_volatility_uses_forward_path() {
        let params = PricingParameters::new(100.0, 110.0, 1.0, 0.05, 0.0, 0.0).unwrap();
        let s = AmericanSpec::new(params, 50, TreeType::Binomial).unwrap();
        let result = price_american(&s, OptionKind::Put);
        // Deep put with positive carry: exercise immediately.
        assert_relative_eq!(result.price, 10.0, epsilon = 1e-12);
        assert!(result.greeks.delta.unwrap().is_finite());
    }

    #[test]
    fn test_zero_expiry_is_intrinsic() {
        let params = PricingParameters::new(1.05, 1.10, 0.0, 0.03, 0.01, 0.1).unwrap();
        let s = AmericanSpec::new(params, 10, TreeType::Trinomial).unwrap();
        assert_relative_eq!(lattice_price(&s, OptionKind::Put), 0.05, epsilon = 1e-12);
        assert_eq!(lattice_price(&s, OptionKind::Call), 0.0);
    }

    #[test]
    fn test_minimum_step_lattice() {
        for tree in [TreeType::Binomial, TreeType::Trinomial] {
            let result = price_american(&spec(2, tree), OptionKind::Put);
            assert!(result.price > 0.0);
            assert!(result.greeks.delta.unwrap() < 0.0);
        }
    }
}
