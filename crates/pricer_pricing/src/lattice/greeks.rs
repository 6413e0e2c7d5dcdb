//! Bump-and-revalue Greeks for the lattice engines.
//!
//! Every bumped scenario is an independent backward induction, so the
//! scenarios run on the rayon pool. Units follow the vanilla engine, so vanna
//! is reported as `S·√T·∂Δ/∂σ / 100`.

use pricer_core::types::{GreekSet, OptionKind, ONE_DAY};
use rayon::prelude::*;
use tracing::{debug, trace};

use super::{induct, Induction, LatticeRequest};

/// Relative spot bump (0.001%) used when the lattice has no nodes to read.
pub const SPOT_BUMP: f64 = 1e-5;

/// Absolute volatility bump (1bp).
pub const VOL_BUMP: f64 = 1e-4;

/// Absolute rate bump (1%).
const RATE_BUMP: f64 = 0.01;

/// Price with delta and raw gamma.
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    price: f64,
    delta: f64,
    gamma: f64,
}

fn evaluate(request: &LatticeRequest, kind: OptionKind, induction: &Induction) -> Evaluation {
    if let Some(nodes) = induction.nodes {
        return Evaluation {
            price: induction.price,
            delta: nodes.delta,
            gamma: nodes.gamma,
        };
    }

    let spot = request.params.spot;
    let h = spot * SPOT_BUMP;
    let (up, down) = rayon::join(
        || value(&request.with_params(request.params.with_spot(spot + h)), kind),
        || value(&request.with_params(request.params.with_spot(spot - h)), kind),
    );
    Evaluation {
        price: induction.price,
        delta: (up - down) / (2.0 * h),
        gamma: (up - 2.0 * induction.price + down) / (h * h),
    }
}

fn value(request: &LatticeRequest, kind: OptionKind) -> f64 {
    induct(request, kind).price
}

fn full(request: &LatticeRequest, kind: OptionKind) -> Evaluation {
    evaluate(request, kind, &induct(request, kind))
}

/// Ceiling on the rolled step count, unless the request itself is larger.
pub const MAX_ROLLED_STEPS: usize = 2_000;

/// Step count keeping `Δt` when the expiry moves from `expiry` to `shifted`.
///
/// Capped at `max(steps, MAX_ROLLED_STEPS)`; near expiry a one-day roll would
/// otherwise multiply the step count by `(T + 1d) / T`.
pub(crate) fn rescaled_steps(steps: usize, expiry: f64, shifted: f64) -> usize {
    if expiry == 0.0 {
        return steps;
    }
    let keep_dt = ((steps as f64 * shifted / expiry).round() as usize).max(2);
    let cap = steps.max(MAX_ROLLED_STEPS);
    if keep_dt > cap {
        debug!(steps, keep_dt, cap, "rolled step count capped, time step not preserved");
        return cap;
    }
    keep_dt
}

fn rolled(request: &LatticeRequest, dt: f64) -> LatticeRequest {
    let params = request.params.shifted(dt);
    LatticeRequest {
        params,
        steps: rescaled_steps(request.steps, request.params.expiry, params.expiry),
        ..*request
    }
}

pub(super) fn lattice_greeks(
    request: &LatticeRequest,
    kind: OptionKind,
    base: &Induction,
) -> GreekSet {
    let request = LatticeRequest {
        track_boundary: false,
        ..*request
    };
    let p = request.params;
    let vol = p.volatility;
    let central = vol >= VOL_BUMP;
    let (vol_a, vol_b) = if central {
        (vol + VOL_BUMP, vol - VOL_BUMP)
    } else {
        (vol + VOL_BUMP, vol + 2.0 * VOL_BUMP)
    };

    let rate_scenarios = [
        request.with_params(p.with_rates(p.rate_domestic + RATE_BUMP, p.rate_foreign)),
        request.with_params(p.with_rates(p.rate_domestic, p.rate_foreign + RATE_BUMP)),
        rolled(&request, -ONE_DAY),
        rolled(&request, ONE_DAY),
    ];

    let ((centre, (eval_a, eval_b)), bumped) = rayon::join(
        || {
            rayon::join(
                || evaluate(&request, kind, base),
                || {
                    rayon::join(
                        || full(&request.with_params(p.with_volatility(vol_a)), kind),
                        || full(&request.with_params(p.with_volatility(vol_b)), kind),
                    )
                },
            )
        },
        || {
            rate_scenarios
                .par_iter()
                .map(|r| value(r, kind))
                .collect::<Vec<f64>>()
        },
    );
    let [rd_up, rf_up, earlier, later] = [bumped[0], bumped[1], bumped[2], bumped[3]];

    let h = VOL_BUMP;
    let (vega, volga, vanna) = if central {
        (
            (eval_a.price - eval_b.price) / (2.0 * h),
            (eval_a.price - 2.0 * centre.price + eval_b.price) / (h * h),
            (eval_a.delta - eval_b.delta) / (2.0 * h),
        )
    } else {
        (
            (eval_a.price - centre.price) / h,
            (eval_b.price - 2.0 * eval_a.price + centre.price) / (h * h),
            (eval_a.delta - centre.delta) / h,
        )
    };

    trace!(
        central,
        rd_up,
        rf_up,
        earlier,
        later,
        "lattice bump scenarios"
    );

    GreekSet {
        delta: Some(centre.delta),
        gamma: Some(centre.gamma / 100.0),
        vega: Some(vega / 100.0),
        theta: Some(earlier - centre.price),
        rho_domestic: Some((rd_up - centre.price) / RATE_BUMP),
        rho_foreign: Some((rf_up - centre.price) / RATE_BUMP),
        vanna: Some(p.spot * p.expiry.sqrt() * vanna / 100.0),
        volga: Some(volga / 100.0),
        time_decay: Some((earlier - later) / 2.0),
    }
}
