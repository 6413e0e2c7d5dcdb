//! Cox-Ross-Rubinstein binomial lattice.
//!
//! ```text
//! Δt = T/n    u = e^(σ√Δt)    d = 1/u
//! q  = (e^((r_d - r_f)Δt) - d) / (u - d)
//! V  = max(intrinsic, e^(-r_d·Δt)·(q·V_up + (1 - q)·V_down))
//! ```
//!
//! Slice `i` holds `i + 1` nodes at spots `S·d^i·u^(2j)`, stored in one flat
//! buffer that is rolled back in place.
//!
//! `q` lies in `[0, 1]` only while `|r_d - r_f|·√Δt < σ`. Coarser requests
//! are refined to the smallest step count meeting that bound, up to
//! `MAX_REFINED_STEPS`; past the cap `q` is clamped.

use pricer_core::types::{OptionKind, PricingParameters};
use tracing::{debug, warn};

use super::{BoundaryPoint, Induction, LatticeRequest, NodeGreeks};

/// Slice whose three nodes give delta and gamma.
const GREEK_SLICE: usize = 2;

/// Largest step count the refinement may raise a request to.
pub(crate) const MAX_REFINED_STEPS: usize = 10_000;

/// Smallest step count, at least `steps`, with `|r_d - r_f|·√Δt < σ`.
pub(crate) fn stable_steps(params: &PricingParameters, steps: usize) -> usize {
    let carry = (params.rate_domestic - params.rate_foreign).abs();
    if carry == 0.0 {
        return steps;
    }
    let ratio = carry / params.volatility;
    let required = ((params.expiry * ratio * ratio).ceil() as usize).saturating_add(1);
    if required <= steps {
        return steps;
    }
    let refined = required.min(MAX_REFINED_STEPS).max(steps);
    debug!(steps, required, refined, "binomial steps refined to keep q in [0, 1]");
    refined
}

/// Risk-neutral up probability, clamped to `[0, 1]`.
pub(crate) fn up_probability(
    rate_domestic: f64,
    rate_foreign: f64,
    volatility: f64,
    dt: f64,
) -> f64 {
    let u = (volatility * dt.sqrt()).exp();
    let d = 1.0 / u;
    let q = (((rate_domestic - rate_foreign) * dt).exp() - d) / (u - d);
    let clamped = q.clamp(0.0, 1.0);
    if clamped != q {
        warn!(q, "binomial probability clamped");
    }
    clamped
}

pub(super) fn induct(request: &LatticeRequest, kind: OptionKind) -> Induction {
    let p = &request.params;
    let n = stable_steps(p, request.steps);
    let dt = p.expiry / n as f64;
    let u = (p.volatility * dt.sqrt()).exp();
    let d = 1.0 / u;
    let q = up_probability(p.rate_domestic, p.rate_foreign, p.volatility, dt);
    let disc = (-p.rate_domestic * dt).exp();
    let disc_up = disc * q;
    let disc_down = disc * (1.0 - q);

    debug!(steps = n, dt, u, d, q, "binomial lattice");

    let mut values = vec![0.0_f64; n + 1];
    {
        let mut spot = p.spot * d.powi(n as i32);
        let step = u * u;
        for value in values.iter_mut() {
            *value = kind.intrinsic(spot, p.strike);
            spot *= step;
        }
    }

    let mut boundary = Vec::new();
    let mut nodes = (n == GREEK_SLICE).then(|| {
        let spots = [p.spot * d * d, p.spot, p.spot * u * u];
        NodeGreeks::from_slice(spots, [values[0], values[1], values[2]])
    });

    for i in (0..n).rev() {
        let mut critical: Option<f64> = None;
        let mut spot = p.spot * d.powi(i as i32);
        for j in 0..=i {
            let hold = disc_up.mul_add(values[j + 1], disc_down * values[j]);
            values[j] = if request.early_exercise {
                let exercise = kind.intrinsic(spot, p.strike);
                if exercise > hold {
                    critical = Some(spot);
                    exercise
                } else {
                    hold
                }
            } else {
                hold
            };
            spot *= u * u;
        }

        if request.track_boundary {
            if let Some(critical_spot) = critical {
                boundary.push(BoundaryPoint {
                    time_to_expiry: p.expiry - i as f64 * dt,
                    critical_spot,
                });
            }
        }

        if i == GREEK_SLICE {
            let spots = [p.spot * d * d, p.spot, p.spot * u * u];
            nodes = Some(NodeGreeks::from_slice(spots, [values[0], values[1], values[2]]));
        }
    }

    Induction {
        price: values[0],
        nodes,
        boundary,
    }
}
