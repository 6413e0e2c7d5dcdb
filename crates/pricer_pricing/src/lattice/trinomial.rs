//! Moment-matched trinomial lattice.
//!
//! ```text
//! Δt = T/n    u = e^(σ√(2Δt))    d = 1/u    m = 1
//! M = e^((r_d - r_f)Δt)           V = M²·(e^(σ²Δt) - 1)
//! p_u·u + p_m + p_d·d   = M
//! p_u·u² + p_m + p_d·d² = V + M²
//! p_u + p_m + p_d       = 1
//! ```
//!
//! Each probability is clamped to [0, 1] and the triple renormalised. Slice
//! `i` holds `2i + 1` nodes at spots `S·d^i·u^k`, rolled back in place.

use pricer_core::types::OptionKind;
use tracing::{debug, warn};

use super::{BoundaryPoint, Induction, LatticeRequest, NodeGreeks};

/// Branch probabilities `(p_u, p_m, p_d)`.
pub(crate) fn probabilities(
    rate_domestic: f64,
    rate_foreign: f64,
    volatility: f64,
    dt: f64,
) -> (f64, f64, f64) {
    let u = (volatility * (2.0 * dt).sqrt()).exp();
    let d = 1.0 / u;
    let m = ((rate_domestic - rate_foreign) * dt).exp();
    let variance = m * m * ((volatility * volatility * dt).exp() - 1.0);
    let a = m - 1.0;
    let b = variance + m * m - 1.0;

    let pu = (b - a * (d + 1.0)) / ((u - 1.0) * (u - d));
    let pd = (b - a * (u + 1.0)) / ((d - 1.0) * (d - u));
    let pm = 1.0 - pu - pd;

    let clamped = [pu, pm, pd].map(|x| x.clamp(0.0, 1.0));
    if clamped != [pu, pm, pd] {
        warn!(pu, pm, pd, "trinomial probabilities clamped");
    }
    let total: f64 = clamped.iter().sum();
    (clamped[0] / total, clamped[1] / total, clamped[2] / total)
}

pub(super) fn induct(request: &LatticeRequest, kind: OptionKind) -> Induction {
    let p = &request.params;
    let n = request.steps;
    let dt = p.expiry / n as f64;
    let u = (p.volatility * (2.0 * dt).sqrt()).exp();
    let d = 1.0 / u;
    let (pu, pm, pd) = probabilities(p.rate_domestic, p.rate_foreign, p.volatility, dt);
    let disc = (-p.rate_domestic * dt).exp();
    let (disc_pu, disc_pm, disc_pd) = (disc * pu, disc * pm, disc * pd);

    debug!(steps = n, dt, u, pu, pm, pd, "trinomial lattice");

    let mut values = vec![0.0_f64; 2 * n + 1];
    {
        let mut spot = p.spot * d.powi(n as i32);
        for value in values.iter_mut() {
            *value = kind.intrinsic(spot, p.strike);
            spot *= u;
        }
    }

    let mut boundary = Vec::new();
    let mut nodes = None;

    for i in (0..n).rev() {
        let mut critical: Option<f64> = None;
        let mut spot = p.spot * d.powi(i as i32);
        for k in 0..(2 * i + 1) {
            let hold = disc_pu.mul_add(
                values[k + 2],
                disc_pm.mul_add(values[k + 1], disc_pd * values[k]),
            );
            values[k] = if request.early_exercise {
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
            spot *= u;
        }

        if request.track_boundary {
            if let Some(critical_spot) = critical {
                boundary.push(BoundaryPoint {
                    time_to_expiry: p.expiry - i as f64 * dt,
                    critical_spot,
                });
            }
        }

        if i == 1 {
            let spots = [p.spot * d, p.spot, p.spot * u];
            nodes = Some(NodeGreeks::from_slice(spots, [values[0], values[1], values[2]]));
        }
    }

    Induction {
        price: values[0],
        nodes,
        boundary,
    }
}
