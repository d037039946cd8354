//! The two symplectic half-flows that make up one Strang-split base step.

use crate::coords::sinc;
use crate::planets::Planets;
use crate::potential::{grad_v, Potential};

use super::state::PhaseState;

/// Exact free-geodesic flow on the sphere over time `h`: the solution of
/// `q_dot = p`, `p_dot = -||p||^2 q` restricted to `T*S^2`.
///
/// Uses `cos(phi) - 1 = -2 sin^2(phi/2)` to keep precision for small `phi`.
pub(crate) fn strang1(qp: &mut PhaseState, h: f64) {
    let p_sq = qp.p.dot(qp.p);
    let p_norm = p_sq.sqrt();
    let phi = p_norm * h;

    let half_sin = (phi * 0.5).sin();
    let cos_phi_minus_one = -2.0 * half_sin * half_sin;
    let sinc_phi = sinc(phi);

    let delta_q = qp.q * cos_phi_minus_one + qp.p * (h * sinc_phi);
    let delta_p = qp.p * cos_phi_minus_one - qp.q * (p_sq * h * sinc_phi);

    qp.add_compensated(delta_q, delta_p);
}

/// Exact potential-kick flow over time `h`: leaves `q` unchanged and moves
/// `p` by the tangential component of the force. Returns the cosine rim
/// distance `min_dist(q, planets)` measured during the gradient evaluation.
pub(crate) fn strang2(
    qp: &mut PhaseState,
    h: f64,
    potential: &impl Potential,
    planets: &Planets,
) -> f64 {
    let mut v = qp.q;
    let mdist = grad_v(potential, &mut v, planets);
    let q_dot_grad_v = qp.q.dot(v);

    let delta_p = (qp.q * q_dot_grad_v - v) * h;
    qp.add_compensated_p(delta_p);

    mdist
}
