//! Repeated composed steps, rim detection, and invariant restoration.

use crate::config::CompositionScheme;
use crate::planets::Planets;
use crate::potential::Potential;

use super::composition::composed_step;
use super::state::PhaseState;

/// Repeats the composed step at most `n` times, stopping early once the
/// missile enters a planet's rim (`min_dist >= cos(delta)`). On exit,
/// restores `||q|| = 1` and `q . p = 0` exactly, then returns the unused
/// step budget: a nonzero result signals premature termination.
pub(crate) fn integration_loop(
    qp: &mut PhaseState,
    h: f64,
    n: usize,
    delta: f64,
    scheme: CompositionScheme,
    potential: &impl Potential,
    planets: &Planets,
) -> usize {
    qp.reset_compensation();

    let threshold = delta.cos();
    let mut mdist = -1.0_f64;
    let mut remaining = n;

    while remaining > 0 && mdist < threshold {
        mdist = composed_step(qp, h, scheme, potential, planets);
        remaining -= 1;
    }
    debug_assert!(mdist.abs() <= 1.0 + 1e-9);

    qp.q /= qp.q.length();
    let q_dot_p = qp.q.dot(qp.p);
    qp.p -= q_dot_p * qp.q;

    remaining
}
