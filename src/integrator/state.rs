//! Phase-space state and its Kahan error accumulator.

use crate::linalg::Vec3;

/// A point `(q, p)` in the cotangent bundle of the sphere, together with the
/// Kahan compensation accumulator carried across composed steps.
///
/// The accumulator mirrors `(q, p)` exactly in shape; it exists purely to
/// recover the low-order bits each floating-point addition below would
/// otherwise discard, and has no physical meaning of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    pub q: Vec3,
    pub p: Vec3,
    e_q: Vec3,
    e_p: Vec3,
}

impl PhaseState {
    /// Builds a state with a freshly zeroed Kahan accumulator.
    pub fn new(q: Vec3, p: Vec3) -> Self {
        Self {
            q,
            p,
            e_q: Vec3::ZERO,
            e_p: Vec3::ZERO,
        }
    }

    /// Resets the Kahan accumulator to zero without touching `q`/`p`. Called
    /// once at the top of each [`crate::integrator::integration_loop`] call.
    pub(crate) fn reset_compensation(&mut self) {
        self.e_q = Vec3::ZERO;
        self.e_p = Vec3::ZERO;
    }

    /// Applies `delta_q` and `delta_p` to `q` and `p` with Kahan
    /// compensation against the accumulator.
    pub(crate) fn add_compensated(&mut self, delta_q: Vec3, delta_p: Vec3) {
        let q2 = self.q + (delta_q + self.e_q);
        self.e_q = (delta_q + self.e_q) - (q2 - self.q);
        self.q = q2;

        let p2 = self.p + (delta_p + self.e_p);
        self.e_p = (delta_p + self.e_p) - (p2 - self.p);
        self.p = p2;
    }

    /// Applies `delta_p` to `p` alone with Kahan compensation, leaving `q`
    /// and the position accumulator untouched.
    pub(crate) fn add_compensated_p(&mut self, delta_p: Vec3) {
        let p2 = self.p + (delta_p + self.e_p);
        self.e_p = (delta_p + self.e_p) - (p2 - self.p);
        self.p = p2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn add_compensated_matches_naive_sum_for_well_scaled_deltas() {
        let mut state = PhaseState::new(Vec3::X, Vec3::Y);
        state.add_compensated(Vec3::new(0.1, 0.0, 0.0), Vec3::new(0.0, 0.1, 0.0));
        assert_abs_diff_eq!(state.q.x, 1.1, epsilon = 1e-12);
        assert_abs_diff_eq!(state.p.y, 1.1, epsilon = 1e-12);
    }

    #[test]
    fn reset_compensation_does_not_touch_q_or_p() {
        let mut state = PhaseState::new(Vec3::X, Vec3::Y);
        state.add_compensated(Vec3::splat(1e-20), Vec3::ZERO);
        let before = (state.q, state.p);
        state.reset_compensation();
        assert_eq!((state.q, state.p), before);
    }
}
