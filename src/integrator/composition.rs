//! Symmetric composition of the base step into a higher-order integrator.

use crate::config::CompositionScheme;
use crate::planets::Planets;
use crate::potential::Potential;

use super::base_step::{strang1, strang2};
use super::state::PhaseState;

/// Advances `qp` by one composed step of total size `h`, using `scheme`'s
/// stage coefficients. Returns the rim distance measured during the last
/// kick stage.
pub(crate) fn composed_step(
    qp: &mut PhaseState,
    h: f64,
    scheme: CompositionScheme,
    potential: &impl Potential,
    planets: &Planets,
) -> f64 {
    let gamma = scheme.gammas();
    let n_stages = scheme.n_stages();
    let mut mdist = -1.0_f64;

    strang1(qp, gamma[0] * h / 2.0);
    for i in 0..n_stages {
        let g2 = gamma[i];
        let g1 = g2 + if i + 1 < n_stages { gamma[i + 1] } else { 0.0 };

        mdist = strang2(qp, g2 * h, potential, planets);
        strang1(qp, g1 * h / 2.0);
    }

    mdist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Vec3;
    use crate::potential::TwoD;
    use approx::assert_abs_diff_eq;

    fn single_planet() -> Planets {
        let mut planets = Planets::new(1);
        planets.set(0, 0.3, -0.2).unwrap();
        planets
    }

    #[test]
    fn composed_step_preserves_constraints_across_schemes() {
        let planets = single_planet();
        for scheme in [
            CompositionScheme::P2S1,
            CompositionScheme::P4S3,
            CompositionScheme::P4S5,
            CompositionScheme::P6S9,
            CompositionScheme::P8S15,
        ] {
            let mut qp = PhaseState::new(Vec3::Z, Vec3::X * 0.05);
            for _ in 0..20 {
                composed_step(&mut qp, 1e-3, scheme, &TwoD, &planets);
            }
            assert_abs_diff_eq!(qp.q.length(), 1.0, epsilon = 1e-8);
            assert_abs_diff_eq!(qp.q.dot(qp.p), 0.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn composed_step_reports_rim_distance() {
        let planets = single_planet();
        let mut qp = PhaseState::new(planets.position(0), Vec3::ZERO);
        let mdist = composed_step(&mut qp, 1e-4, CompositionScheme::P2S1, &TwoD, &planets);
        assert!(mdist > 0.999);
    }

    /// A low-order scheme at step `h` and a high-order scheme at step `4h`
    /// cover the same total elapsed time in fewer, coarser steps; their
    /// endpoints should still agree to several digits on a small circular
    /// orbit, demonstrating that accuracy tracks order rather than step
    /// count alone.
    #[test]
    fn composed_step_order_independence_on_small_circle() {
        use crate::analytic::v_scrcl;

        let mut planets = Planets::new(1);
        planets.set(0, 0.0, 0.0).unwrap();

        let r = 0.2_f64;
        let config = crate::config::Config {
            trajectory_size: 1,
            int_steps: 1,
            min_dist: 0.05,
            potential: crate::config::PotentialKind::TwoD,
            composition: CompositionScheme::P2S1,
        };
        let v = v_scrcl(r, &config);
        let q0 = Vec3::new(0.0, r.cos(), r.sin());
        let p0 = Vec3::new(v, 0.0, 0.0);

        let h = 1e-4;
        let mut qp_lo = PhaseState::new(q0, p0);
        for _ in 0..100 {
            composed_step(&mut qp_lo, h, CompositionScheme::P2S1, &TwoD, &planets);
        }

        let mut qp_hi = PhaseState::new(q0, p0);
        for _ in 0..25 {
            composed_step(&mut qp_hi, 4.0 * h, CompositionScheme::P8S15, &TwoD, &planets);
        }

        assert_abs_diff_eq!(qp_lo.q.x, qp_hi.q.x, epsilon = 1e-4);
        assert_abs_diff_eq!(qp_lo.q.y, qp_hi.q.y, epsilon = 1e-4);
        assert_abs_diff_eq!(qp_lo.q.z, qp_hi.q.z, epsilon = 1e-4);
    }
}
