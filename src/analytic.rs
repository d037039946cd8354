//! Closed-form and bracketed-extrapolation cross-checks for the integrator.

use crate::config::{Config, PotentialKind};
use crate::integrator::{composed_step, integration_loop, PhaseState};
use crate::linalg::Vec3;
use crate::planets::Planets;
use crate::potential::{f3d, pot3d};

/// Escape speed at a single planet's rim: the minimal tangential launch
/// speed that reaches angular distance `pi` in infinite time.
pub fn v_esc(config: &Config) -> f64 {
    let delta = config.min_dist;
    match config.potential {
        PotentialKind::TwoD => (-2.0 * (delta / 2.0).sin().ln()).sqrt(),
        PotentialKind::ThreeD { n_pot } => (2.0 * pot3d(delta, n_pot.max(1))).sqrt(),
    }
}

/// Speed of a circular orbit at fixed angular radius `r` from a single
/// planet.
pub fn v_scrcl(r: f64, config: &Config) -> f64 {
    match config.potential {
        PotentialKind::TwoD => ((1.0 + r.cos()) / r.cos().abs()).sqrt(),
        PotentialKind::ThreeD { n_pot } => {
            r.sin() * (-f3d(r - std::f64::consts::PI, n_pot.max(1)) / r.cos().abs()).sqrt()
        }
    }
}

/// Period of a radial ballistic shot launched tangentially from the rim of
/// a single planet at the origin, with speed `v` and composed-step size
/// `h`, expressed in units of propagate-call "ticks" (`int_steps` composed
/// steps each).
///
/// Builds a throwaway single-planet universe, then repeats composed steps
/// until the shot re-enters the rim, and extrapolates the fractional
/// sub-step via a local uniform-acceleration approximation. Returns `(t_int
/// + dt) / int_steps`, where `t_int` is the integer count of composed steps
/// taken and `0 < dt < 1`.
pub fn orb_period(v: f64, h: f64, config: &Config) -> f64 {
    let delta = config.min_dist;
    let (sin_delta, cos_delta) = delta.sin_cos();
    let threshold = cos_delta;

    let mut planets = Planets::new(1);
    planets.set(0, 0.0, 0.0).expect("index 0 is in range for a 1-planet universe");

    let mut qp_next = PhaseState::new(
        Vec3::new(0.0, cos_delta, sin_delta),
        Vec3::new(0.0, -v * sin_delta, v * cos_delta),
    );

    let mut qp_prev;
    let mut t = 0u64;
    loop {
        qp_prev = qp_next;
        let mdist = composed_step(
            &mut qp_next,
            h,
            config.composition,
            &config.potential,
            &planets,
        );
        t += 1;
        if mdist >= threshold {
            break;
        }
    }

    let s = qp_prev.q.y.acos() - delta;
    debug_assert!(s > 0.0);

    let a = qp_next.p.length() - qp_prev.p.length();
    debug_assert!(a > 0.0);

    let dt = (2.0 * s / a).sqrt();
    debug_assert!(dt.is_finite() && dt > 0.0 && dt < 1.0);

    (t as f64 + dt) / config.int_steps as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompositionScheme;
    use approx::assert_abs_diff_eq;

    fn two_d_config() -> Config {
        Config {
            trajectory_size: 8,
            int_steps: 4,
            min_dist: 0.05,
            potential: PotentialKind::TwoD,
            composition: CompositionScheme::P4S3,
        }
    }

    #[test]
    fn v_esc_two_d_matches_closed_form() {
        let config = two_d_config();
        let expected = (-2.0 * (config.min_dist / 2.0).sin().ln()).sqrt();
        assert_abs_diff_eq!(v_esc(&config), expected, epsilon = 1e-12);
    }

    #[test]
    fn v_scrcl_two_d_matches_closed_form() {
        let config = two_d_config();
        let r = 0.2;
        let expected = ((1.0 + r.cos()) / r.cos().abs()).sqrt();
        assert_abs_diff_eq!(v_scrcl(r, &config), expected, epsilon = 1e-12);
    }

    #[test]
    fn v_esc_is_positive_and_finite() {
        let config = two_d_config();
        let v = v_esc(&config);
        assert!(v.is_finite() && v > 0.0);
    }

    /// An antipodal radial shot at twice escape speed: the composed-step
    /// count at which [`integration_loop`] actually detects a rim crossing
    /// should land within one step of `orb_period`'s own prediction, since
    /// both trace the identical dynamics with the identical rim sensor --
    /// `orb_period` reports the step count in half-step-extrapolated units,
    /// so only the integer part is compared.
    #[test]
    fn orb_period_predicts_the_rim_crossing_step_within_one() {
        let config = Config {
            trajectory_size: 8,
            int_steps: 1,
            min_dist: 0.05,
            potential: PotentialKind::TwoD,
            composition: CompositionScheme::P4S3,
        };
        let h = 1e-3;
        let v = 2.0 * v_esc(&config);
        let n_pred = orb_period(v, h, &config).floor() as i64;

        let mut planets = Planets::new(1);
        planets.set(0, 0.0, 0.0).expect("index 0 is in range for a 1-planet universe");

        let (sin_delta, cos_delta) = config.min_dist.sin_cos();
        let mut qp = PhaseState::new(
            Vec3::new(0.0, cos_delta, sin_delta),
            Vec3::new(0.0, -v * sin_delta, v * cos_delta),
        );

        let budget = 5000;
        let remaining = integration_loop(
            &mut qp,
            h,
            budget,
            config.min_dist,
            config.composition,
            &config.potential,
            &planets,
        );
        assert!(remaining > 0, "expected a premature rim crossing within the step budget");
        let n2 = (budget - remaining) as i64;

        let diff = n2 - n_pred;
        assert!(diff == 0 || diff == 1, "n2={n2}, predicted={n_pred}, diff={diff}");
    }
}
