//! The missile facade: initialization, rim launch, and stepwise propagation.

use crate::config::Config;
use crate::constants::MIN_DIRECTION_MAG_SQ;
use crate::coords::{e_lat, e_lon, lat, lon, vlat, vlon};
use crate::error::PhysicsError;
use crate::integrator::{integration_loop, PhaseState};
use crate::linalg::Vec3;
use crate::planets::Planets;

/// Lifecycle of a [`Missile`]: `Uninitialized` until [`Missile::init`] (or
/// [`Missile::launch`]) succeeds, then `Initialized` across propagate calls,
/// then `Terminated` once a propagate call enters a rim. Re-initialization
/// is the only way out of `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileState {
    Uninitialized,
    Initialized,
    Terminated,
}

/// A single missile's trajectory buffer and lifecycle state.
///
/// `trajectory` holds `config.trajectory_size` phase-space samples; slot
/// `K - 1` is always the most recently produced state and seeds the next
/// [`Missile::propagate`] call.
#[derive(Debug, Clone)]
pub struct Missile {
    config: Config,
    state: MissileState,
    trajectory: Vec<(Vec3, Vec3)>,
}

impl Missile {
    /// Builds an uninitialized missile bound to `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            config: *config,
            state: MissileState::Uninitialized,
            trajectory: Vec::new(),
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> MissileState {
        self.state
    }

    /// Phase-space samples written so far, oldest first, slot `K - 1` last.
    #[inline]
    pub fn trajectory(&self) -> &[(Vec3, Vec3)] {
        &self.trajectory
    }

    /// Places the missile at `(phi, lambda)` with speed `v` along direction
    /// `(dphi, dlambda)` (the latter pre-scaled so `dlambda` is
    /// `lambda_dot * cos(phi)`, matching [`crate::coords::vlon`]).
    ///
    /// Fails with [`PhysicsError::InvalidDirection`] when `(dphi, dlambda)`
    /// is (numerically) the zero vector; the missile is left unchanged.
    pub fn init(
        &mut self,
        phi: f64,
        lambda: f64,
        v: f64,
        dphi: f64,
        dlambda: f64,
    ) -> Result<(), PhysicsError> {
        let dir_mag_sq = dphi * dphi + dlambda * dlambda;
        if dir_mag_sq < MIN_DIRECTION_MAG_SQ {
            return Err(PhysicsError::InvalidDirection);
        }
        let dir_mag = dir_mag_sq.sqrt();

        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let q = Vec3::new(cos_phi * sin_lambda, cos_phi * cos_lambda, sin_phi);

        let direction = dphi * e_lat(phi, lambda) + dlambda * e_lon(lambda);
        let p = direction * (v / dir_mag);

        self.trajectory = vec![(q, p); self.config.trajectory_size.max(1)];
        self.state = MissileState::Initialized;
        Ok(())
    }

    /// Launches from the rim of planet `planet_id` at rim angle `psi`, with
    /// launch speed `v`.
    ///
    /// Fails with [`PhysicsError::IndexOutOfRange`] when `planet_id >=
    /// planets.count()`. Implements the rim geometry by rotating a
    /// canonical rim frame (built from `config.min_dist`) into the planet's
    /// local frame, then recovering the equivalent `(phi, lambda, dphi,
    /// dlambda)` launch and delegating to [`Missile::init`].
    pub fn launch(
        &mut self,
        planets: &Planets,
        planet_id: usize,
        v: f64,
        psi: f64,
    ) -> Result<(), PhysicsError> {
        let (phi_p, lambda_p) = planets.get(planet_id)?;
        let delta = self.config.min_dist;

        let (sin_delta, cos_delta) = delta.sin_cos();
        let (sin_psi, cos_psi) = psi.sin_cos();

        let x0 = Vec3::new(sin_delta * sin_psi, sin_delta * cos_psi, cos_delta);
        let v0 = Vec3::new(cos_delta * sin_psi, cos_delta * cos_psi, -sin_delta);

        let (sin_phi_p, cos_phi_p) = phi_p.sin_cos();
        let (sin_lambda_p, cos_lambda_p) = lambda_p.sin_cos();
        let r1 = Vec3::new(-cos_lambda_p, -sin_phi_p * sin_lambda_p, cos_phi_p * sin_lambda_p);
        let r2 = Vec3::new(sin_lambda_p, -sin_phi_p * cos_lambda_p, cos_phi_p * cos_lambda_p);
        let r3 = Vec3::new(0.0, cos_phi_p, sin_phi_p);

        let x = Vec3::new(r1.dot(x0), r2.dot(x0), r3.dot(x0));
        let v_world = Vec3::new(r1.dot(v0), r2.dot(v0), r3.dot(v0));

        let phi = lat(x.z);
        let lambda = lon(x.x, x.y);
        let dphi = vlat(v_world.x, v_world.y, v_world.z, phi, lambda);
        let dlambda = vlon(v_world.x, v_world.y, v_world.z, lambda);

        self.init(phi, lambda, v, dphi, dlambda)
    }

    /// Advances the missile by at most `trajectory_size` composed-step
    /// budgets, writing one new phase-space sample per budget that
    /// completes without entering a rim.
    ///
    /// Returns `(n_written, premature)`, where `premature` signals that a
    /// rim was entered before all slots were written; the missile then
    /// transitions to [`MissileState::Terminated`] and must be
    /// re-initialized before the next call. Fails with
    /// [`PhysicsError::Terminated`] if called before [`Missile::init`]/
    /// [`Missile::launch`] or after a prior premature stop.
    pub fn propagate(&mut self, planets: &Planets, h: f64) -> Result<(usize, bool), PhysicsError> {
        if self.state != MissileState::Initialized {
            return Err(PhysicsError::Terminated);
        }

        let last = *self.trajectory.last().expect("Initialized missile has a non-empty trajectory");
        let mut qp = PhaseState::new(last.0, last.1);

        let mut premature = false;
        let mut n_written = 0;

        for slot in self.trajectory.iter_mut() {
            let remaining = integration_loop(
                &mut qp,
                h,
                self.config.int_steps,
                self.config.min_dist,
                self.config.composition,
                &self.config.potential,
                planets,
            );
            if remaining != 0 {
                premature = true;
                break;
            }
            *slot = (qp.q, qp.p);
            n_written += 1;
        }

        if premature {
            self.state = MissileState::Terminated;
        }

        Ok((n_written, premature))
    }
}
