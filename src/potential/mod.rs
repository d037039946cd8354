//! Gradient of the potential and the rim-distance sensor.
//!
//! Both models below share one evaluation strategy: walk the planets,
//! accumulate a scalar `s_i` per planet that depends only on `d = q . y_i`,
//! and form `sum(s_i * y_i)`. The two-dimensional and three-dimensional
//! models differ only in how `s_i` is computed from `d`, so [`Potential`]
//! factors that one step out as a trait and leaves the accumulation to a
//! shared free function.

mod three_d;
mod two_d;

pub use three_d::ThreeD;
pub use two_d::TwoD;

pub(crate) use three_d::{f3d, pot3d};

use crate::config::PotentialKind;
use crate::linalg::Vec3;
use crate::planets::Planets;

/// A gravitational potential model evaluated pointwise from the cosine
/// angular distance `d = q . y` to a single planet.
pub trait Potential {
    /// Per-planet contribution to the gradient, projected along `y`, given
    /// `d = q . y`.
    fn scalar(&self, d: f64) -> f64;
}

impl Potential for PotentialKind {
    #[inline]
    fn scalar(&self, d: f64) -> f64 {
        match self {
            PotentialKind::TwoD => TwoD.scalar(d),
            PotentialKind::ThreeD { n_pot } => ThreeD::new(*n_pot).scalar(d),
        }
    }
}

/// Overwrites `q` with `sum_i scalar(d_i) * y_i` and returns `max_i d_i`,
/// the cosine of the smallest angular distance to any planet (larger is
/// closer). Returns `-1.0` when `planets` is empty.
pub fn grad_v(potential: &impl Potential, q: &mut Vec3, planets: &Planets) -> f64 {
    let mut acc = Vec3::ZERO;
    let mut mdist = -1.0_f64;

    for y in planets.iter() {
        let d = q.dot(y);
        mdist = mdist.max(d);
        let s = potential.scalar(d);
        acc += s * y;
    }

    *q = acc;
    mdist
}

/// Cosine of the smallest angular distance from `q` to any planet. Returns
/// `-1.0` when `planets` is empty.
pub fn min_dist(q: Vec3, planets: &Planets) -> f64 {
    planets.iter().map(|y| q.dot(y)).fold(-1.0_f64, f64::max)
}
