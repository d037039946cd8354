//! Truncated-series potential for the three-dimensional model.
//!
//! The three-dimensional potential on the sphere has no closed form; both
//! auxiliary sums below accumulate their terms smallest-first, the order
//! that keeps the running sum's magnitude closest to each added term and so
//! loses the fewest low bits.

use std::f64::consts::PI;

use super::Potential;
use crate::coords::sinc;

/// Truncated series of `N = n_pot` terms, `N >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeD {
    n_pot: usize,
}

impl ThreeD {
    /// Builds a three-dimensional potential truncated at `n_pot` terms.
    ///
    /// `n_pot` is clamped to at least 1: a zero-term series has no defined
    /// value.
    pub fn new(n_pot: usize) -> Self {
        Self {
            n_pot: n_pot.max(1),
        }
    }

    /// Number of terms in the truncated series.
    #[inline]
    pub fn n_pot(&self) -> usize {
        self.n_pot
    }
}

impl Potential for ThreeD {
    #[inline]
    fn scalar(&self, d: f64) -> f64 {
        f3d(d.acos() - PI, self.n_pot)
    }
}

/// `pot3D(x) = (1 / 4*pi^2) * sum_{i=0}^{N-1} [ 1/(2*pi*i + x)
///   + 1/(2*pi*(i+1) - x) - 4/(2*pi*(2*i+1)) ]`
pub(crate) fn pot3d(x: f64, n_pot: usize) -> f64 {
    let mut acc = 0.0_f64;
    for i in (0..n_pot).rev() {
        let i = i as f64;
        acc += 1.0 / (2.0 * PI * i + x) + 1.0 / (2.0 * PI * (i + 1.0) - x)
            - 4.0 / (2.0 * PI * (2.0 * i + 1.0));
    }
    acc / (4.0 * PI * PI)
}

/// `f3D(x) = -(1/sinc(x)) * sum_{i=0}^{N-1} k / (pi^2 k^2 - x^2)^2`,
/// `k = 2*(N-1-i) + 1`.
pub(crate) fn f3d(x: f64, n_pot: usize) -> f64 {
    let mut acc = 0.0_f64;
    for i in 0..n_pot {
        let k = (2 * (n_pot - 1 - i) + 1) as f64;
        acc += k / (PI * PI * k * k - x * x).powi(2);
    }
    -acc / sinc(x)
}
