//! Closed-form potential for the two-dimensional model.

use super::Potential;

/// Closed-form potential `s = -1 / (1 - d)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoD;

impl Potential for TwoD {
    #[inline]
    fn scalar(&self, d: f64) -> f64 {
        -1.0 / (1.0 - d)
    }
}
