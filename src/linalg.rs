//! 3-vector dot product and magnitude.
//!
//! `Vec3` is an ordered triple of doubles with no invariants of its own; the
//! position/momentum constraints live on [`crate::integrator::PhaseState`],
//! not here.

/// Cartesian 3-vector. An alias, not a newtype: `glam::DVec3` already gives
/// position and velocity triples fast, well-tested arithmetic, so there is
/// no reason to hand-roll a struct here.
pub type Vec3 = glam::DVec3;

/// Dot product of `a` and `b`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

/// Euclidean magnitude of `v`.
#[inline]
pub fn mag(v: Vec3) -> f64 {
    v.length()
}
