//! The static set of planets that generate the gravitational field.

use crate::coords::{lat, lon};
use crate::error::PhysicsError;
use crate::linalg::Vec3;

/// An ordered sequence of unit Cartesian planet positions.
///
/// Every stored triple has magnitude 1 to working precision. Planets are
/// mutated only through [`Planets::set`] and [`Planets::pop`]; propagation
/// borrows a `Planets` reference immutably for its whole duration, so the
/// same universe can be shared across independently-propagating missiles,
/// including across threads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Planets {
    positions: Vec<Vec3>,
}

impl Planets {
    /// Creates a universe with capacity for `n` planets, each initially
    /// placed at the north pole `(0, 0, 1)`. Callers must [`set`](Self::set)
    /// every index before propagating missiles through this universe.
    pub fn new(n: usize) -> Self {
        Self {
            positions: vec![Vec3::Z; n],
        }
    }

    /// Sets the position of planet `i` from a `(lat, lon)` pair in radians.
    ///
    /// Returns [`PhysicsError::IndexOutOfRange`] if `i >= count()`, leaving
    /// the universe unchanged.
    pub fn set(&mut self, i: usize, phi: f64, lambda: f64) -> Result<(), PhysicsError> {
        let slot = self.positions.get_mut(i).ok_or(PhysicsError::IndexOutOfRange {
            index: i,
            count: self.positions.len(),
        })?;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        *slot = Vec3::new(cos_phi * sin_lambda, cos_phi * cos_lambda, sin_phi);
        Ok(())
    }

    /// Recovers the `(lat, lon)` pair of planet `i`, in radians.
    ///
    /// Returns [`PhysicsError::IndexOutOfRange`] if `i >= count()`.
    pub fn get(&self, i: usize) -> Result<(f64, f64), PhysicsError> {
        let p = self.positions.get(i).ok_or(PhysicsError::IndexOutOfRange {
            index: i,
            count: self.positions.len(),
        })?;
        Ok((lat(p.z), lon(p.x, p.y)))
    }

    /// Removes the last planet (the one with the largest index). Saturates
    /// at zero rather than invoking undefined behavior when called on an
    /// already-empty universe. Returns the remaining count.
    pub fn pop(&mut self) -> usize {
        self.positions.pop();
        self.positions.len()
    }

    /// Number of planets currently in this universe.
    #[inline]
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Raw unit Cartesian position of planet `i`. Used internally by the
    /// potential and launch geometry, which already validate `i` themselves.
    #[inline]
    pub(crate) fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    /// Iterator over the raw unit Cartesian positions, in index order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.iter().copied()
    }
}
