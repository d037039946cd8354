//! Numeric tolerances used throughout the engine.
//!
//! There are no physical constants to speak of here -- the engine works in
//! dimensionless units on a unit sphere, so there is no SI/geometric unit
//! split to carry: nothing in this domain is measured in kilograms or
//! meters.

/// Below this squared direction magnitude, `Missile::init` rejects the call
/// with [`crate::error::PhysicsError::InvalidDirection`].
pub const MIN_DIRECTION_MAG_SQ: f64 = 1e-30;
