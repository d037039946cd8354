//! # Sphaera -- symplectic sphere-missile physics engine
//!
//! A physics library for point-like missiles travelling on the surface of a
//! unit 2-sphere under a conservative gravitational field produced by a
//! configurable set of static planets.
//!
//! ## Quick Start
//!
//! ```rust
//! use sphaera::prelude::*;
//!
//! let mut planets = Planets::new(1);
//! planets.set(0, 0.0, 0.0).unwrap();
//!
//! let config = Config::default();
//! let mut missile = Missile::new(&config);
//! missile.launch(&planets, 0, v_esc(&config), 0.3).unwrap();
//!
//! let (written, premature) = missile.propagate(&planets, 1e-3).unwrap();
//! assert!(written > 0 || premature);
//! ```
//!
//! ## Architecture
//!
//! - [`linalg`] -- the `Vec3` alias and its two named operations (dot, mag)
//! - [`planets`] -- the static, unit-Cartesian planet set
//! - [`potential`] -- the 2D/3D potential models and the rim sensor
//! - [`integrator`] -- the Strang-split base step, symmetric composition, and integration loop
//! - [`missile`] -- the missile facade: launch geometry, trajectories, propagation
//! - [`analytic`] -- escape velocity, small-circle velocity, orbital period
//! - [`coords`] -- latitude/longitude conversions and the removable-singularity `sinc`
//! - [`config`] -- runtime configuration (potential kind, composition scheme, sizes)
//! - [`error`] -- the caller-visible error taxonomy

pub mod analytic;
pub mod config;
pub mod constants;
pub mod coords;
pub mod error;
pub mod integrator;
pub mod linalg;
pub mod missile;
pub mod planets;
pub mod potential;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::analytic::{orb_period, v_esc, v_scrcl};
    pub use crate::config::{CompositionScheme, Config, PotentialKind};
    pub use crate::coords::{lat, lon, vlat, vlon};
    pub use crate::error::PhysicsError;
    pub use crate::linalg::{dot, mag, Vec3};
    pub use crate::missile::{Missile, MissileState};
    pub use crate::planets::Planets;
}
