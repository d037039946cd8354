//! The caller-visible error taxonomy.
//!
//! `PrematureStop` and numeric-assertion failures are deliberately absent
//! from this enum: the former is expected control flow (see
//! [`crate::missile::Missile::propagate`]'s `premature` flag), the latter is
//! a `debug_assert!` that is fatal in debug builds and compiled out in
//! release, per the core's error handling design.

use thiserror::Error;

/// Errors returned by the public API of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PhysicsError {
    /// A planet index was `>= count()`. Covers `Planets::set`/`get` and
    /// `Missile::launch` alike -- both are the same "index out of range"
    /// condition reached from different call sites.
    #[error("planet index {index} out of range (count = {count})")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of planets actually present.
        count: usize,
    },

    /// `Missile::init` was called with a zero-length direction vector
    /// `(dphi, dlambda)`.
    #[error("direction vector has zero magnitude")]
    InvalidDirection,

    /// An operation was attempted on a missile in the `Terminated` state.
    /// Re-initialize (`init` or `launch`) before propagating again.
    #[error("missile has terminated; re-initialize before propagating")]
    Terminated,
}
