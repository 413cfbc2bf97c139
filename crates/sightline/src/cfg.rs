//! Tolerance and sampling constants for the sweep (internal).
//!
//! Policy
//! - These are fixed constants, not tuning knobs. Changing any of them changes
//!   which blocker corners end up as silhouette vertices.

/// Distance / determinant / angle-dedup epsilon shared by all predicates.
pub(crate) const EPS: f64 = 1e-9;
/// Angular offset (radians) for the rays cast just before and after a corner.
pub(crate) const ANGLE_OFFSET: f64 = 1e-5;
/// Step of the fallback angle grid, in degrees.
pub(crate) const FALLBACK_STEP_DEG: f64 = 0.5;
