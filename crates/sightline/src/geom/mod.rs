//! Geometry kernel for the visibility sweep.
//!
//! Purpose
//! - Stateless, eps-aware predicates over `Vector2<f64>` points: distances,
//!   orientation, proper segment crossing, and ray/segment intersection.
//! - Segment and blocker types read by the sweep through `Occluder`.
//!
//! Conventions
//! - Orientation sign: positive ⇒ left of the directed line, negative ⇒ right.
//! - One tolerance everywhere (`cfg::EPS = 1e-9`).
//! - Collinear overlap is not a crossing for `segments_intersect`.
//!
//! Code cross-refs: `sweep::compute_visibility`, `polygon::VisPolygon`

mod kernel;
mod types;

pub(crate) use kernel::normalize_angle;
pub use kernel::{
    angle_from_reference, distance, distance_point_to_segment, is_left, is_right, orientation,
    ray_hit, ray_intersects_segment, segments_intersect, RayHit,
};
pub use types::{Blocker, BlockerId, BlockerIds, Occluder, Rect, Segment};
