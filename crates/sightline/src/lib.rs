//! Visibility polygons among blocking segments (angular sweep).
//!
//! Layers, leaves first
//! - `geom`: stateless distance/orientation/intersection predicates and the
//!   segment/blocker types.
//! - `polygon`: the ordered vertex ring returned by the sweep, with
//!   containment, bounds, and overlap queries.
//! - `sweep`: point + blockers → visibility polygon, one query or many.
//! - `scene`: seeded random blocker sets for benches and tests.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI and by scene code outside this
//!   repository; `api` is the curated surface, everything else may move.

pub mod api;
mod cfg;
pub mod geom;
pub mod polygon;
pub mod scene;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Blocker, BlockerId, BlockerIds, Occluder, Rect, Segment};
pub use nalgebra::Vector2 as Vec2;
pub use polygon::VisPolygon;
pub use sweep::{compute_visibility, compute_visibility_many, compute_visibility_with, SweepCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        angle_from_reference, distance, distance_point_to_segment, orientation,
        ray_intersects_segment, segments_intersect, Blocker, BlockerId, BlockerIds, Occluder,
        Rect, Segment,
    };
    pub use crate::polygon::VisPolygon;
    pub use crate::sweep::{
        compute_visibility, compute_visibility_many, compute_visibility_with, SweepCfg,
        SweepError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
