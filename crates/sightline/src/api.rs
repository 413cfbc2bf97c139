//! Curated API for the CLI and downstream scene code.
//!
//! Important
//! - Prefer these re-exports over reaching into submodules; internal module
//!   layout is free to change.

// Geometry kernel
pub use crate::geom::{
    angle_from_reference, distance, distance_point_to_segment, is_left, is_right, orientation,
    ray_hit, ray_intersects_segment, segments_intersect, Blocker, BlockerId, BlockerIds, Occluder,
    RayHit, Rect, Segment,
};
// Output polygon
pub use crate::polygon::VisPolygon;
// Random scenes
pub use crate::scene::{
    draw_blockers, BlockerCount, RandomSceneCfg, ReplayToken as SceneReplay, SceneError,
};
// Sweep
pub use crate::sweep::{
    compute_visibility, compute_visibility_many, compute_visibility_with, SweepCfg, SweepError,
    DEFAULT_FRAME,
};
