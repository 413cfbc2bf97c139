//! Angular sweep: visibility polygon of a point among blocking segments.
//!
//! Purpose
//! - Given a query point and a read-only set of blockers, emit the polygon of
//!   everything visible from that point, clipped to a fixed world frame.
//!
//! Algorithm
//! 1. No blockers: return the frame rectangle (4 vertices, counter-clockwise).
//! 2. Candidate angles: each blocker endpoint contributes the exact angle and
//!    its two `±δ` neighbours; a 0.5° grid covers the rest of the circle.
//! 3. Sort ascending, collapse neighbours closer than `EPS` and drop a tail
//!    angle that would wrap onto the first one.
//! 4. Per angle, cast a unit ray against every blocker and the frame edges and
//!    keep the nearest hit; hits are appended in angle order.
//!
//! Concurrency
//! - Each query is independent. Blockers are copied into a flat segment
//!   snapshot up front, so `compute_visibility_many` can fan queries out with
//!   rayon while the caller keeps the originals untouched.
//!
//! Code cross-refs: `geom::{ray_hit, angle_from_reference}`, `polygon::VisPolygon`

mod angles;
mod cast;
mod types;

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::geom::{Occluder, Segment};
use crate::polygon::VisPolygon;

pub use types::{SweepCfg, SweepError, DEFAULT_FRAME};

/// Visibility polygon of `origin` among `blockers`, inside the default frame.
pub fn compute_visibility<B: Occluder>(
    origin: Vector2<f64>,
    blockers: &[B],
) -> Result<VisPolygon, SweepError> {
    compute_visibility_with(origin, blockers, &SweepCfg::default())
}

/// Visibility polygon of `origin` among `blockers` for a given configuration.
pub fn compute_visibility_with<B: Occluder>(
    origin: Vector2<f64>,
    blockers: &[B],
    cfg: &SweepCfg,
) -> Result<VisPolygon, SweepError> {
    let segments = snapshot(blockers)?;
    sweep_segments(origin, &segments, cfg)
}

/// One visibility polygon per origin, computed in parallel.
///
/// Output order matches `origins`. The first allocation failure aborts the
/// batch; no partial results are returned.
pub fn compute_visibility_many<B: Occluder>(
    origins: &[Vector2<f64>],
    blockers: &[B],
    cfg: &SweepCfg,
) -> Result<Vec<VisPolygon>, SweepError> {
    let segments = snapshot(blockers)?;
    origins
        .par_iter()
        .map(|&origin| sweep_segments(origin, &segments, cfg))
        .collect()
}

fn snapshot<B: Occluder>(blockers: &[B]) -> Result<Vec<Segment>, SweepError> {
    let mut segments = Vec::new();
    segments.try_reserve_exact(blockers.len())?;
    segments.extend(blockers.iter().map(|b| b.segment()));
    Ok(segments)
}

fn sweep_segments(
    origin: Vector2<f64>,
    segments: &[Segment],
    cfg: &SweepCfg,
) -> Result<VisPolygon, SweepError> {
    if segments.is_empty() {
        let mut poly = VisPolygon::try_with_capacity(4)?;
        for corner in cfg.frame.corners() {
            poly.try_push(corner)?;
        }
        return Ok(poly);
    }

    let angles = angles::candidate_angles(origin, segments)?;
    let mut poly = VisPolygon::try_with_capacity(angles.len())?;
    for theta in angles {
        let dir = Vector2::new(theta.cos(), theta.sin());
        // a miss is only possible from outside the frame; no vertex then
        if let Some(p) = cast::nearest_hit(origin, dir, segments, &cfg.frame) {
            poly.try_push(p)?;
        }
    }
    Ok(poly)
}
