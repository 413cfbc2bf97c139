//! Nearest-hit ray casting against blockers and the world frame.

use nalgebra::Vector2;

use crate::cfg::EPS;
use crate::geom::{ray_hit, Rect, Segment};

/// Closest point hit by the ray `origin + t·dir` (`dir` unit length).
///
/// Blockers are tested first, then the four frame edges. Hits closer than the
/// tolerance (the ray starting on a blocker) are ignored. On equal distance
/// the first candidate found is kept.
pub(crate) fn nearest_hit(
    origin: Vector2<f64>,
    dir: Vector2<f64>,
    segments: &[Segment],
    frame: &Rect,
) -> Option<Vector2<f64>> {
    let mut best: Option<(f64, Vector2<f64>)> = None;
    let closer = |best: Option<(f64, Vector2<f64>)>, t: f64| best.map_or(true, |(bt, _)| t < bt);

    for seg in segments {
        let Some(hit) = seg.ray_hit(origin, dir) else {
            continue;
        };
        let d2 = (hit.point - origin).norm_squared();
        if d2 > EPS {
            let t = d2.sqrt();
            if closer(best, t) {
                best = Some((t, hit.point));
            }
        }
    }

    for edge in frame.edges() {
        let Some(hit) = ray_hit(origin, dir, edge.a, edge.b) else {
            continue;
        };
        if hit.t > EPS && closer(best, hit.t) {
            best = Some((hit.t, hit.point));
        }
    }

    best.map(|(_, p)| p)
}
