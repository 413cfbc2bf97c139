//! Candidate ray directions: corner triples plus a fixed fallback grid.

use std::collections::TryReserveError;
use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::cfg::{ANGLE_OFFSET, EPS, FALLBACK_STEP_DEG};
use crate::geom::{angle_from_reference, normalize_angle, Segment};

/// Number of rays in the fallback grid (one every `FALLBACK_STEP_DEG`).
pub(crate) fn grid_len() -> usize {
    (360.0 / FALLBACK_STEP_DEG).round() as usize
}

/// Sorted, deduplicated sweep angles in `[0, 2π)` for `origin`.
///
/// Each segment endpoint contributes `a - δ`, `a`, `a + δ`, so both sides of
/// every corner get a ray. Neighbours closer than `EPS` collapse to the first one,
/// and a tail angle within `EPS` of `first + 2π` is dropped so the sequence
/// wraps exactly once.
pub(crate) fn candidate_angles(
    origin: Vector2<f64>,
    segments: &[Segment],
) -> Result<Vec<f64>, TryReserveError> {
    let step = FALLBACK_STEP_DEG.to_radians();
    let n_grid = grid_len();
    let mut angles: Vec<f64> = Vec::new();
    angles.try_reserve(segments.len() * 6 + n_grid)?;

    for seg in segments {
        for end in [seg.a, seg.b] {
            let a = angle_from_reference(origin, end);
            angles.push(normalize_angle(a - ANGLE_OFFSET));
            angles.push(a);
            angles.push(normalize_angle(a + ANGLE_OFFSET));
        }
    }
    angles.extend((0..n_grid).map(|k| k as f64 * step));

    // non-finite coordinates produce NaN angles; those rays can never hit
    angles.retain(|a| a.is_finite());
    angles.sort_by(f64::total_cmp);
    angles.dedup_by(|cur, kept| (*cur - *kept).abs() <= EPS);
    if angles.len() > 1 {
        let first = angles[0];
        if angles.last().is_some_and(|&last| first + TAU - last <= EPS) {
            angles.pop();
        }
    }
    Ok(angles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::BlockerIds;
    use crate::scene::{draw_blockers, BlockerCount, RandomSceneCfg, ReplayToken};
    use nalgebra::vector;

    fn near(angles: &[f64], a: f64, tol: f64) -> usize {
        angles.iter().filter(|&&x| (x - a).abs() <= tol).count()
    }

    fn assert_well_formed(angles: &[f64]) {
        assert!(angles.iter().all(|a| (0.0..TAU).contains(a)));
        for w in angles.windows(2) {
            assert!(w[1] - w[0] > EPS, "gap too small: {} then {}", w[0], w[1]);
        }
        let (first, last) = (angles[0], angles[angles.len() - 1]);
        assert!(last < first + TAU - EPS);
    }

    #[test]
    fn shared_endpoint_gives_one_triple() {
        // (10, 3), (7, 20), (-5, 12) all sit well away from the half-degree grid
        let o = vector![0.0, 0.0];
        let segs = [
            Segment::from_coords(10.0, 3.0, 7.0, 20.0),
            Segment::from_coords(10.0, 3.0, -5.0, 12.0),
        ];
        let angles = candidate_angles(o, &segs).unwrap();
        assert_eq!(angles.len(), grid_len() + 9);
        let a = angle_from_reference(o, vector![10.0, 3.0]);
        assert_eq!(near(&angles, a, 2.0 * ANGLE_OFFSET), 3);
        assert_well_formed(&angles);
    }

    #[test]
    fn corner_at_zero_wraps_its_lower_ray() {
        let o = vector![0.0, 0.0];
        let segs = [Segment::from_coords(5.0, 0.0, 5.0, 7.0)];
        let angles = candidate_angles(o, &segs).unwrap();
        assert_eq!(angles[0], 0.0);
        let last = angles[angles.len() - 1];
        assert!((last - (TAU - ANGLE_OFFSET)).abs() < 1e-12);
        assert!((angles[1] - ANGLE_OFFSET).abs() < 1e-12);
        assert_well_formed(&angles);
    }

    #[test]
    fn tail_on_full_turn_is_dropped() {
        // the corner sits a hair below the +x axis, so it normalizes to just under 2π
        let o = vector![0.0, 0.0];
        let segs = [Segment::from_coords(1.0, -1e-12, 1.0, 5.0)];
        let angles = candidate_angles(o, &segs).unwrap();
        assert_eq!(angles[0], 0.0);
        assert!(angles.iter().all(|&a| TAU - a > EPS));
        assert_eq!(near(&angles, TAU - ANGLE_OFFSET, 1e-9), 1);
        assert_well_formed(&angles);
    }

    #[test]
    fn nan_segments_add_no_angles() {
        let o = vector![0.0, 0.0];
        let bad = Segment::from_coords(f64::NAN, 0.0, 3.0, f64::NAN);
        assert_eq!(candidate_angles(o, &[bad]).unwrap().len(), grid_len());
        let good = Segment::from_coords(10.0, 3.0, 7.0, 20.0);
        let mixed = candidate_angles(o, &[bad, good]).unwrap();
        assert_eq!(mixed, candidate_angles(o, &[good]).unwrap());
        assert_eq!(mixed.len(), grid_len() + 6);
    }

    #[test]
    fn random_scenes_give_strictly_ascending_angles() {
        let cfg = RandomSceneCfg {
            count: BlockerCount::Fixed(60),
            ..RandomSceneCfg::default()
        };
        for seed in 0..8 {
            let blockers =
                draw_blockers(&cfg, ReplayToken { seed, index: 0 }, &mut BlockerIds::default())
                    .unwrap();
            let segs: Vec<Segment> = blockers.iter().map(|b| b.segment()).collect();
            let angles = candidate_angles(vector![480.0, 330.0], &segs).unwrap();
            assert!(angles.len() >= grid_len());
            assert_well_formed(&angles);
        }
    }
}
