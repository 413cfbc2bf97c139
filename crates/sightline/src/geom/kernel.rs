//! Stateless 2D predicates: distances, orientation, crossings, ray casts.
//!
//! All functions are pure and eps-aware (`cfg::EPS`). Degenerate inputs
//! (zero-length segments, parallel rays) resolve to documented fallbacks;
//! NaN inputs compare false and therefore read as "no hit".
//!
//! References
//! - Code cross-refs: `types::Segment`, `sweep::cast`, `polygon::VisPolygon`

use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::cfg::EPS;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (q - p).norm()
}

/// Distance from `p` to the closed segment `ab`.
///
/// Projects `p` onto the supporting line, clamps the parameter to `[0, 1]`,
/// and measures to the clamped point. A segment with `|ab|² < EPS` is treated
/// as the point `a`.
pub fn distance_point_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.norm_squared();
    if len_sq < EPS {
        return ap.norm();
    }
    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    let nearest = a + ab * t;
    distance(p, nearest)
}

/// Signed doubled area of triangle `abc`: `(b - a) × (c - a)`.
///
/// Positive when `c` is left of the directed line `a → b`, negative when right.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// `c` strictly left of `a → b` (collinear within eps is not left).
#[inline]
pub fn is_left(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    orientation(a, b, c) > EPS
}

/// `c` strictly right of `a → b` (collinear within eps is not right).
#[inline]
pub fn is_right(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    orientation(a, b, c) < -EPS
}

#[inline]
fn opposite_sides(o1: f64, o2: f64) -> bool {
    (o1 > EPS && o2 < -EPS) || (o1 < -EPS && o2 > EPS)
}

/// Proper crossing of segments `ab` and `cd`.
///
/// True only when each segment's endpoints lie strictly on opposite sides of
/// the other's supporting line. Touching endpoints and collinear overlap
/// report `false`; the sweep never relies on either case.
pub fn segments_intersect(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    opposite_sides(o1, o2) && opposite_sides(o3, o4)
}

/// Ray/segment hit: ray parameter `t`, segment parameter `s`, and the point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance along `dir` from the ray origin, in units of `|dir|`.
    pub t: f64,
    /// Position along the segment, `0` at `a` and `1` at `b`.
    pub s: f64,
    pub point: Vector2<f64>,
}

/// Intersect the ray `origin + t·dir` (`t ≥ 0`) with segment `ab`.
///
/// Solves the 2×2 system for `(t, s)`. Returns `None` when the ray is parallel
/// to the segment (`|det| < EPS`) or when `t < -EPS` or `s ∉ [-EPS, 1+EPS]`.
pub fn ray_hit(
    origin: Vector2<f64>,
    dir: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
) -> Option<RayHit> {
    let seg = b - a;
    let det = dir.x * seg.y - dir.y * seg.x;
    if det.is_nan() || det.abs() < EPS {
        return None;
    }
    let w = a - origin;
    let t = (w.x * seg.y - w.y * seg.x) / det;
    let s = (w.x * dir.y - w.y * dir.x) / det;
    if t >= -EPS && s >= -EPS && s <= 1.0 + EPS {
        Some(RayHit {
            t,
            s,
            point: origin + dir * t,
        })
    } else {
        None
    }
}

/// Point where the ray `origin + t·dir` meets segment `ab`, if any.
#[inline]
pub fn ray_intersects_segment(
    origin: Vector2<f64>,
    dir: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
) -> Option<Vector2<f64>> {
    ray_hit(origin, dir, a, b).map(|h| h.point)
}

/// Direction angle of `p` seen from `reference`, normalized into `[0, 2π)`.
#[inline]
pub fn angle_from_reference(reference: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let d = p - reference;
    normalize_angle(d.y.atan2(d.x))
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub(crate) fn normalize_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
