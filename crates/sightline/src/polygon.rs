//! Visibility polygon: ordered vertex ring with geometric queries.
//!
//! Purpose
//! - Output container of the angular sweep. Insertion order is angular order
//!   around the query point; the last vertex closes back to the first.
//! - Queries used by scene-level consumers: containment, bounding box, area,
//!   and a segment overlap test.
//!
//! Assumptions and conventions
//! - Storage is a plain `Vec`, so capacity grows geometrically and never
//!   shrinks. `try_push` surfaces allocation failure instead of aborting.
//! - Containment is even-odd ray casting plus an explicit on-boundary check
//!   (`distance < EPS` to any edge counts as inside). Fewer than 3 vertices
//!   never contain anything.
//! - The bounding box of an empty polygon is the zero box and carries no
//!   meaning.

use std::collections::TryReserveError;

use nalgebra::Vector2;

use crate::cfg::EPS;
use crate::geom::{distance_point_to_segment, segments_intersect, Rect};

/// Closed polygon produced by the visibility sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisPolygon {
    verts: Vec<Vector2<f64>>,
}

impl VisPolygon {
    /// Empty polygon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty polygon with room for `n` vertices, failing softly on OOM.
    pub fn try_with_capacity(n: usize) -> Result<Self, TryReserveError> {
        let mut verts = Vec::new();
        verts.try_reserve(n)?;
        Ok(Self { verts })
    }

    /// Build from an existing vertex ring (taken in order).
    pub fn from_vertices(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }

    /// Append a vertex (amortized O(1)).
    #[inline]
    pub fn push(&mut self, p: Vector2<f64>) {
        self.verts.push(p);
    }

    /// Append a vertex, reporting allocation failure instead of aborting.
    pub fn try_push(&mut self, p: Vector2<f64>) -> Result<(), TryReserveError> {
        if self.verts.len() == self.verts.capacity() {
            // reserve(1) on a full Vec doubles, matching push growth
            self.verts.try_reserve(1)?;
        }
        self.verts.push(p);
        Ok(())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Edges `(v[i], v[i+1])`, including the closing edge back to `v[0]`.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| (self.verts[i], self.verts[(i + 1) % n]))
    }

    /// Min/max over all vertices; `Rect::zero()` when empty.
    pub fn bounding_box(&self) -> Rect {
        let Some(first) = self.verts.first() else {
            return Rect::zero();
        };
        self.verts.iter().skip(1).fold(
            Rect::new(first.x, first.y, first.x, first.y),
            |r, v| Rect::new(r.xmin.min(v.x), r.ymin.min(v.y), r.xmax.max(v.x), r.ymax.max(v.y)),
        )
    }

    /// Unsigned area via the shoelace formula (0 for fewer than 3 vertices).
    pub fn area(&self) -> f64 {
        if self.verts.len() < 3 {
            return 0.0;
        }
        let twice: f64 = self.edges().map(|(p, q)| p.x * q.y - q.x * p.y).sum();
        twice.abs() * 0.5
    }

    /// Even-odd containment with an inclusive boundary.
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        if self.verts.len() < 3 {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            if distance_point_to_segment(p, a, b) < EPS {
                return true;
            }
            // half-open in y so a vertex on the scan line is counted once
            if (a.y <= p.y && b.y > p.y) || (b.y <= p.y && a.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Does segment `ab` reach into the polygon?
    ///
    /// True when either endpoint is contained or the segment properly crosses
    /// an edge. A segment grazing the boundary only along a collinear stretch
    /// is not reported (same limitation as `segments_intersect`).
    pub fn touches_segment(&self, a: Vector2<f64>, b: Vector2<f64>) -> bool {
        if self.verts.len() < 3 {
            return false;
        }
        self.contains_point(a)
            || self.contains_point(b)
            || self.edges().any(|(p, q)| segments_intersect(a, b, p, q))
    }
}
