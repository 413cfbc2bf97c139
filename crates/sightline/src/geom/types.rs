//! Segment and blocker types consumed by the sweep.
//!
//! - `Segment`: plain endpoints `a → b`.
//! - `Blocker`: a segment plus an opaque id and a display color. Neither is
//!   read by the geometry; both round-trip through the accessors.
//! - `BlockerIds`: explicit id counter owned by whoever builds blockers.
//! - `Occluder`: the seam the sweep reads blockers through.
//! - `Rect`: axis-aligned box (world frame, polygon bounds).

use nalgebra::Vector2;

use super::kernel::{distance_point_to_segment, ray_hit, RayHit};

/// Closed line segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }

    /// Build from raw coordinates `(x1, y1) → (x2, y2)`.
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            a: Vector2::new(x1, y1),
            b: Vector2::new(x2, y2),
        }
    }

    #[inline]
    pub fn coords(&self) -> (f64, f64, f64, f64) {
        (self.a.x, self.a.y, self.b.x, self.b.y)
    }

    /// Shortest distance from `p` to this segment.
    #[inline]
    pub fn distance_to(&self, p: Vector2<f64>) -> f64 {
        distance_point_to_segment(p, self.a, self.b)
    }

    /// Ray hit against this segment (see `kernel::ray_hit`).
    #[inline]
    pub fn ray_hit(&self, origin: Vector2<f64>, dir: Vector2<f64>) -> Option<RayHit> {
        ray_hit(origin, dir, self.a, self.b)
    }
}

/// Opaque blocker identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockerId(pub u32);

/// An occluding segment with pass-through id and color.
#[derive(Clone, Debug, PartialEq)]
pub struct Blocker {
    id: BlockerId,
    color: String,
    segment: Segment,
}

impl Blocker {
    pub fn new(id: BlockerId, segment: Segment, color: impl Into<String>) -> Self {
        Self {
            id,
            color: color.into(),
            segment,
        }
    }

    #[inline]
    pub fn id(&self) -> BlockerId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Endpoints as `(x1, y1, x2, y2)`.
    #[inline]
    pub fn coords(&self) -> (f64, f64, f64, f64) {
        self.segment.coords()
    }
}

/// Monotone id allocator for blockers.
///
/// Owned by the component that flattens scene objects into blockers and passed
/// around explicitly; two allocators never share state.
///
/// Ids are never reused: once `u32::MAX` has been handed out the allocator is
/// exhausted and every further request returns `None`.
#[derive(Clone, Debug)]
pub struct BlockerIds {
    next: Option<u32>,
}

impl Default for BlockerIds {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl BlockerIds {
    /// Start counting at `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    /// Next unused id, or `None` once the id space is exhausted.
    pub fn next_id(&mut self) -> Option<BlockerId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(BlockerId(id))
    }

    /// Allocate an id and build the blocker in one step.
    pub fn blocker(
        &mut self,
        a: Vector2<f64>,
        b: Vector2<f64>,
        color: impl Into<String>,
    ) -> Option<Blocker> {
        let id = self.next_id()?;
        Some(Blocker::new(id, Segment::new(a, b), color))
    }
}

/// Anything the sweep can treat as an occluding segment.
pub trait Occluder {
    fn segment(&self) -> Segment;
}

impl Occluder for Segment {
    #[inline]
    fn segment(&self) -> Segment {
        *self
    }
}

impl Occluder for Blocker {
    #[inline]
    fn segment(&self) -> Segment {
        self.segment
    }
}

impl<T: Occluder + ?Sized> Occluder for &T {
    #[inline]
    fn segment(&self) -> Segment {
        (**self).segment()
    }
}

/// Axis-aligned rectangle `[xmin, xmax] × [ymin, ymax]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Rect {
    #[inline]
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The all-zero box reported for empty inputs.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Corners counter-clockwise (y up), starting at `(xmin, ymin)`.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            Vector2::new(self.xmin, self.ymin),
            Vector2::new(self.xmax, self.ymin),
            Vector2::new(self.xmax, self.ymax),
            Vector2::new(self.xmin, self.ymax),
        ]
    }

    /// The four boundary edges, in `corners()` order.
    pub fn edges(&self) -> [Segment; 4] {
        let c = self.corners();
        [
            Segment::new(c[0], c[1]),
            Segment::new(c[1], c[2]),
            Segment::new(c[2], c[3]),
            Segment::new(c[3], c[0]),
        ]
    }
}
