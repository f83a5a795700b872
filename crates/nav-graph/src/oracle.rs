//! Occlusion oracle trait and the axis-aligned reference implementation.
//!
//! # Pluggability
//!
//! Graph construction and path search only ever call
//! [`OcclusionOracle::blocked`], so a host physics engine can answer the
//! swept-disk test instead of [`ObstacleField`].  Closures of shape
//! `Fn(Point, Point, f32) -> bool` implement the trait directly, which keeps
//! tests short.
//!
//! # Contact tolerance
//!
//! A disk that only grazes an obstacle (distance equal to the radius, up to
//! [`CONTACT_EPSILON`]) is *not* blocked.  Corner vertices sit exactly one
//! radius away from the box sides, so edges running along a side are tangent
//! by construction and must stay open.

use rstar::{AABB, RTree, RTreeObject};

use nav_core::Point;

use crate::Obstacle;

/// Slack applied to clearance comparisons, in world units.
pub const CONTACT_EPSILON: f32 = 1e-4;

// ── OcclusionOracle ───────────────────────────────────────────────────────────

/// Answers whether a disk of `radius` swept from `from` to `to` intersects
/// obstacle geometry.
///
/// Implementations must be `Send + Sync` so a graph can be built, and agents
/// ticked, on Rayon worker threads.
pub trait OcclusionOracle: Send + Sync {
    /// `true` if the swept disk touches an obstacle.
    fn blocked(&self, from: Point, to: Point, radius: f32) -> bool;

    /// Convenience negation of [`blocked`](Self::blocked).
    fn visible(&self, from: Point, to: Point, radius: f32) -> bool {
        !self.blocked(from, to, radius)
    }
}

impl<F> OcclusionOracle for F
where
    F: Fn(Point, Point, f32) -> bool + Send + Sync,
{
    fn blocked(&self, from: Point, to: Point, radius: f32) -> bool {
        self(from, to, radius)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned box obstacle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            min: Point::new(min.x.min(max.x), min.y.min(max.y)),
            max: Point::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    pub fn from_center(center: Point, half_extents: Point) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Corners in clockwise order from the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.max.y),
            self.max,
            Point::new(self.max.x, self.min.y),
            self.min,
        ]
    }

    /// Distance from `p` to the box (zero inside).
    pub fn distance_to_point(&self, p: Point) -> f32 {
        let dx = (self.min.x - p.x).max(0.0).max(p.x - self.max.x);
        let dy = (self.min.y - p.y).max(0.0).max(p.y - self.max.y);
        dx.hypot(dy)
    }

    /// Liang–Barsky clip: does segment `a→b` touch the box?
    pub fn intersects_segment(&self, a: Point, b: Point) -> bool {
        let d = b - a;
        let mut t0 = 0.0_f32;
        let mut t1 = 1.0_f32;
        let planes = [
            (-d.x, a.x - self.min.x),
            (d.x, self.max.x - a.x),
            (-d.y, a.y - self.min.y),
            (d.y, self.max.y - a.y),
        ];
        for (p, q) in planes {
            if p == 0.0 {
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return false;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return false;
                }
                t1 = t1.min(t);
            }
        }
        true
    }

    /// Minimum distance between segment `a→b` and the box.
    ///
    /// For a convex box and a segment that does not cross it, the minimum is
    /// attained at a segment endpoint or at a box corner.
    pub fn distance_to_segment(&self, a: Point, b: Point) -> f32 {
        if self.intersects_segment(a, b) {
            return 0.0;
        }
        self.corners()
            .into_iter()
            .map(|c| point_segment_distance(c, a, b))
            .fold(
                self.distance_to_point(a).min(self.distance_to_point(b)),
                f32::min,
            )
    }

    fn shrunk(&self, by: f32) -> Option<Rect> {
        let min = Point::new(self.min.x + by, self.min.y + by);
        let max = Point::new(self.max.x - by, self.max.y - by);
        (min.x <= max.x && min.y <= max.y).then_some(Rect { min, max })
    }
}

fn point_segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

// ── ObstacleField ─────────────────────────────────────────────────────────────

#[derive(Clone)]
struct RectEntry(Rect);

impl RTreeObject for RectEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.0.min.into(), self.0.max.into())
    }
}

/// A static set of box obstacles answering swept-disk queries exactly.
///
/// Candidate boxes are pre-filtered with an R-tree envelope query around the
/// swept segment, so each query touches only nearby obstacles.
#[derive(Clone)]
pub struct ObstacleField {
    index: RTree<RectEntry>,
}

impl ObstacleField {
    pub fn new(rects: impl IntoIterator<Item = Rect>) -> Self {
        let entries: Vec<RectEntry> = rects.into_iter().map(RectEntry).collect();
        Self { index: RTree::bulk_load(entries) }
    }

    /// Field made of the boxes of `obstacles` (corner settings ignored).
    pub fn from_obstacles(obstacles: &[Obstacle]) -> Self {
        Self::new(obstacles.iter().map(Obstacle::rect))
    }

    pub fn len(&self) -> usize {
        self.index.size()
    }

    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }

    /// Smallest distance from segment `a→b` to any obstacle within
    /// `search_radius` of it, or `None` if there is none that close.
    pub fn clearance(&self, a: Point, b: Point, search_radius: f32) -> Option<f32> {
        let lo = [a.x.min(b.x) - search_radius, a.y.min(b.y) - search_radius];
        let hi = [a.x.max(b.x) + search_radius, a.y.max(b.y) + search_radius];
        self.index
            .locate_in_envelope_intersecting(&AABB::from_corners(lo, hi))
            .map(|e| e.0.distance_to_segment(a, b))
            .reduce(f32::min)
    }
}

impl OcclusionOracle for ObstacleField {
    fn blocked(&self, from: Point, to: Point, radius: f32) -> bool {
        let lo = [from.x.min(to.x) - radius, from.y.min(to.y) - radius];
        let hi = [from.x.max(to.x) + radius, from.y.max(to.y) + radius];
        self.index
            .locate_in_envelope_intersecting(&AABB::from_corners(lo, hi))
            .any(|e| {
                let rect = &e.0;
                if radius > CONTACT_EPSILON {
                    rect.distance_to_segment(from, to) < radius - CONTACT_EPSILON
                } else {
                    // Zero-width cast: only a crossing of the interior counts.
                    rect.shrunk(CONTACT_EPSILON)
                        .is_some_and(|inner| inner.intersects_segment(from, to))
                }
            })
    }
}
