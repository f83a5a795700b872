//! Planar positions and direction vectors.
//!
//! `Point` doubles as a position and as a 2-D vector (headings, offsets).
//! Coordinates are `f32`; the engine works on a plane, so there is no `z`.

use std::ops::{Add, Mul, Sub};

/// Lengths below this are treated as zero when normalizing.
const NORMALIZE_EPSILON: f32 = 1e-5;

/// A planar coordinate (or vector) stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction, or [`Point::ZERO`] for vectors too
    /// short to normalize.
    pub fn normalized(self) -> Point {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            Point::new(self.x / len, self.y / len)
        } else {
            Point::ZERO
        }
    }

    /// Step from `self` toward `target` by at most `max_delta`.
    ///
    /// Lands exactly on `target` when it is within reach, so repeated calls
    /// converge to bit-identical equality rather than hovering nearby.
    pub fn move_towards(self, target: Point, max_delta: f32) -> Point {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_delta || dist == 0.0 {
            return target;
        }
        self + delta * (max_delta / dist)
    }

    /// `true` when both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
