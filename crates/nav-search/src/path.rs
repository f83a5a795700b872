//! The result of a path query.

use nav_core::Point;

/// Waypoints from just after the start to the destination, nearest first.
///
/// The start position is never included; the last waypoint is always the
/// destination.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub waypoints: Vec<Point>,
}

impl Path {
    pub fn new(waypoints: Vec<Point>) -> Self {
        Self { waypoints }
    }

    /// A single straight leg to `to`.
    pub fn direct(to: Point) -> Self {
        Self { waypoints: vec![to] }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// `true` if the path is one straight leg.
    pub fn is_direct(&self) -> bool {
        self.waypoints.len() == 1
    }

    pub fn destination(&self) -> Option<Point> {
        self.waypoints.last().copied()
    }

    /// Total polyline length when walked from `start`.
    pub fn length_from(&self, start: Point) -> f32 {
        self.waypoints
            .iter()
            .scan(start, |prev, &p| {
                let leg = prev.distance(p);
                *prev = p;
                Some(leg)
            })
            .sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.waypoints.iter()
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}
