//! Per-query search arena entry.

use nav_core::{Point, VertexId};

/// One vertex of a query graph as seen by A*.
///
/// Nodes live in a `Vec` indexed like the query graph's vertex ids, so
/// `parent` and `neighbors` are plain arena indices.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub vertex: VertexId,
    pub position: Point,
    /// Best known distance from the start; `f32::INFINITY` until reached.
    pub distance: f32,
    /// Straight-line distance to the goal.
    pub h: f32,
    pub parent: Option<usize>,
    pub neighbors: Vec<usize>,
}

impl SearchNode {
    pub fn new(vertex: VertexId, position: Point, goal: Point) -> Self {
        Self {
            vertex,
            position,
            distance: f32::INFINITY,
            h: position.distance(goal),
            parent: None,
            neighbors: Vec::new(),
        }
    }

    /// Priority key: `distance + h`.
    #[inline]
    pub fn f(&self) -> f32 {
        self.distance + self.h
    }

    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }
}
