//! Visibility graph representation and builder.
//!
//! # Data layout
//!
//! The graph is a dense vertex array: the vertex with id `n` lives at index
//! `n`.  Each vertex keeps its adjacency as a sorted, de-duplicated
//! `Vec<VertexId>` so membership checks are a binary search and iteration is
//! a contiguous scan.  Edges are undirected and stored on both endpoints.
//!
//! The graph is built once (offline or at start-up) and is immutable
//! afterwards.  Path queries never mutate it; they layer a
//! [`QueryGraph`](crate::QueryGraph) on top instead.

use std::fmt;

use tracing::debug;

use nav_core::{Point, VertexId, check_radius};

use crate::{GraphError, GraphResult, Obstacle, OcclusionOracle};

// ── Vertex ────────────────────────────────────────────────────────────────────

/// One corner point of the visibility graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub position: Point,
    adjacent: Vec<VertexId>,
}

impl Vertex {
    pub fn new(id: VertexId, position: Point) -> Self {
        Self { id, position, adjacent: Vec::new() }
    }

    /// Construct with an explicit adjacency list (sorted and de-duplicated
    /// on the way in).
    pub fn with_adjacent(id: VertexId, position: Point, mut adjacent: Vec<VertexId>) -> Self {
        adjacent.sort_unstable();
        adjacent.dedup();
        Self { id, position, adjacent }
    }

    /// Adjacent vertex ids in ascending order.
    #[inline]
    pub fn adjacent(&self) -> &[VertexId] {
        &self.adjacent
    }

    #[inline]
    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.adjacent.binary_search(&other).is_ok()
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    /// Insert `other` keeping the list sorted.  Returns `false` if it was
    /// already present.
    fn add_adjacent(&mut self, other: VertexId) -> bool {
        match self.adjacent.binary_search(&other) {
            Ok(_) => false,
            Err(pos) => {
                self.adjacent.insert(pos, other);
                true
            }
        }
    }
}

// ── VisibilityGraph ───────────────────────────────────────────────────────────

/// Undirected visibility graph over obstacle corners.
///
/// Construct with [`VisibilityGraphBuilder`], or load a saved asset via
/// [`VisibilityGraph::read_json`].
#[derive(Clone, PartialEq)]
pub struct VisibilityGraph {
    vertices: Vec<Vertex>,
}

impl VisibilityGraph {
    /// Assemble a graph from vertices that already carry their adjacency.
    ///
    /// Validates that ids are dense (`id == index`), that every edge points
    /// at an existing vertex other than its source, and that adjacency is
    /// symmetric.
    pub fn from_vertices(vertices: Vec<Vertex>) -> GraphResult<Self> {
        let n = vertices.len();
        for (index, v) in vertices.iter().enumerate() {
            if v.id.index() != index {
                return Err(GraphError::VertexIdMismatch { index, id: v.id });
            }
            for &u in v.adjacent() {
                if u.index() >= n {
                    return Err(GraphError::DanglingEdge { from: v.id, to: u });
                }
                if u == v.id {
                    return Err(GraphError::SelfLoop(v.id));
                }
                if !vertices[u.index()].is_adjacent(v.id) {
                    return Err(GraphError::AsymmetricEdge { from: v.id, to: u });
                }
            }
        }
        Ok(Self::assemble(vertices))
    }

    /// Wrap the vertex array.  Callers guarantee the invariants checked by
    /// `from_vertices`.
    fn assemble(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Position of `id`.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    #[inline]
    pub fn position(&self, id: VertexId) -> Point {
        self.vertices[id.index()].position
    }

    /// Adjacent vertices of `id` in ascending order.
    ///
    /// # Panics
    /// Panics if `id` is not a vertex of this graph.
    #[inline]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertices[id.index()].adjacent()
    }

    pub fn is_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.vertex(a).is_some_and(|v| v.is_adjacent(b))
    }

    /// `true` when `b ∈ adj(a) ⟺ a ∈ adj(b)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.vertices.iter().all(|v| {
            v.adjacent()
                .iter()
                .all(|&u| self.is_adjacent(u, v.id))
        })
    }
}

impl fmt::Debug for VisibilityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityGraph")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

// ── VisibilityGraphBuilder ────────────────────────────────────────────────────

/// Collect corner points, then connect every mutually visible pair.
///
/// # Example
///
/// ```
/// use nav_core::Point;
/// use nav_graph::{Obstacle, ObstacleField, VisibilityGraphBuilder};
///
/// let obstacle = Obstacle::new(Point::new(5.0, 5.0), Point::new(1.0, 1.0)).unwrap();
/// let field = ObstacleField::from_obstacles(&[obstacle.clone()]);
///
/// let mut b = VisibilityGraphBuilder::new(0.5).unwrap();
/// b.add_obstacle(&obstacle).unwrap();
/// let graph = b.build(&field).unwrap();
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 4); // the four sides; diagonals cross the box
/// ```
pub struct VisibilityGraphBuilder {
    radius: f32,
    points: Vec<Point>,
}

impl VisibilityGraphBuilder {
    /// Start a graph for agents of clearance `radius`.
    ///
    /// # Errors
    /// Rejects a negative or non-finite radius.
    pub fn new(radius: f32) -> GraphResult<Self> {
        Ok(Self { radius: check_radius(radius)?, points: Vec::new() })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Add the corners `obstacle` exposes at this builder's radius.  Returns
    /// the ids assigned to them, in corner order.
    pub fn add_obstacle(&mut self, obstacle: &Obstacle) -> GraphResult<Vec<VertexId>> {
        let locs = obstacle.vertex_locs(self.radius)?;
        Ok(locs.into_iter().map(|p| self.add_vertex(p)).collect())
    }

    /// Add an explicit vertex and return its id (sequential from 0).
    pub fn add_vertex(&mut self, pos: Point) -> VertexId {
        let id = VertexId(self.points.len() as u32);
        self.points.push(pos);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Consume the builder, testing every vertex pair against `oracle`.
    ///
    /// Time complexity: O(V²) oracle calls.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] if no vertex was added.
    pub fn build<O: OcclusionOracle + ?Sized>(self, oracle: &O) -> GraphResult<VisibilityGraph> {
        if self.points.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut vertices: Vec<Vertex> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, &p)| Vertex::new(VertexId(i as u32), p))
            .collect();

        let pairs = visible_pairs(&self.points, self.radius, oracle);
        for (a, b) in pairs {
            if vertices[a].is_adjacent(VertexId(b as u32)) {
                continue;
            }
            vertices[a].add_adjacent(VertexId(b as u32));
            vertices[b].add_adjacent(VertexId(a as u32));
        }

        let graph = VisibilityGraph::assemble(vertices);
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            radius = self.radius,
            "built visibility graph"
        );
        Ok(graph)
    }
}

/// Every `(i, j)` with `i < j` whose connecting segment is unobstructed,
/// in ascending pair order.
#[cfg(not(feature = "parallel"))]
fn visible_pairs<O: OcclusionOracle + ?Sized>(
    points: &[Point],
    radius: f32,
    oracle: &O,
) -> Vec<(usize, usize)> {
    let n = points.len();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !oracle.blocked(points[i], points[j], radius) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(feature = "parallel")]
fn visible_pairs<O: OcclusionOracle + ?Sized>(
    points: &[Point],
    radius: f32,
    oracle: &O,
) -> Vec<(usize, usize)> {
    use rayon::prelude::*;

    let n = points.len();
    // Indexed collect keeps ascending (i, j) order.
    (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..n)
                .filter(move |&j| !oracle.blocked(points[i], points[j], radius))
                .map(move |j| (i, j))
        })
        .collect()
}
