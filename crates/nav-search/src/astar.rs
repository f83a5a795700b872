//! Path planning trait and the default A* implementation.
//!
//! # Pluggability
//!
//! `nav-agent` plans through the [`PathPlanner`] trait, so hosts can swap in
//! a different search (or a recording wrapper in tests) without touching
//! the agent state machine.  [`AStar`] is the default.
//!
//! # Query flow
//!
//! 1. If the destination is directly visible at the query radius, the path
//!    is the single leg `[to]` and no graph work happens.
//! 2. Otherwise a [`QueryGraph`] links `from` and `to` into the base graph.
//!    The base graph is only borrowed, so it is unchanged once the overlay
//!    goes out of scope, on every exit path.
//! 3. A* runs over the overlay with Euclidean edge weights and a
//!    straight-line-to-goal heuristic.
//!
//! # Termination
//!
//! | Mode                     | Stops when                                         |
//! |--------------------------|----------------------------------------------------|
//! | `Termination::OnExtract` | the goal is extracted from the queue (optimal)      |
//! | `Termination::OnRelax`   | the goal is first seen as a neighbour (fast, may be suboptimal) |

use tracing::debug;

use nav_core::{Point, VertexId, check_radius};
use nav_graph::{OcclusionOracle, QueryGraph, VisibilityGraph};

use crate::{MinHeap, Path, SearchError, SearchNode, SearchResult};

// ── PathPlanner trait ─────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so agents holding one can tick on
/// Rayon worker threads.
pub trait PathPlanner: Send + Sync {
    /// Plan a path for a disk of `radius` from `from` to `to`.
    ///
    /// Returns [`SearchError::Unreachable`] if no route exists.
    fn find_path(
        &self,
        graph: &VisibilityGraph,
        oracle: &dyn OcclusionOracle,
        from: Point,
        to: Point,
        radius: f32,
    ) -> SearchResult<Path>;
}

// ── AStar ─────────────────────────────────────────────────────────────────────

/// When the search loop may stop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Stop when the goal is extracted from the queue.
    #[default]
    OnExtract,
    /// Stop as soon as the goal appears among the extracted node's
    /// neighbours.
    OnRelax,
}

/// A* over a visibility graph extended with the query endpoints.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStar {
    pub termination: Termination,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_termination(termination: Termination) -> Self {
        Self { termination }
    }
}

impl PathPlanner for AStar {
    fn find_path(
        &self,
        graph: &VisibilityGraph,
        oracle: &dyn OcclusionOracle,
        from: Point,
        to: Point,
        radius: f32,
    ) -> SearchResult<Path> {
        let radius = check_radius(radius)?;

        if !oracle.blocked(from, to, radius) {
            debug!(%from, %to, "direct line of sight");
            return Ok(Path::direct(to));
        }

        let query = QueryGraph::new(graph, oracle, from, to, radius);
        let result = astar(&query, self.termination);
        match &result {
            Ok(path) => debug!(
                %from,
                %to,
                waypoints = path.len(),
                length = path.length_from(from),
                "path found"
            ),
            Err(_) => debug!(%from, %to, "no path"),
        }
        result
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// One arena node per query-graph vertex, neighbours mirrored as indices.
fn build_nodes(query: &QueryGraph<'_>) -> Vec<SearchNode> {
    let goal = query.position(query.goal_id());
    (0..query.vertex_count() as u32)
        .map(|i| {
            let id = VertexId(i);
            let mut node = SearchNode::new(id, query.position(id), goal);
            node.neighbors = query.neighbors(id).map(|v| v.index()).collect();
            node
        })
        .collect()
}

fn astar(query: &QueryGraph<'_>, termination: Termination) -> SearchResult<Path> {
    let start = query.start_id().index();
    let goal = query.goal_id().index();
    let no_path = || SearchError::Unreachable {
        from: query.position(query.start_id()),
        to:   query.position(query.goal_id()),
    };

    let mut nodes = build_nodes(query);
    nodes[start].distance = 0.0;

    let mut heap = MinHeap::with_capacity(nodes.len());
    for i in 0..nodes.len() {
        heap.insert(i, nodes.as_slice());
    }
    let mut closed = vec![false; nodes.len()];

    while let Some(m) = heap.extract_min(nodes.as_slice()) {
        // Everything left in the queue is at infinite distance too.
        if !nodes[m].is_reached() {
            return Err(no_path());
        }
        if termination == Termination::OnExtract && m == goal {
            return Ok(reconstruct(&nodes, start, goal));
        }
        closed[m] = true;

        let mut relaxed = false;
        for k in 0..nodes[m].neighbors.len() {
            let n = nodes[m].neighbors[k];
            if closed[n] {
                continue;
            }
            let candidate = nodes[m].distance + nodes[m].position.distance(nodes[n].position);
            if termination == Termination::OnRelax && n == goal {
                nodes[n].distance = candidate;
                nodes[n].parent = Some(m);
                return Ok(reconstruct(&nodes, start, goal));
            }
            if candidate < nodes[n].distance {
                nodes[n].distance = candidate;
                nodes[n].parent = Some(m);
                relaxed = true;
            }
        }

        // Keys only ever drop on relaxation.
        if relaxed {
            heap.rebuild(nodes.as_slice());
        }
    }

    Err(no_path())
}

/// Walk parents from the goal back to the start; start excluded.
fn reconstruct(nodes: &[SearchNode], start: usize, goal: usize) -> Path {
    let mut waypoints = Vec::new();
    let mut cur = goal;
    while cur != start {
        waypoints.push(nodes[cur].position);
        match nodes[cur].parent {
            Some(p) => cur = p,
            None => break,
        }
    }
    waypoints.reverse();
    Path::new(waypoints)
}
