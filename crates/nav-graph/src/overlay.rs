//! Copy-on-query extension of a visibility graph.
//!
//! A path query needs two extra vertices, the agent's position (start) and
//! its destination (goal), each linked to every base vertex it can see.
//! `QueryGraph` holds those vertices and links next to a shared borrow of the
//! base graph:
//!
//! ```text
//! ids 0 .. n-1   base vertices           (read from the VisibilityGraph)
//! id  n          start                   (overlay)
//! id  n+1        goal                    (overlay)
//! ```
//!
//! The base graph is never written to, so dropping the overlay is the whole
//! revert, whether the search succeeded, failed, or bailed out early.

use nav_core::{Point, VertexId};

use crate::{OcclusionOracle, VisibilityGraph};

const SEES_START: u8 = 0b01;
const SEES_GOAL: u8 = 0b10;

/// A base graph plus ephemeral start and goal vertices.
pub struct QueryGraph<'g> {
    base: &'g VisibilityGraph,
    start: Point,
    goal: Point,
    start_links: Vec<VertexId>,
    goal_links: Vec<VertexId>,
    /// Per base vertex: which ephemeral vertices it is linked to.
    link_flags: Vec<u8>,
}

impl<'g> QueryGraph<'g> {
    /// Link `start` and `goal` to every base vertex visible at `radius`.
    ///
    /// Start and goal are not linked to each other; callers test that pair
    /// for a direct shot before building an overlay.
    pub fn new<O: OcclusionOracle + ?Sized>(
        base: &'g VisibilityGraph,
        oracle: &O,
        start: Point,
        goal: Point,
        radius: f32,
    ) -> Self {
        let mut link_flags = vec![0u8; base.vertex_count()];
        let mut start_links = Vec::new();
        let mut goal_links = Vec::new();

        for v in base.vertices() {
            if !oracle.blocked(start, v.position, radius) {
                start_links.push(v.id);
                link_flags[v.id.index()] |= SEES_START;
            }
            if !oracle.blocked(goal, v.position, radius) {
                goal_links.push(v.id);
                link_flags[v.id.index()] |= SEES_GOAL;
            }
        }

        Self { base, start, goal, start_links, goal_links, link_flags }
    }

    pub fn base(&self) -> &'g VisibilityGraph {
        self.base
    }

    pub fn start_id(&self) -> VertexId {
        VertexId(self.base.vertex_count() as u32)
    }

    pub fn goal_id(&self) -> VertexId {
        VertexId(self.base.vertex_count() as u32 + 1)
    }

    /// Base vertices plus the two ephemeral ones.
    pub fn vertex_count(&self) -> usize {
        self.base.vertex_count() + 2
    }

    /// Base vertices visible from the start.
    pub fn start_links(&self) -> &[VertexId] {
        &self.start_links
    }

    /// Base vertices visible from the goal.
    pub fn goal_links(&self) -> &[VertexId] {
        &self.goal_links
    }

    /// # Panics
    /// Panics if `id` is outside `0 .. vertex_count()`.
    pub fn position(&self, id: VertexId) -> Point {
        if id == self.start_id() {
            self.start
        } else if id == self.goal_id() {
            self.goal
        } else {
            self.base.position(id)
        }
    }

    /// Neighbours of `id` in the augmented graph.  Symmetric: `b` is yielded
    /// for `a` exactly when `a` is yielded for `b`.
    ///
    /// # Panics
    /// Panics if `id` is outside `0 .. vertex_count()`.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let (listed, extra): (&[VertexId], [Option<VertexId>; 2]) = if id == self.start_id() {
            (&self.start_links, [None, None])
        } else if id == self.goal_id() {
            (&self.goal_links, [None, None])
        } else {
            let flags = self.link_flags[id.index()];
            (
                self.base.neighbors(id),
                [
                    (flags & SEES_START != 0).then(|| self.start_id()),
                    (flags & SEES_GOAL != 0).then(|| self.goal_id()),
                ],
            )
        };
        listed.iter().copied().chain(extra.into_iter().flatten())
    }
}
