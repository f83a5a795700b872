//! `NavAgent` — destination tracking and path following.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, error, warn};

use nav_core::Point;
use nav_graph::{OcclusionOracle, VisibilityGraph};
use nav_search::{AStar, Path, PathPlanner, SearchError};

use crate::{AgentConfig, AgentError, AgentEvent, AgentResult, AgentState};

/// One navigating agent.
///
/// # Type parameter
///
/// `P` is the [`PathPlanner`] used for every query ([`AStar`] by default).
/// Swap it at compile time for a different search with no runtime overhead.
pub struct NavAgent<P: PathPlanner = AStar> {
    planner: P,
    graph: Option<Arc<VisibilityGraph>>,
    config: AgentConfig,

    position: Point,
    destination: Point,
    pending: bool,

    /// Waypoint currently steered toward.
    target: Option<Point>,
    /// Waypoints after `target`, nearest first.
    remaining: VecDeque<Point>,

    heading: Point,
    path_exists: bool,
    en_route: bool,

    /// Set once the missing-graph error has been logged for this binding.
    no_graph_logged: bool,
}

impl NavAgent<AStar> {
    /// An agent at `position` planning with the default A*.
    pub fn new(position: Point, config: AgentConfig) -> AgentResult<Self> {
        Self::with_planner(AStar::new(), position, config)
    }
}

impl<P: PathPlanner> NavAgent<P> {
    /// An agent at `position` using `planner`.
    ///
    /// The destination starts at `position`, so the agent is idle until
    /// given somewhere else to go.
    pub fn with_planner(planner: P, position: Point, config: AgentConfig) -> AgentResult<Self> {
        config.validate()?;
        Ok(Self {
            planner,
            graph: None,
            config,
            position,
            destination: position,
            pending: false,
            target: None,
            remaining: VecDeque::new(),
            heading: Point::ZERO,
            path_exists: false,
            en_route: false,
            no_graph_logged: false,
        })
    }

    /// Builder-style [`bind_graph`](Self::bind_graph).
    pub fn with_graph(mut self, graph: Arc<VisibilityGraph>) -> Self {
        self.bind_graph(graph);
        self
    }

    // ── Graph binding ─────────────────────────────────────────────────────

    pub fn bind_graph(&mut self, graph: Arc<VisibilityGraph>) {
        self.graph = Some(graph);
        self.no_graph_logged = false;
    }

    /// Detach the graph.  A destination set afterwards stays pending until a
    /// graph is bound again.
    pub fn unbind_graph(&mut self) -> Option<Arc<VisibilityGraph>> {
        self.graph.take()
    }

    pub fn graph(&self) -> Option<&Arc<VisibilityGraph>> {
        self.graph.as_ref()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Head for `destination`.  Setting the current destination again is a
    /// no-op and triggers no new plan.
    pub fn set_destination(&mut self, destination: Point) {
        if destination != self.destination {
            self.destination = destination;
            self.pending = true;
        }
    }

    /// Plan again for the current destination on the next tick, e.g. after
    /// obstacles moved or a previous plan found no route.
    pub fn request_replan(&mut self) {
        self.pending = true;
    }

    /// Move the agent without planning.  Used by hosts that drive movement
    /// themselves (`update_position = false`).
    pub fn teleport(&mut self, position: Point) {
        self.position = position;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Plan from the current position to `destination` without touching
    /// agent state.
    ///
    /// # Errors
    /// [`AgentError::NoGraph`] if no graph is bound, or the planner's
    /// [`SearchError`].
    pub fn plan(&self, oracle: &dyn OcclusionOracle, destination: Point) -> AgentResult<Path> {
        let graph = self.graph.as_deref().ok_or(AgentError::NoGraph)?;
        let path = self
            .planner
            .find_path(graph, oracle, self.position, destination, self.config.radius)?;
        Ok(path)
    }

    /// `true` if a non-empty path to `destination` exists from here.
    pub fn check_path(&self, oracle: &dyn OcclusionOracle, destination: Point) -> bool {
        self.plan(oracle, destination).is_ok_and(|p| !p.is_empty())
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    /// Unit direction of travel, or zero when stopped.
    pub fn heading(&self) -> Point {
        self.heading
    }

    /// `true` if the last plan found a path.
    pub fn path_exists(&self) -> bool {
        self.path_exists
    }

    /// `true` while moving toward the destination.
    pub fn en_route(&self) -> bool {
        self.en_route
    }

    pub fn current_target(&self) -> Option<Point> {
        self.target
    }

    /// Waypoints still ahead, starting with the current target.
    pub fn remaining_path(&self) -> impl Iterator<Item = Point> + '_ {
        self.target.into_iter().chain(self.remaining.iter().copied())
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn planner(&self) -> &P {
        &self.planner
    }

    /// Derived from the agent's flags.  A destination that is waiting on a
    /// graph reports `Idle`; binding one resumes planning.
    pub fn state(&self) -> AgentState {
        if self.pending && self.graph.is_some() {
            AgentState::PathPending
        } else if self.pending {
            AgentState::Idle
        } else if self.en_route {
            AgentState::Following
        } else if self.path_exists {
            AgentState::Arrived
        } else {
            AgentState::Idle
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the agent by `dt` seconds.
    ///
    /// Plans first if a new destination is pending, then follows the path.
    /// Returns what happened this tick (usually nothing).
    pub fn tick(&mut self, oracle: &dyn OcclusionOracle, dt: f32) -> Vec<AgentEvent> {
        let mut events = Vec::new();

        if self.pending {
            match self.plan(oracle, self.destination) {
                Ok(path) => events.push(self.commit(path)),
                Err(AgentError::NoGraph) => {
                    if !self.no_graph_logged {
                        error!(destination = %self.destination, "no visibility graph bound; plan deferred");
                        self.no_graph_logged = true;
                    }
                    return events;
                }
                Err(e) => {
                    match &e {
                        AgentError::Search(SearchError::Unreachable { .. }) => {
                            warn!(from = %self.position, to = %self.destination, "destination unreachable");
                        }
                        other => error!(error = %other, "path planning failed"),
                    }
                    self.abandon();
                    events.push(AgentEvent::PathNotFound);
                }
            }
        }

        if self.en_route {
            if let Some(event) = self.follow(dt) {
                events.push(event);
            }
        }
        events
    }

    /// Adopt `path` as the route to follow.
    fn commit(&mut self, path: Path) -> AgentEvent {
        let event = AgentEvent::PathFound {
            waypoints: path.len(),
            length:    path.length_from(self.position),
        };
        debug!(to = %self.destination, waypoints = path.len(), "following new path");

        self.pending = false;
        self.remaining = path.waypoints.into();
        self.target = self.remaining.pop_front();
        self.path_exists = self.target.is_some();
        self.en_route = self.path_exists;
        if !self.en_route {
            self.heading = Point::ZERO;
        }
        event
    }

    /// Drop the route and hold position.
    fn abandon(&mut self) {
        self.pending = false;
        self.target = None;
        self.remaining.clear();
        self.path_exists = false;
        self.en_route = false;
        self.heading = Point::ZERO;
    }

    fn follow(&mut self, dt: f32) -> Option<AgentEvent> {
        if self.position.distance(self.destination) <= self.config.stopping_distance {
            self.heading = Point::ZERO;
            self.en_route = false;
            self.target = None;
            self.remaining.clear();
            debug!(at = %self.position, "arrived");
            return Some(AgentEvent::Arrived);
        }

        if self.target == Some(self.position) {
            if let Some(next) = self.remaining.pop_front() {
                self.target = Some(next);
            }
        }
        let mut target = self.target.unwrap_or(self.destination);

        let before = self.position;
        if self.config.update_position {
            let step = self.config.speed * dt.max(0.0);
            self.position = self.position.move_towards(target, step);
        }
        if self.position == target {
            if let Some(next) = self.remaining.pop_front() {
                self.target = Some(next);
                target = next;
            }
        }

        // Landing on the final waypoint keeps the heading we arrived with;
        // the arrival check on the next tick zeroes it.
        let ahead = (target - self.position).normalized();
        self.heading = if ahead == Point::ZERO {
            (self.position - before).normalized()
        } else {
            ahead
        };
        None
    }
}
