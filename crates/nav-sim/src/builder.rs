//! Fluent builder for constructing a [`World`].

use std::sync::Arc;

use nav_agent::{AgentConfig, NavAgent};
use nav_core::{Point, SimConfig};
use nav_graph::{OcclusionOracle, VisibilityGraph};
use nav_search::{AStar, PathPlanner};

use crate::{SimError, SimResult, World};

/// One agent to spawn at build time.
struct AgentSpec {
    position:    Point,
    config:      AgentConfig,
    destination: Option<Point>,
}

/// Fluent builder for [`World<O, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick duration and run length
/// - `Arc<VisibilityGraph>` — shared by every agent
/// - `O: OcclusionOracle` — the obstacle geometry
///
/// # Optional inputs (have defaults)
///
/// | Method                         | Default                  |
/// |--------------------------------|--------------------------|
/// | `.planner(p)`                  | [`AStar`] (standard termination) |
/// | `.agent(pos, config)`          | no agents                |
/// | `.agent_heading_to(pos, config, dest)` | no agents        |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config, Arc::new(graph), field)
///     .agent_heading_to(Point::new(0.0, 0.0), AgentConfig::default(), Point::new(9.0, 9.0))
///     .build()?;
/// world.run(&mut NoopObserver)?;
/// ```
pub struct WorldBuilder<O: OcclusionOracle, P: PathPlanner + Clone = AStar> {
    config:  SimConfig,
    graph:   Arc<VisibilityGraph>,
    oracle:  O,
    planner: P,
    agents:  Vec<AgentSpec>,
}

impl<O: OcclusionOracle> WorldBuilder<O, AStar> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, graph: Arc<VisibilityGraph>, oracle: O) -> Self {
        Self {
            config,
            graph,
            oracle,
            planner: AStar::new(),
            agents: Vec::new(),
        }
    }
}

impl<O: OcclusionOracle, P: PathPlanner + Clone> WorldBuilder<O, P> {
    /// Use `planner` for every agent (each agent gets a clone).
    pub fn planner<Q: PathPlanner + Clone>(self, planner: Q) -> WorldBuilder<O, Q> {
        WorldBuilder {
            config: self.config,
            graph:  self.graph,
            oracle: self.oracle,
            planner,
            agents: self.agents,
        }
    }

    /// Spawn an idle agent at `position`.  Its id is the number of agents
    /// added before it.
    pub fn agent(mut self, position: Point, config: AgentConfig) -> Self {
        self.agents.push(AgentSpec { position, config, destination: None });
        self
    }

    /// Spawn an agent at `position` that starts planning for `destination`
    /// on the first tick.
    pub fn agent_heading_to(mut self, position: Point, config: AgentConfig, destination: Point) -> Self {
        self.agents.push(AgentSpec { position, config, destination: Some(destination) });
        self
    }

    /// Validate inputs and spawn every agent.
    ///
    /// # Errors
    /// [`SimError::Config`] for a non-positive tick duration, or
    /// [`SimError::Agent`] for an invalid agent configuration.
    pub fn build(self) -> SimResult<World<O, P>> {
        let dt = self.config.tick_duration_secs;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::Config(format!(
                "tick_duration_secs must be finite and positive (got {dt})"
            )));
        }

        let mut agents = Vec::with_capacity(self.agents.len());
        for spec in self.agents {
            let mut agent = NavAgent::with_planner(self.planner.clone(), spec.position, spec.config)?
                .with_graph(Arc::clone(&self.graph));
            if let Some(dest) = spec.destination {
                agent.set_destination(dest);
            }
            agents.push(agent);
        }

        Ok(World {
            clock:   self.config.make_clock(),
            config:  self.config,
            graph:   self.graph,
            oracle:  self.oracle,
            planner: self.planner,
            agents,
        })
    }
}
