//! The `World` struct and its tick loop.

use std::sync::Arc;

use tracing::{debug, debug_span, info};

use nav_agent::{AgentConfig, AgentEvent, AgentState, NavAgent};
use nav_core::{AgentId, Point, SimClock, SimConfig, Tick};
use nav_graph::{OcclusionOracle, VisibilityGraph};
use nav_search::{AStar, PathPlanner};

use crate::{SimError, SimResult, WorldObserver};

/// Agents navigating one shared visibility graph.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<O: OcclusionOracle, P: PathPlanner + Clone = AStar> {
    /// Tick duration and run length.
    pub config: SimConfig,

    /// Tracks the current tick; `tick_duration_secs` is each agent's `dt`.
    pub clock: SimClock,

    pub(crate) graph: Arc<VisibilityGraph>,
    pub(crate) oracle: O,
    /// Template cloned into agents added after build.
    pub(crate) planner: P,
    /// Indexed by `AgentId`.
    pub(crate) agents: Vec<NavAgent<P>>,
}

impl<O: OcclusionOracle, P: PathPlanner + Clone> World<O, P> {
    // ── Agents ────────────────────────────────────────────────────────────

    /// Spawn an idle agent bound to the world's graph.
    pub fn add_agent(&mut self, position: Point, config: AgentConfig) -> SimResult<AgentId> {
        let agent = NavAgent::with_planner(self.planner.clone(), position, config)?
            .with_graph(Arc::clone(&self.graph));
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(agent);
        Ok(id)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agent(&self, id: AgentId) -> Option<&NavAgent<P>> {
        self.agents.get(id.index())
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut NavAgent<P>> {
        self.agents.get_mut(id.index())
    }

    /// `(AgentId, &NavAgent)` pairs in id order.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &NavAgent<P>)> + '_ {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, a)| (AgentId(i as u32), a))
    }

    /// Forward to [`NavAgent::set_destination`].
    pub fn set_destination(&mut self, id: AgentId, destination: Point) -> SimResult<()> {
        self.agent_mut(id)
            .ok_or(SimError::AgentNotFound(id))?
            .set_destination(destination);
        Ok(())
    }

    pub fn graph(&self) -> &Arc<VisibilityGraph> {
        &self.graph
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// `true` once no agent is waiting to plan or still moving.
    pub fn is_settled(&self) -> bool {
        self.agents
            .iter()
            .all(|a| !matches!(a.state(), AgentState::PathPending | AgentState::Following))
    }

    // ── Run ───────────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<W: WorldObserver>(&mut self, observer: &mut W) -> SimResult<()> {
        info!(
            agents = self.agents.len(),
            vertices = self.graph.vertex_count(),
            end = %self.config.end_tick(),
            "world run starting"
        );
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.step(now, observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(clock = %self.clock, "world run finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<W: WorldObserver>(&mut self, n: u64, observer: &mut W) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.step(now, observer);
            self.clock.advance();
        }
        Ok(())
    }

    /// Run until every agent has settled or `max_ticks` elapse.  Returns the
    /// number of ticks run.
    pub fn run_until_settled<W: WorldObserver>(&mut self, max_ticks: u64, observer: &mut W) -> SimResult<u64> {
        let mut ran = 0;
        while ran < max_ticks && !self.is_settled() {
            let now = self.clock.current_tick;
            self.step(now, observer);
            self.clock.advance();
            ran += 1;
        }
        Ok(ran)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<W: WorldObserver>(&mut self, now: Tick, observer: &mut W) {
        observer.on_tick_start(now);

        let events = self.tick_agents(now);
        for (agent, agent_events) in events {
            for event in &agent_events {
                observer.on_agent_event(now, agent, event);
            }
        }

        let en_route = self.agents.iter().filter(|a| a.en_route()).count();
        observer.on_tick_end(now, en_route);
    }

    /// Tick every agent; returns the non-empty event lists in ascending
    /// `AgentId` order.
    fn tick_agents(&mut self, now: Tick) -> Vec<(AgentId, Vec<AgentEvent>)> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let oracle: &dyn OcclusionOracle = &self.oracle;
        let dt = self.clock.tick_duration_secs;

        let tick_one = |i: usize, agent: &mut NavAgent<P>| {
            let _span = debug_span!("agent", id = i, tick = now.0).entered();
            let events = agent.tick(oracle, dt);
            if !events.is_empty() {
                debug!(?events, "agent events");
            }
            (AgentId(i as u32), events)
        };

        #[cfg(not(feature = "parallel"))]
        {
            self.agents
                .iter_mut()
                .enumerate()
                .map(|(i, a)| tick_one(i, a))
                .filter(|(_, events)| !events.is_empty())
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // `collect` keeps the input order, so ids stay ascending.
            self.agents
                .par_iter_mut()
                .enumerate()
                .map(|(i, a)| tick_one(i, a))
                .filter(|(_, events)| !events.is_empty())
                .collect()
        }
    }
}
