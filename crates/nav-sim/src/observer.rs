//! World observer trait for progress reporting and data collection.

use nav_agent::AgentEvent;
use nav_core::{AgentId, Tick};

/// Callbacks invoked by [`World::run`][crate::World::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival printer
///
/// ```rust,ignore
/// struct ArrivalPrinter;
///
/// impl WorldObserver for ArrivalPrinter {
///     fn on_agent_event(&mut self, tick: Tick, agent: AgentId, event: &AgentEvent) {
///         if *event == AgentEvent::Arrived {
///             println!("{tick}: agent {agent} arrived");
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the very start of each tick, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent event, in ascending `AgentId` order.
    fn on_agent_event(&mut self, _tick: Tick, _agent: AgentId, _event: &AgentEvent) {}

    /// Called at the end of each tick.
    ///
    /// `en_route` is the number of agents still moving after this tick.
    fn on_tick_end(&mut self, _tick: Tick, _en_route: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
