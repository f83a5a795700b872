//! Observable agent state and per-tick events.

/// Where an agent is in its plan/follow cycle.
///
/// Derived from the agent's flags rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    /// No destination has been planned, the last plan found no path, or no
    /// graph is bound to plan on.
    Idle,
    /// A new destination is waiting for the next tick to be planned.
    PathPending,
    /// Walking the current path.
    Following,
    /// Stopped within `stopping_distance` of the destination.
    Arrived,
}

/// Something notable that happened during one agent tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentEvent {
    /// A plan succeeded.
    PathFound { waypoints: usize, length: f32 },
    /// A plan found no route; the agent holds its position.
    PathNotFound,
    /// The agent reached its destination.
    Arrived,
}
