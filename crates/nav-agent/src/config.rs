//! Per-agent tuning.

use nav_core::{check_non_negative, check_radius};

use crate::AgentResult;

/// Movement and clearance parameters for one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// World units per second.
    pub speed: f32,

    /// The agent counts as arrived once this close to its destination.
    pub stopping_distance: f32,

    /// Clearance radius used for every path query.
    pub radius: f32,

    /// Move the agent each tick.  When `false` only `heading` is updated and
    /// the host is expected to reposition the agent itself.
    pub update_position: bool,
}

impl AgentConfig {
    /// Reject negative or non-finite parameters.
    pub fn validate(&self) -> AgentResult<()> {
        check_non_negative("speed", self.speed)?;
        check_non_negative("stopping distance", self.stopping_distance)?;
        check_radius(self.radius)?;
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed:             3.5,
            stopping_distance: 0.0,
            radius:            0.5,
            update_position:   true,
        }
    }
}
