//! `nav-agent` — an agent that plans through a visibility graph and walks
//! the result.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`config`] | `AgentConfig` — speed, stopping distance, clearance radius |
//! | [`state`]  | `AgentState`, `AgentEvent`                                |
//! | [`agent`]  | `NavAgent<P>` — destination tracking + path following     |
//! | [`error`]  | `AgentError`, `AgentResult<T>`                            |
//!
//! # Movement model
//!
//! 1. `set_destination` records a new destination and marks a plan pending.
//!    Re-setting the current destination does nothing.
//! 2. The next `tick` plans from the current position through the bound
//!    [`VisibilityGraph`](nav_graph::VisibilityGraph) and, if a path exists,
//!    starts following it in the same tick.
//! 3. Each following tick moves toward the current waypoint by
//!    `speed × dt` without overshooting, and pops the next waypoint once the
//!    current one is reached.
//! 4. Within `stopping_distance` of the destination the agent stops:
//!    heading becomes zero and `en_route` clears.
//!
//! With `update_position = false` the agent only steers (`heading`) and the
//! host moves it via [`NavAgent::teleport`].

pub mod agent;
pub mod config;
pub mod error;
pub mod state;


pub use agent::NavAgent;
pub use config::AgentConfig;
pub use error::{AgentError, AgentResult};
pub use state::{AgentEvent, AgentState};
