//! `nav-core` — foundational types for the `simple_nav` workspace.
//!
//! Every other `nav-*` crate depends on this one.  It has no `nav-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`ids`]     | `VertexId`, `AgentId`                                  |
//! | [`geo`]     | `Point` — planar position / direction vector           |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                        |
//! | [`error`]   | `NavError`, `NavResult`, parameter validation helpers  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult, check_non_negative, check_radius};
pub use geo::Point;
pub use ids::{AgentId, VertexId};
pub use time::{SimClock, SimConfig, Tick};
