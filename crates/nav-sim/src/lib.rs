//! `nav-sim` — tick loop orchestrator for the simple_nav workspace.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Agents   — NavAgent::tick(oracle, dt) for every agent
//!                (parallel with the `parallel` feature).
//!   ② Events   — report each agent's events to the observer in ascending
//!                AgentId order.
//! ```
//!
//! All agents share one `Arc<VisibilityGraph>`.  Queries never write to it,
//! so agents can plan concurrently.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the agent phase on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_agent::AgentConfig;
//! use nav_core::{Point, SimConfig};
//! use nav_sim::{NoopObserver, WorldBuilder};
//!
//! let mut world = WorldBuilder::new(SimConfig::default(), graph, field)
//!     .agent(Point::new(0.0, 0.0), AgentConfig::default())
//!     .build()?;
//! world.set_destination(AgentId(0), Point::new(10.0, 10.0))?;
//! world.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use world::World;
