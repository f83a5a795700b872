//! `nav-graph` — visibility graph over obstacle corners.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`graph`]    | `Vertex`, `VisibilityGraph`, `VisibilityGraphBuilder`          |
//! | [`overlay`]  | `QueryGraph` — copy-on-query start/goal extension             |
//! | [`oracle`]   | `OcclusionOracle` trait, `ObstacleField`, `Rect`              |
//! | [`obstacle`] | `Obstacle`, `CornerSettings`, `Arrangement`                   |
//! | [`asset`]    | JSON graph asset (`VertexRecord`) load / save                 |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Pairwise occlusion tests of `build()` run on Rayon.        |

pub mod asset;
pub mod error;
pub mod graph;
pub mod obstacle;
pub mod oracle;
pub mod overlay;


pub use asset::VertexRecord;
pub use error::{GraphError, GraphResult};
pub use graph::{Vertex, VisibilityGraph, VisibilityGraphBuilder};
pub use obstacle::{Arrangement, CornerSettings, Obstacle};
pub use oracle::{ObstacleField, OcclusionOracle, Rect};
pub use overlay::QueryGraph;
