//! `nav-search` — shortest paths through a visibility graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`heap`]   | `MinHeap` (fixed capacity, full rebuild), `HeapKeys`       |
//! | [`node`]   | `SearchNode` — per-query arena entry                       |
//! | [`astar`]  | `PathPlanner` trait, `AStar`, `Termination`                |
//! | [`path`]   | `Path` — nearest-first waypoints                           |
//! | [`error`]  | `SearchError`, `SearchResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Path` and `Termination`. |

pub mod astar;
pub mod error;
pub mod heap;
pub mod node;
pub mod path;

#[cfg(test)]
mod tests;

pub use astar::{AStar, PathPlanner, Termination};
pub use error::{SearchError, SearchResult};
pub use heap::{HeapKeys, MinHeap};
pub use node::SearchNode;
pub use path::Path;
