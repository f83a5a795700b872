//! Graph-subsystem error type.

use thiserror::Error;

use nav_core::{NavError, VertexId};

/// Errors produced by `nav-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Core(#[from] NavError),

    #[error("cannot build a visibility graph with no vertices")]
    EmptyGraph,

    #[error("obstacles expose 1 to 4 corners (got {0})")]
    InvalidCornerCount(u8),

    #[error("corner arrangement must be 1 to 4 (got {0})")]
    InvalidArrangement(u8),

    #[error("vertex at index {index} carries id {id}")]
    VertexIdMismatch { index: usize, id: VertexId },

    #[error("edge {from} -> {to} points outside the graph")]
    DanglingEdge { from: VertexId, to: VertexId },

    #[error("vertex {0} lists itself as adjacent")]
    SelfLoop(VertexId),

    #[error("edge {from} -> {to} has no reverse edge")]
    AsymmetricEdge { from: VertexId, to: VertexId },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph asset parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
