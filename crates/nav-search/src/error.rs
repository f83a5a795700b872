//! Search-subsystem error type.

use thiserror::Error;

use nav_core::{NavError, Point};

/// Errors produced by `nav-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no path from {from} to {to}")]
    Unreachable { from: Point, to: Point },

    #[error(transparent)]
    Core(#[from] NavError),
}

pub type SearchResult<T> = Result<T, SearchError>;
