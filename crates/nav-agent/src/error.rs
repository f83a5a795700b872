use thiserror::Error;

use nav_core::NavError;
use nav_search::SearchError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no visibility graph bound to the agent")]
    NoGraph,

    #[error("path search failed: {0}")]
    Search(#[from] SearchError),

    #[error(transparent)]
    Core(#[from] NavError),
}

pub type AgentResult<T> = Result<T, AgentError>;
