use thiserror::Error;

use nav_agent::AgentError;
use nav_core::AgentId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
