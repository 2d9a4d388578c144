//! Error types for nav-agent.

use thiserror::Error;

/// Construction-time parameter failures.  A built agent's `update` cannot
/// fail.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent parameter {field} must be positive and finite, got {value}")]
    NonPositiveParam { field: &'static str, value: f64 },

    #[error("agent parameter {field} must be non-negative and finite, got {value}")]
    NegativeParam { field: &'static str, value: f64 },

    #[error("initial position {0} lies outside the environment")]
    PositionOutsideEnvironment(nav_core::Point),
}

/// Alias for `Result<T, AgentError>`.
pub type AgentResult<T> = Result<T, AgentError>;

impl From<AgentError> for nav_core::NavError {
    fn from(e: AgentError) -> Self {
        nav_core::NavError::Config(e.to_string())
    }
}
