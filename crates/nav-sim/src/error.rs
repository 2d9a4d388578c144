use nav_core::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent dt ({agent_dt} s) does not match configured dt ({config_dt} s)")]
    DtMismatch { config_dt: f64, agent_dt: f64 },

    #[error("population `{name}` has no cells")]
    EmptyPopulation { name: String },

    #[error("population `{name}` requires a {required}D environment, agent is in {actual}D")]
    DimensionalityMismatch {
        name: String,
        required: usize,
        actual: usize,
    },
}

impl From<NavError> for SimError {
    fn from(err: NavError) -> Self {
        SimError::Config(err.to_string())
    }
}

pub type SimResult<T> = Result<T, SimError>;
