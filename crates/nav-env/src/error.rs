//! Error types for nav-env.

use thiserror::Error;

/// Errors raised while validating an environment configuration.
///
/// All variants are construction-time failures; a built [`Environment`]
/// cannot fail.
///
/// [`Environment`]: crate::Environment
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("unsupported dimensionality '{0}', expected '1D' or '2D'")]
    UnknownDimensionality(String),

    #[error("unsupported boundary conditions '{0}', expected 'solid' or 'periodic'")]
    UnknownBoundaryConditions(String),

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

/// Alias for `Result<T, EnvError>`.
pub type EnvResult<T> = Result<T, EnvError>;

impl From<EnvError> for nav_core::NavError {
    fn from(e: EnvError) -> Self {
        nav_core::NavError::Config(e.to_string())
    }
}
