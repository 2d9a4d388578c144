//! Error types for nav-cells.

use thiserror::Error;

/// Construction-time failures for cell models.  A built model's rate
/// computation cannot fail.
#[derive(Debug, Error)]
pub enum CellsError {
    #[error("unknown cell kind '{0}', expected one of: {}", crate::registry::KNOWN_KINDS.join(", "))]
    UnknownCellKind(String),

    #[error("cell parameter {field} must be positive and finite, got {value}")]
    NonPositiveParam { field: &'static str, value: f64 },

    #[error("a population must contain at least one cell")]
    NoCells,

    #[error("{kind} require a 2D environment")]
    RequiresTwoD { kind: &'static str },

    #[error("tuning centre {0} lies outside the environment")]
    CentreOutsideEnvironment(nav_core::Point),
}

/// Alias for `Result<T, CellsError>`.
pub type CellsResult<T> = Result<T, CellsError>;

impl From<CellsError> for nav_core::NavError {
    fn from(e: CellsError) -> Self {
        nav_core::NavError::Config(e.to_string())
    }
}
