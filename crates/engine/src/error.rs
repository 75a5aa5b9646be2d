//! The module contains the errors the engine can raise.
//!
//! Cross-household references surface as [`NotFound`] rather than a
//! permission error, so callers cannot probe for other households' data.
//!
//! [`NotFound`]: EngineError::NotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed or out-of-range input, rejected before any database access.
    #[error("{0}")]
    Validation(String),
    /// Missing entity, or an entity owned by another household.
    #[error("{0}")]
    NotFound(String),
    /// Domain uniqueness violation detected before the mutation.
    #[error("{0}")]
    Conflict(String),
    /// Missing or unresolvable audit context.
    #[error("{0}")]
    Audit(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Conflict(a), Self::Conflict(b)) => a == b,
            (Self::Audit(a), Self::Audit(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
