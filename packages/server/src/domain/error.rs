//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// PlayerName validation error
    #[error("PlayerName cannot be empty")]
    PlayerNameEmpty,

    /// PlayerName too long error
    #[error("PlayerName cannot exceed {max} characters (got {actual})")]
    PlayerNameTooLong { max: usize, actual: usize },
}

/// Errors raised by entity stores
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store has no identifiers left to assign
    #[error("No identifiers left to assign for {entity}")]
    IdSpaceExhausted { entity: &'static str },

    /// Backend failure
    #[error("Storage failure: {0}")]
    Storage(String),
}
