//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{PlayerId, RepositoryError, TournamentId, ValueObjectError};

/// A referenced record is absent
///
/// Only raised when removing a player from a tournament; every other
/// lookup reports absence as `None` / `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordNotFound {
    /// The tournament does not exist
    #[error("Tournament not found with id: {id}")]
    Tournament { id: TournamentId },

    /// The tournament exists but the player is not one of its members
    #[error("Player not found with id: {player_id} for tournament with id: {tournament_id}")]
    Player {
        player_id: PlayerId,
        tournament_id: TournamentId,
    },
}

impl RecordNotFound {
    /// Kind of the missing record (`"tournament"` or `"player"`)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tournament { .. } => "tournament",
            Self::Player { .. } => "player",
        }
    }
}

/// Errors from removing a player from a tournament
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemovePlayerError {
    #[error(transparent)]
    NotFound(#[from] RecordNotFound),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors from the player-management path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerServiceError {
    /// Invalid player name
    #[error(transparent)]
    InvalidName(#[from] ValueObjectError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
