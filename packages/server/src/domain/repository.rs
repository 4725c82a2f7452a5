//! Repository traits (entity stores).
//!
//! The domain layer defines the contracts; infrastructure provides the
//! implementations (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{Player, Tournament},
    error::RepositoryError,
    value_object::{PlayerId, PlayerName, TournamentId},
};

/// Store for tournaments, keyed by [`TournamentId`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// All tournaments in the store's natural order
    async fn find_all(&self) -> Result<Vec<Tournament>, RepositoryError>;

    /// Find a tournament by its ID
    async fn find_one(&self, id: TournamentId) -> Result<Option<Tournament>, RepositoryError>;

    /// Whether a tournament with the given ID exists
    async fn exists(&self, id: TournamentId) -> Result<bool, RepositoryError>;

    /// Save a tournament (insert or update)
    ///
    /// A tournament without an ID is assigned one. The persisted value is returned.
    async fn save(&self, tournament: Tournament) -> Result<Tournament, RepositoryError>;

    /// Delete a tournament by ID
    async fn delete(&self, id: TournamentId) -> Result<(), RepositoryError>;
}

/// Store for players, keyed by [`PlayerId`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// All players in the store's natural order
    async fn find_all(&self) -> Result<Vec<Player>, RepositoryError>;

    /// Find a player by its ID
    async fn find_one(&self, id: PlayerId) -> Result<Option<Player>, RepositoryError>;

    /// Whether a player with the given ID exists
    async fn exists(&self, id: PlayerId) -> Result<bool, RepositoryError>;

    /// Create a player with a store-assigned ID
    async fn create(&self, name: PlayerName) -> Result<Player, RepositoryError>;

    /// Delete a player by ID
    async fn delete(&self, id: PlayerId) -> Result<(), RepositoryError>;
}
