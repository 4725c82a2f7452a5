//! UseCase: player management
//!
//! Players are created and removed independently of tournaments. Deleting a
//! player does not touch the tournaments that list it.

use std::sync::Arc;

use crate::domain::{Player, PlayerId, PlayerName, PlayerRepository, RepositoryError};

use super::error::PlayerServiceError;

/// Player service
pub struct PlayerService {
    players: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }

    /// All players in the store's natural order
    pub async fn list_players(&self) -> Result<Vec<Player>, RepositoryError> {
        self.players.find_all().await
    }

    /// Find a player by ID
    pub async fn get_player(&self, id: PlayerId) -> Result<Option<Player>, RepositoryError> {
        self.players.find_one(id).await
    }

    /// Register a new player
    ///
    /// # Errors
    ///
    /// Returns `PlayerServiceError::InvalidName` if `name` fails validation
    pub async fn add_player(&self, name: String) -> Result<Player, PlayerServiceError> {
        let name = PlayerName::new(name)?;
        let player = self.players.create(name).await?;
        tracing::info!("Created player {} ({})", player.id, player.name);
        Ok(player)
    }

    /// Delete a player
    ///
    /// Returns `false` without touching the store if the player does not exist.
    pub async fn delete_player(&self, id: PlayerId) -> Result<bool, RepositoryError> {
        if !self.players.exists(id).await? {
            tracing::debug!("Player {} not found; nothing to delete", id);
            return Ok(false);
        }

        self.players.delete(id).await?;
        tracing::info!("Deleted player {}", id);
        Ok(true)
    }
}
