//! UseCase: tournament management and tournament/player membership
//!
//! Lookups that may miss their target report it as `None` (or `false` for
//! deletion) so the caller can answer "not found" without treating it as a
//! fault. Removing a player is the one operation that fails with a typed
//! [`RecordNotFound`], telling a missing tournament apart from a missing
//! member.
//!
//! Check-then-act sequences (`exists` then `delete`, `find_one` then
//! `save`) are not atomic across store calls; two callers working on the
//! same tournament can interleave.

use std::sync::Arc;

use crate::domain::{
    Player, PlayerId, PlayerRepository, RepositoryError, Tournament, TournamentId,
    TournamentRepository,
};

use super::error::{RecordNotFound, RemovePlayerError};

/// Client-supplied tournament fields
///
/// Only the reward amount can be set by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TournamentPatch {
    pub reward_amount: Option<i32>,
}

impl TournamentPatch {
    pub fn new(reward_amount: Option<i32>) -> Self {
        Self { reward_amount }
    }
}

/// Tournament service
pub struct TournamentService {
    /// Tournament store
    tournaments: Arc<dyn TournamentRepository>,
    /// Player store (read-only from this service)
    players: Arc<dyn PlayerRepository>,
}

impl TournamentService {
    /// Create a new TournamentService over the two stores
    pub fn new(
        tournaments: Arc<dyn TournamentRepository>,
        players: Arc<dyn PlayerRepository>,
    ) -> Self {
        Self {
            tournaments,
            players,
        }
    }

    /// All tournaments in the store's natural order
    pub async fn list_tournaments(&self) -> Result<Vec<Tournament>, RepositoryError> {
        self.tournaments.find_all().await
    }

    /// Find a tournament by ID
    pub async fn get_tournament(
        &self,
        id: TournamentId,
    ) -> Result<Option<Tournament>, RepositoryError> {
        self.tournaments.find_one(id).await
    }

    /// Copy the reward amount from `patch` onto an existing tournament
    ///
    /// # Returns
    ///
    /// * `Ok(Some(tournament))` - the persisted tournament
    /// * `Ok(None)` - no tournament with `id`; nothing is written
    pub async fn update_tournament(
        &self,
        id: TournamentId,
        patch: TournamentPatch,
    ) -> Result<Option<Tournament>, RepositoryError> {
        let Some(mut tournament) = self.tournaments.find_one(id).await? else {
            tracing::debug!("Tournament {} not found; nothing to update", id);
            return Ok(None);
        };

        tournament.reward_amount = patch.reward_amount;
        let saved = self.tournaments.save(tournament).await?;
        tracing::info!(
            "Updated tournament {} (reward amount: {:?})",
            id,
            saved.reward_amount
        );
        Ok(Some(saved))
    }

    /// Create a new tournament from `patch`
    ///
    /// The store assigns the identifier.
    pub async fn add_tournament(
        &self,
        patch: TournamentPatch,
    ) -> Result<Tournament, RepositoryError> {
        let saved = self
            .tournaments
            .save(Tournament::new(patch.reward_amount))
            .await?;
        tracing::info!("Created tournament {:?}", saved.id.map(|id| id.value()));
        Ok(saved)
    }

    /// Players of a tournament, in ascending player ID order
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - the tournament does not exist
    /// * `Ok(Some(players))` - the tournament's players (possibly empty)
    pub async fn get_players_of_tournament(
        &self,
        id: TournamentId,
    ) -> Result<Option<Vec<Player>>, RepositoryError> {
        Ok(self
            .tournaments
            .find_one(id)
            .await?
            .map(Tournament::into_players))
    }

    /// Delete a tournament
    ///
    /// Returns `false` without touching the store if the tournament does not exist.
    /// Players stay in the player store.
    pub async fn delete_tournament(&self, id: TournamentId) -> Result<bool, RepositoryError> {
        if !self.tournaments.exists(id).await? {
            tracing::debug!("Tournament {} not found; nothing to delete", id);
            return Ok(false);
        }

        self.tournaments.delete(id).await?;
        tracing::info!("Deleted tournament {}", id);
        Ok(true)
    }

    /// Add an existing player to `tournament` and persist it
    ///
    /// Re-adding a member leaves the player set unchanged but still saves.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(tournament))` - the persisted tournament
    /// * `Ok(None)` - no player with `player_id`; the tournament is not modified
    pub async fn add_player_to_tournament(
        &self,
        mut tournament: Tournament,
        player_id: PlayerId,
    ) -> Result<Option<Tournament>, RepositoryError> {
        let Some(player) = self.players.find_one(player_id).await? else {
            tracing::debug!("Player {} not found; tournament left unchanged", player_id);
            return Ok(None);
        };

        if !tournament.add_player(player) {
            tracing::debug!("Player {} is already in the tournament", player_id);
        }
        let saved = self.tournaments.save(tournament).await?;
        tracing::info!(
            "Added player {} to tournament {:?}",
            player_id,
            saved.id.map(|id| id.value())
        );
        Ok(Some(saved))
    }

    /// Remove a member from a tournament and persist it
    ///
    /// # Errors
    ///
    /// * `RecordNotFound::Tournament` - the tournament does not exist
    /// * `RecordNotFound::Player` - the tournament has no member `player_id`
    /// * `RemovePlayerError::Repository` - the store failed
    pub async fn remove_player_from_tournament(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> Result<(), RemovePlayerError> {
        let mut tournament = self
            .tournaments
            .find_one(tournament_id)
            .await?
            .ok_or(RecordNotFound::Tournament { id: tournament_id })?;

        tournament
            .remove_player(player_id)
            .ok_or(RecordNotFound::Player {
                player_id,
                tournament_id,
            })?;

        self.tournaments.save(tournament).await?;
        tracing::info!(
            "Removed player {} from tournament {}",
            player_id,
            tournament_id
        );
        Ok(())
    }
}
