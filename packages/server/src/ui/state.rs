//! Server state shared by all handlers.

use std::sync::Arc;

use crate::{
    domain::{PlayerRepository, TournamentRepository},
    infrastructure::repository::{InMemoryPlayerRepository, InMemoryTournamentRepository},
    usecase::{PlayerService, TournamentService},
};

/// Shared application state
///
/// Holds the store collaborators only; services are built per request.
pub struct AppState {
    /// Tournament store
    pub tournament_repository: Arc<dyn TournamentRepository>,
    /// Player store
    pub player_repository: Arc<dyn PlayerRepository>,
}

impl AppState {
    pub fn new(
        tournament_repository: Arc<dyn TournamentRepository>,
        player_repository: Arc<dyn PlayerRepository>,
    ) -> Self {
        Self {
            tournament_repository,
            player_repository,
        }
    }

    /// State backed by empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryTournamentRepository::new()),
            Arc::new(InMemoryPlayerRepository::new()),
        )
    }

    pub fn tournament_service(&self) -> TournamentService {
        TournamentService::new(
            self.tournament_repository.clone(),
            self.player_repository.clone(),
        )
    }

    pub fn player_service(&self) -> PlayerService {
        PlayerService::new(self.player_repository.clone())
    }
}
