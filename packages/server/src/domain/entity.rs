//! Core domain models: tournaments and the players registered in them.

use std::collections::BTreeMap;

use super::value_object::{PlayerId, PlayerName, TournamentId};

/// Represents a tournament and the set of players taking part in it
///
/// The player set holds copies of the player records keyed by their
/// identifier, so a player appears at most once per tournament.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tournament {
    /// Tournament identifier (`None` until the store assigns one)
    pub id: Option<TournamentId>,
    /// Reward amount for the tournament
    pub reward_amount: Option<i32>,
    players: BTreeMap<PlayerId, Player>,
}

impl Tournament {
    /// Create a new, not yet persisted tournament
    pub fn new(reward_amount: Option<i32>) -> Self {
        Self {
            id: None,
            reward_amount,
            players: BTreeMap::new(),
        }
    }

    /// Rebuild a persisted tournament from its parts
    pub fn with_players(
        id: TournamentId,
        reward_amount: Option<i32>,
        players: impl IntoIterator<Item = Player>,
    ) -> Self {
        Self {
            id: Some(id),
            reward_amount,
            players: players.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Add a player to the tournament
    ///
    /// Returns `false` if a player with the same identifier was already a
    /// member. The stored copy is replaced in that case.
    pub fn add_player(&mut self, player: Player) -> bool {
        self.players.insert(player.id, player).is_none()
    }

    /// Remove a player from the tournament by ID
    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        self.players.remove(&player_id)
    }

    /// Get a player by ID
    pub fn get_player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(&player_id)
    }

    /// Whether the given player is a member
    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.contains_key(&player_id)
    }

    /// Players in ascending identifier order
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Consume the tournament, yielding its players in ascending identifier order
    pub fn into_players(self) -> Vec<Player> {
        self.players.into_values().collect()
    }

    /// Number of players in the tournament
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Represents a player record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player {
    /// Player identifier
    pub id: PlayerId,
    /// Player display name
    pub name: PlayerName,
}

impl Player {
    /// Create a new player
    pub fn new(id: PlayerId, name: PlayerName) -> Self {
        Self { id, name }
    }
}
