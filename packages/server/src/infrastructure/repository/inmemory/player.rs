//! InMemory Player Repository 実装

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Player, PlayerId, PlayerName, PlayerRepository, RepositoryError};

use super::IdSequence;

#[derive(Debug)]
struct PlayerTable {
    ids: IdSequence,
    records: BTreeMap<PlayerId, Player>,
}

/// インメモリ Player Repository 実装
#[derive(Debug)]
pub struct InMemoryPlayerRepository {
    table: Mutex<PlayerTable>,
}

impl InMemoryPlayerRepository {
    /// 新しい空の InMemoryPlayerRepository を作成
    pub fn new() -> Self {
        Self {
            table: Mutex::new(PlayerTable {
                ids: IdSequence::new("player"),
                records: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_all(&self) -> Result<Vec<Player>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.records.values().cloned().collect())
    }

    async fn find_one(&self, id: PlayerId) -> Result<Option<Player>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.records.get(&id).cloned())
    }

    async fn exists(&self, id: PlayerId) -> Result<bool, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.records.contains_key(&id))
    }

    async fn create(&self, name: PlayerName) -> Result<Player, RepositoryError> {
        let mut table = self.table.lock().await;
        let id = PlayerId::new(table.ids.next_id()?);
        let player = Player::new(id, name);
        table.records.insert(id, player.clone());
        Ok(player)
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        table.records.remove(&id);
        Ok(())
    }
}
