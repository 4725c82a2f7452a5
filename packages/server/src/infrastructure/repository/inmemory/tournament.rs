//! InMemory Tournament Repository 実装
//!
//! ドメインモデル（`Tournament`）をそのままストレージとして保持します。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, Tournament, TournamentId, TournamentRepository};

use super::IdSequence;

#[derive(Debug)]
struct TournamentTable {
    ids: IdSequence,
    records: BTreeMap<TournamentId, Tournament>,
}

/// インメモリ Tournament Repository 実装
///
/// 各呼び出しは Mutex で直列化されます。複数の呼び出しにまたがる原子性はありません。
#[derive(Debug)]
pub struct InMemoryTournamentRepository {
    table: Mutex<TournamentTable>,
}

impl InMemoryTournamentRepository {
    /// 新しい空の InMemoryTournamentRepository を作成
    pub fn new() -> Self {
        Self {
            table: Mutex::new(TournamentTable {
                ids: IdSequence::new("tournament"),
                records: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryTournamentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn find_all(&self) -> Result<Vec<Tournament>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.records.values().cloned().collect())
    }

    async fn find_one(&self, id: TournamentId) -> Result<Option<Tournament>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.records.get(&id).cloned())
    }

    async fn exists(&self, id: TournamentId) -> Result<bool, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.records.contains_key(&id))
    }

    async fn save(&self, mut tournament: Tournament) -> Result<Tournament, RepositoryError> {
        let mut table = self.table.lock().await;
        let id = match tournament.id {
            Some(id) => {
                table.ids.observe(id.value());
                id
            }
            None => {
                let id = TournamentId::new(table.ids.next_id()?);
                tournament.id = Some(id);
                id
            }
        };
        table.records.insert(id, tournament.clone());
        Ok(tournament)
    }

    async fn delete(&self, id: TournamentId) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        table.records.remove(&id);
        Ok(())
    }
}
