//! InMemory Repository 実装
//!
//! ドメイン層が定義する Repository trait の具体的な実装。
//! BTreeMap をインメモリ DB として使用します（ID 昇順が自然順序）。

mod player;
mod tournament;

pub use player::InMemoryPlayerRepository;
pub use tournament::InMemoryTournamentRepository;

use crate::domain::RepositoryError;

/// Identifier sequence: hands out 1, 2, 3, ... and never reuses a value
#[derive(Debug)]
struct IdSequence {
    entity: &'static str,
    next: i64,
}

impl IdSequence {
    fn new(entity: &'static str) -> Self {
        Self { entity, next: 1 }
    }

    /// Take the next identifier
    fn next_id(&mut self) -> Result<i32, RepositoryError> {
        let id = i32::try_from(self.next).map_err(|_| RepositoryError::IdSpaceExhausted {
            entity: self.entity,
        })?;
        self.next += 1;
        Ok(id)
    }

    /// Make sure an externally chosen identifier is never handed out later
    fn observe(&mut self, id: i32) {
        self.next = self.next.max(i64::from(id) + 1);
    }
}
