//! Domain layer for the tournament application.
//!
//! This module contains business rules that are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Player, Tournament};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::{PlayerRepository, TournamentRepository};
pub use value_object::{PlayerId, PlayerName, TournamentId};

#[cfg(test)]
pub use repository::{MockPlayerRepository, MockTournamentRepository};
