//! UseCase layer
//!
//! Business operations called from the UI layer. Services are stateless:
//! they hold only the store collaborators they were constructed with.

pub mod error;
pub mod player;
pub mod tournament;

pub use error::{PlayerServiceError, RecordNotFound, RemovePlayerError};
pub use player::PlayerService;
pub use tournament::{TournamentPatch, TournamentService};
