//! Handler modules for HTTP endpoints.

pub mod error;
pub mod http;
pub mod player;
pub mod tournament;

pub use error::ApiError;

// Re-export HTTP handlers
pub use http::{api_info, health_check};
pub use player::{add_player, delete_player, get_player, list_players};
pub use tournament::{
    add_tournament, add_tournament_player, delete_tournament, get_tournament,
    get_tournament_players, list_tournaments, remove_tournament_player, update_tournament,
};
