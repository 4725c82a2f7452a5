//! HTTP routes.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{handler, state::AppState};

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/api/info", get(handler::api_info))
        .route(
            "/tournaments",
            get(handler::list_tournaments).post(handler::add_tournament),
        )
        .route(
            "/tournaments/{id}",
            get(handler::get_tournament)
                .put(handler::update_tournament)
                .delete(handler::delete_tournament),
        )
        .route(
            "/tournaments/{id}/players",
            get(handler::get_tournament_players),
        )
        .route(
            "/tournaments/{id}/players/{player_id}",
            post(handler::add_tournament_player)
                .delete(handler::remove_tournament_player),
        )
        .route(
            "/players",
            get(handler::list_players).post(handler::add_player),
        )
        .route(
            "/players/{id}",
            get(handler::get_player).delete(handler::delete_player),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
