//! Player endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::PlayerId,
    infrastructure::dto::http::{PlayerDto, PlayerRequestDto},
    ui::state::AppState,
};

use super::error::ApiError;

fn player_not_found(id: PlayerId) -> ApiError {
    tracing::debug!("Player {} not found", id);
    ApiError::not_found(format!("Player not found with id: {id}"))
}

/// GET /players
pub async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlayerDto>>, ApiError> {
    let players = state.player_service().list_players().await?;
    Ok(Json(players.iter().map(PlayerDto::from).collect()))
}

/// GET /players/{id}
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<PlayerDto>, ApiError> {
    let id = PlayerId::new(id);
    state
        .player_service()
        .get_player(id)
        .await?
        .map(|p| Json(PlayerDto::from(&p)))
        .ok_or_else(|| player_not_found(id))
}

/// POST /players
pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlayerRequestDto>,
) -> Result<(StatusCode, Json<PlayerDto>), ApiError> {
    let player = state.player_service().add_player(request.name).await?;
    Ok((StatusCode::CREATED, Json(PlayerDto::from(&player))))
}

/// DELETE /players/{id}
pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let id = PlayerId::new(id);
    if state.player_service().delete_player(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(player_not_found(id))
    }
}
