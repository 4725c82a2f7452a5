//! Tournament endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{PlayerId, TournamentId},
    infrastructure::dto::http::{PlayerDto, TournamentDto, TournamentRequestDto},
    ui::state::AppState,
};

use super::error::ApiError;

fn tournament_not_found(id: TournamentId) -> ApiError {
    tracing::debug!("Tournament {} not found", id);
    ApiError::not_found(format!("Tournament not found with id: {id}"))
}

/// GET /tournaments
pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TournamentDto>>, ApiError> {
    let tournaments = state.tournament_service().list_tournaments().await?;
    Ok(Json(tournaments.iter().map(TournamentDto::from).collect()))
}

/// GET /tournaments/{id}
pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<TournamentDto>, ApiError> {
    let id = TournamentId::new(id);
    state
        .tournament_service()
        .get_tournament(id)
        .await?
        .map(|t| Json(TournamentDto::from(&t)))
        .ok_or_else(|| tournament_not_found(id))
}

/// POST /tournaments
pub async fn add_tournament(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TournamentRequestDto>,
) -> Result<(StatusCode, Json<TournamentDto>), ApiError> {
    let tournament = state
        .tournament_service()
        .add_tournament(request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(TournamentDto::from(&tournament))))
}

/// PUT /tournaments/{id}
pub async fn update_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<TournamentRequestDto>,
) -> Result<Json<TournamentDto>, ApiError> {
    let id = TournamentId::new(id);
    state
        .tournament_service()
        .update_tournament(id, request.into())
        .await?
        .map(|t| Json(TournamentDto::from(&t)))
        .ok_or_else(|| tournament_not_found(id))
}

/// DELETE /tournaments/{id}
pub async fn delete_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let id = TournamentId::new(id);
    if state.tournament_service().delete_tournament(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(tournament_not_found(id))
    }
}

/// GET /tournaments/{id}/players
pub async fn get_tournament_players(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<PlayerDto>>, ApiError> {
    let id = TournamentId::new(id);
    state
        .tournament_service()
        .get_players_of_tournament(id)
        .await?
        .map(|players| Json(players.iter().map(PlayerDto::from).collect()))
        .ok_or_else(|| tournament_not_found(id))
}

/// POST /tournaments/{id}/players/{player_id}
pub async fn add_tournament_player(
    State(state): State<Arc<AppState>>,
    Path((id, player_id)): Path<(i32, i32)>,
) -> Result<Json<TournamentDto>, ApiError> {
    let id = TournamentId::new(id);
    let player_id = PlayerId::new(player_id);
    let service = state.tournament_service();

    let tournament = service
        .get_tournament(id)
        .await?
        .ok_or_else(|| tournament_not_found(id))?;

    service
        .add_player_to_tournament(tournament, player_id)
        .await?
        .map(|t| Json(TournamentDto::from(&t)))
        .ok_or_else(|| {
            tracing::debug!("Player {} not found", player_id);
            ApiError::not_found(format!("Player not found with id: {player_id}"))
        })
}

/// DELETE /tournaments/{id}/players/{player_id}
pub async fn remove_tournament_player(
    State(state): State<Arc<AppState>>,
    Path((id, player_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    state
        .tournament_service()
        .remove_player_from_tournament(TournamentId::new(id), PlayerId::new(player_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
