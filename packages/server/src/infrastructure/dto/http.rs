//! HTTP API request/response DTOs for the tournament application.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Player, Tournament},
    usecase::TournamentPatch,
};

/// Tournament as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDto {
    pub id: Option<i32>,
    pub reward_amount: Option<i32>,
    pub players: Vec<PlayerDto>,
}

impl From<&Tournament> for TournamentDto {
    fn from(tournament: &Tournament) -> Self {
        Self {
            id: tournament.id.map(|id| id.value()),
            reward_amount: tournament.reward_amount,
            players: tournament.players().map(PlayerDto::from).collect(),
        }
    }
}

/// Request body for creating or updating a tournament
///
/// Only `rewardAmount` is read; any other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRequestDto {
    #[serde(default)]
    pub reward_amount: Option<i32>,
}

impl From<TournamentRequestDto> for TournamentPatch {
    fn from(dto: TournamentRequestDto) -> Self {
        TournamentPatch::new(dto.reward_amount)
    }
}

/// Player as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.value(),
            name: player.name.as_str().to_string(),
        }
    }
}

/// Request body for registering a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRequestDto {
    pub name: String,
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub message: String,
}

impl ErrorResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String, // ISO 8601 (JST)
}

/// API metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfoDto {
    pub title: String,
    pub description: String,
    pub version: String,
}
