//! Service endpoints (health check, API metadata).

use axum::Json;

use crate::infrastructure::dto::http::{ApiInfoDto, HealthDto};

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        timestamp: tourney_shared::time::now_jst_rfc3339(),
    })
}

/// API metadata endpoint
pub async fn api_info() -> Json<ApiInfoDto> {
    Json(ApiInfoDto {
        title: "Tourney REST API".to_string(),
        description: "Manage tournaments and the players registered in them".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
