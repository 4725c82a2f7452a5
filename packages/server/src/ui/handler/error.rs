//! Mapping of usecase results onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::RepositoryError,
    infrastructure::dto::http::ErrorResponseDto,
    usecase::{PlayerServiceError, RemovePlayerError},
};

/// Error response: a status code plus a `{"message": ...}` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponseDto::new(self.message))).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        tracing::error!("Repository error: {}", error);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl From<RemovePlayerError> for ApiError {
    fn from(error: RemovePlayerError) -> Self {
        match error {
            RemovePlayerError::NotFound(not_found) => {
                tracing::warn!("{} ({} missing)", not_found, not_found.kind());
                Self::not_found(not_found.to_string())
            }
            RemovePlayerError::Repository(error) => error.into(),
        }
    }
}

impl From<PlayerServiceError> for ApiError {
    fn from(error: PlayerServiceError) -> Self {
        match error {
            PlayerServiceError::InvalidName(invalid) => Self::bad_request(invalid.to_string()),
            PlayerServiceError::Repository(error) => error.into(),
        }
    }
}
