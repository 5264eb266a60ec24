//! Mapping of game errors onto HTTP responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use twenty48_core::GameError;

/// Error returned by API handlers
#[derive(Debug)]
pub enum ApiError {
    Game(GameError),
    /// Request body missing, not JSON, or missing fields
    BadRequest(String),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Game(err @ GameError::SessionNotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Game(err @ GameError::InvalidDirection(_)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
