//! Banner, health and status endpoints

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "2048 API - POST /api/game/start to begin, POST /api/game/move to play",
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub method: &'static str,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        method: "GET and POST requests supported",
    })
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub active_games: usize,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: "rust",
        active_games: state.sessions.len(),
    })
}
