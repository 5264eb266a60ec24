//! Game API: start, move, lookup

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use twenty48_core::{Direction, Snapshot};

/// Start a new game
pub async fn start_game(State(state): State<Arc<ServerState>>) -> Json<Snapshot> {
    let snapshot = state.sessions.start_game();
    tracing::info!("New game {}", snapshot.id);
    Json(snapshot)
}

/// Move request
#[derive(Deserialize)]
pub struct MoveRequest {
    pub id: String,
    pub direction: String,
}

/// Apply a move to an existing game
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<Snapshot>, ApiError> {
    let Json(req) = payload?;
    let direction = Direction::parse_with(&req.direction, state.direction_policy)?;
    let snapshot = state.sessions.apply_move(&req.id, direction)?;
    if snapshot.game_over {
        tracing::info!("Game {} over with score {}", snapshot.id, snapshot.score);
    }
    Ok(Json(snapshot))
}

/// Current state of a game
pub async fn get_game(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<Snapshot>, ApiError> {
    Ok(Json(state.sessions.snapshot(&id)?))
}
