//! Errors surfaced to callers of the session store

/// Caller-visible game errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game not found: {0}")]
    SessionNotFound(String),

    #[error("invalid direction: {0:?} (expected left, up, right or down)")]
    InvalidDirection(String),
}
