//! Server state management
//!
//! Shared state handed to every handler.

use crate::ServerConfig;
use twenty48_core::{DirectionPolicy, SessionStore};

/// Server-wide shared state
pub struct ServerState {
    pub sessions: SessionStore,
    pub direction_policy: DirectionPolicy,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            sessions: SessionStore::new(),
            direction_policy: DirectionPolicy::default(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let sessions = match config.seed {
            Some(seed) => SessionStore::with_seed(seed),
            None => SessionStore::new(),
        };
        Self {
            sessions,
            direction_policy: config.direction_policy,
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
