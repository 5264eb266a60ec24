//! twenty48 Server - HTTP API over the game session store
//!
//! This crate provides the web backend:
//! - Health and status endpoints
//! - Game start, move and lookup
//! - Port fallback on startup

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use twenty48_core::DirectionPolicy;

pub use error::ApiError;
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: [u8; 4],
    pub port: u16,
    /// Tried in order when `port` cannot be bound
    pub fallback_ports: Vec<u16>,
    pub direction_policy: DirectionPolicy,
    /// Seed for identifiers and tile spawns (None = random)
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: [0, 0, 0, 0],
            port: 8100,
            fallback_ports: vec![5000, 8000],
            direction_policy: DirectionPolicy::Lenient,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Primary port followed by the fallbacks
    pub fn candidate_ports(&self) -> Vec<u16> {
        let mut ports = vec![self.port];
        for &port in &self.fallback_ports {
            if !ports.contains(&port) {
                ports.push(port);
            }
        }
        ports
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Banner and health
        .route("/", get(routes::status::root_handler))
        .route("/health", get(routes::status::health_handler))
        .route("/api/status", get(routes::status::status_handler))
        // Game API
        .route("/api/game/start", post(routes::game::start_game))
        .route("/api/game/move", post(routes::game::make_move))
        .route("/api/game/:id", get(routes::game::get_game))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind the first available candidate port
pub async fn bind_with_fallback(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let ports = config.candidate_ports();
    for (i, &port) in ports.iter().enumerate() {
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if i > 0 {
                    tracing::info!("Bound fallback port {}", port);
                }
                return Ok(listener);
            }
            Err(e) => {
                tracing::warn!("Port {} not available: {}", port, e);
            }
        }
    }
    anyhow::bail!("No port available (tried {:?})", ports)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = Arc::new(ServerState::from_config(&config));
    let router = create_router(state);

    let listener = bind_with_fallback(&config).await?;
    let addr = listener.local_addr()?;
    tracing::info!("twenty48 server listening on http://{}", addr);
    tracing::info!("Unknown directions: {:?}", config.direction_policy);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        let config = ServerConfig::default();
        assert_eq!(config.candidate_ports(), vec![8100, 5000, 8000]);
    }

    #[test]
    fn test_candidate_ports_dedup() {
        let config = ServerConfig {
            port: 5000,
            ..Default::default()
        };
        assert_eq!(config.candidate_ports(), vec![5000, 8000]);
    }

    #[tokio::test]
    async fn test_bind_falls_back_when_taken() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy = taken.local_addr().unwrap().port();

        let config = ServerConfig {
            host: [127, 0, 0, 1],
            port: busy,
            fallback_ports: vec![0],
            ..Default::default()
        };
        let listener = bind_with_fallback(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), busy);
    }

    #[tokio::test]
    async fn test_bind_fails_when_all_taken() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let busy = taken.local_addr().unwrap().port();

        let config = ServerConfig {
            host: [127, 0, 0, 1],
            port: busy,
            fallback_ports: vec![],
            ..Default::default()
        };
        assert!(bind_with_fallback(&config).await.is_err());
    }
}
