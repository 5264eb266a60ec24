//! twenty48 Core - 2048 move engine and game sessions
//!
//! This crate provides the game logic:
//! - 4x4 grid with quarter-turn rotation
//! - Slide/merge engine, tile spawning and game-over detection
//! - Injectable tile source for deterministic play
//! - Session store keyed by game identifier

pub mod direction;
pub mod engine;
pub mod error;
pub mod game;
pub mod grid;
pub mod rng;
pub mod session;

// Re-exports for convenient access
pub use direction::{Direction, DirectionPolicy, ALL_DIRECTIONS};
pub use engine::{apply_move, is_game_over, slide_left_and_merge, spawn_tile, MoveOutcome, Slide};
pub use error::GameError;
pub use game::Game;
pub use grid::{Grid, CELLS, SIZE};
pub use rng::{GameRng, ScriptedTiles, TileSource};
pub use session::{GameSession, SessionStore, Snapshot};
