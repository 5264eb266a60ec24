//! In-memory game sessions keyed by identifier
//!
//! The store is an explicit object handed to whoever serves requests. Each
//! session sits behind its own mutex, so moves on one game are serialized
//! while different games proceed independently.

use crate::direction::Direction;
use crate::engine::MoveOutcome;
use crate::error::GameError;
use crate::game::Game;
use crate::grid::Grid;
use crate::rng::GameRng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Caller-facing view of a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: String,
    pub grid: Grid,
    pub score: u64,
    pub game_over: bool,
}

/// One stored game and its private tile source
#[derive(Debug)]
pub struct GameSession {
    pub id: String,
    pub game: Game,
    rng: GameRng,
}

impl GameSession {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            id: self.id.clone(),
            grid: self.game.grid,
            score: self.game.score,
            game_over: self.game.game_over,
        }
    }
}

type SessionHandle = Arc<Mutex<GameSession>>;

/// All live games for the lifetime of the process
pub struct SessionStore {
    sessions: RwLock<FxHashMap<String, SessionHandle>>,
    rng: Mutex<GameRng>,
}

impl SessionStore {
    /// Store with a randomly seeded tile source
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Store whose identifiers and spawns are reproducible from `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
            rng: Mutex::new(rng),
        }
    }

    /// Create a game with two starting tiles and store it
    pub fn start_game(&self) -> Snapshot {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let mut store_rng = lock(&self.rng);

        let mut id = new_id(&mut store_rng);
        while sessions.contains_key(&id) {
            id = new_id(&mut store_rng);
        }
        let mut rng = store_rng.fork();
        drop(store_rng);

        let game = Game::new(&mut rng);
        let session = GameSession {
            id: id.clone(),
            game,
            rng,
        };
        let snapshot = session.snapshot();
        sessions.insert(id, Arc::new(Mutex::new(session)));

        tracing::debug!("Started game {} ({} active)", snapshot.id, sessions.len());
        snapshot
    }

    /// Apply a move to a stored game
    pub fn apply_move(&self, id: &str, direction: Direction) -> Result<Snapshot, GameError> {
        self.play(id, direction).map(|(snapshot, _)| snapshot)
    }

    /// Apply a move and also return the engine outcome
    ///
    /// The session's lock is held across the whole read-modify-write.
    pub fn play(&self, id: &str, direction: Direction) -> Result<(Snapshot, MoveOutcome), GameError> {
        let handle = self.handle(id)?;
        let mut session = lock(&handle);
        let GameSession { game, rng, .. } = &mut *session;

        let outcome = game.play(direction, rng);
        tracing::debug!(
            "Game {} moved {}: changed={} score={} game_over={}",
            id,
            direction,
            outcome.changed,
            outcome.score,
            outcome.game_over
        );

        Ok((session.snapshot(), outcome))
    }

    /// Current state of a stored game
    pub fn snapshot(&self, id: &str) -> Result<Snapshot, GameError> {
        let handle = self.handle(id)?;
        let session = lock(&handle);
        Ok(session.snapshot())
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn handle(&self, id: &str) -> Result<SessionHandle, GameError> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn new_id(rng: &mut GameRng) -> String {
    format!("{:016x}", rng.next_u64())
}
