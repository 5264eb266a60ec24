//! Single-game state

use crate::direction::Direction;
use crate::engine::{apply_move, is_game_over, spawn_tile, MoveOutcome};
use crate::grid::Grid;
use crate::rng::TileSource;

/// Tiles placed on a fresh grid
pub const STARTING_TILES: usize = 2;

/// Grid, score and terminal flag of one game (clone to branch)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub grid: Grid,
    pub score: u64,
    pub game_over: bool,
}

impl Game {
    /// Empty grid seeded with two tiles
    pub fn new<S: TileSource>(source: &mut S) -> Self {
        let mut grid = Grid::empty();
        for _ in 0..STARTING_TILES {
            spawn_tile(&mut grid, source);
        }
        Self::from_grid(grid, 0)
    }

    /// Resume from an existing position
    pub fn from_grid(grid: Grid, score: u64) -> Self {
        Self {
            grid,
            score,
            game_over: is_game_over(&grid),
        }
    }

    /// Apply a move and commit the result
    pub fn play<S: TileSource>(&mut self, direction: Direction, source: &mut S) -> MoveOutcome {
        let outcome = apply_move(&self.grid, self.score, direction, source);
        self.grid = outcome.grid;
        self.score = outcome.score;
        self.game_over = outcome.game_over;
        outcome
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }
}
