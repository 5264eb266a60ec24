//! Move engine: slide-left compress/merge, spawning, terminal detection
//!
//! Every direction is handled by rotating the grid so the move becomes a
//! left slide, sliding, and rotating back.

use crate::direction::Direction;
use crate::grid::{Grid, SIZE};
use crate::rng::TileSource;

// ============================================================================
// COMPRESS / MERGE
// ============================================================================

/// Result of sliding every row left
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub grid: Grid,
    pub score: u64,
    pub changed: bool,
}

/// Slide all rows left, merging equal neighbours once per move
pub fn slide_left_and_merge(grid: &Grid, score: u64) -> Slide {
    let mut out = *grid;
    let mut score = score;
    let mut changed = false;

    for row in out.rows_mut().iter_mut() {
        let (gained, row_changed) = slide_row(row);
        score += gained;
        changed |= row_changed;
    }

    Slide {
        grid: out,
        score,
        changed,
    }
}

/// Slide one row in place; returns (score gained, whether the row changed)
fn slide_row(row: &mut [u32; SIZE]) -> (u64, bool) {
    let original = *row;

    compress(row);
    let gained = merge(row);
    if gained > 0 {
        compress(row);
    }

    (gained, *row != original)
}

/// Pack non-zero tiles against the left edge keeping their order
fn compress(row: &mut [u32; SIZE]) {
    let mut packed = [0u32; SIZE];
    let mut next = 0;
    for &value in row.iter().filter(|&&v| v != 0) {
        packed[next] = value;
        next += 1;
    }
    *row = packed;
}

/// Single left-to-right sweep; a freshly doubled tile is never merged again
fn merge(row: &mut [u32; SIZE]) -> u64 {
    let mut gained = 0u64;
    let mut i = 0;
    while i + 1 < SIZE {
        if row[i] != 0 && row[i] == row[i + 1] {
            row[i] *= 2;
            row[i + 1] = 0;
            gained += u64::from(row[i]);
            i += 2;
        } else {
            i += 1;
        }
    }
    gained
}

// ============================================================================
// SPAWN
// ============================================================================

/// Place a 2 or 4 on a uniformly chosen empty cell
///
/// Returns the cell filled, or `None` when the grid is full.
pub fn spawn_tile<S: TileSource>(grid: &mut Grid, source: &mut S) -> Option<(usize, usize)> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[source.pick_cell(empty.len())];
    grid.set(row, col, source.pick_value());
    Some((row, col))
}

// ============================================================================
// TERMINAL DETECTION
// ============================================================================

/// True when the grid is full and no two orthogonal neighbours match
pub fn is_game_over(grid: &Grid) -> bool {
    let cells = grid.rows();
    for r in 0..SIZE {
        for c in 0..SIZE {
            let value = cells[r][c];
            if value == 0 {
                return false;
            }
            if c + 1 < SIZE && cells[r][c + 1] == value {
                return false;
            }
            if r + 1 < SIZE && cells[r + 1][c] == value {
                return false;
            }
        }
    }
    true
}

// ============================================================================
// MOVE ORCHESTRATION
// ============================================================================

/// Result of applying one move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub score: u64,
    pub changed: bool,
    pub game_over: bool,
    /// Cell that received the new tile, if any
    pub spawned: Option<(usize, usize)>,
}

/// Apply `direction` to `grid`
///
/// A move that leaves the layout untouched is rejected: grid and score come
/// back unchanged and nothing is spawned, but `game_over` is still evaluated
/// for the current grid.
pub fn apply_move<S: TileSource>(
    grid: &Grid,
    score: u64,
    direction: Direction,
    source: &mut S,
) -> MoveOutcome {
    let turns = direction.quarter_turns();
    let canonical = grid.rotated(turns);

    // Trial at zero score: only the layout decides whether the move counts
    let trial = slide_left_and_merge(&canonical, 0);
    if trial.grid == canonical {
        return MoveOutcome {
            grid: *grid,
            score,
            changed: false,
            game_over: is_game_over(grid),
            spawned: None,
        };
    }

    let mut next = trial.grid.rotated((4 - turns) % 4);
    let spawned = spawn_tile(&mut next, source);

    MoveOutcome {
        grid: next,
        score: score + trial.score,
        changed: true,
        game_over: is_game_over(&next),
        spawned,
    }
}

// ============================================================================
// TESTS
// ============================================================================
