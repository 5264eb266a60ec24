//! Autoplay command - play seeded random games in parallel
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_games(), report_results()
//! - Level 3: play_single_game(), choose_direction()
//! - Level 4: formatting

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use twenty48_core::{slide_left_and_merge, Direction, Game, GameRng, Grid, ALL_DIRECTIONS};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct AutoplayArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Maximum moves per game
    #[arg(long, default_value = "5000")]
    pub max_moves: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of one finished game
#[derive(Clone, Debug, Serialize)]
struct GameReport {
    index: usize,
    seed: u64,
    score: u64,
    max_tile: u32,
    moves: u32,
    game_over: bool,
    grid: Grid,
}

/// All games plus aggregate numbers
#[derive(Clone, Debug, Serialize)]
struct AutoplaySummary {
    games: Vec<GameReport>,
    mean_score: f64,
    best_score: u64,
    /// max tile -> number of games that reached it
    max_tile_counts: BTreeMap<u32, usize>,
    #[serde(skip)]
    elapsed: Duration,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run autoplay command
///
/// This function reads like a table of contents:
/// 1. Play all games in parallel
/// 2. Summarize and report
pub fn run(args: AutoplayArgs, seed: Option<u64>) -> Result<()> {
    if args.games == 0 {
        anyhow::bail!("--games must be at least 1");
    }

    let base_seed = seed.unwrap_or(42);
    tracing::info!(
        "Autoplaying {} games (max {} moves, base seed {})",
        args.games,
        args.max_moves,
        base_seed
    );

    let start = Instant::now();
    let reports = play_games(args.games, args.max_moves, base_seed);
    let summary = summarize(reports, start.elapsed());

    report_results(&summary, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play games in parallel using rayon; game `i` uses `base_seed + i`
fn play_games(games: usize, max_moves: u32, base_seed: u64) -> Vec<GameReport> {
    (0..games)
        .into_par_iter()
        .map(|index| {
            let seed = base_seed.wrapping_add(index as u64);
            play_single_game(index, seed, max_moves)
        })
        .collect()
}

fn summarize(games: Vec<GameReport>, elapsed: Duration) -> AutoplaySummary {
    let total: u64 = games.iter().map(|g| g.score).sum();
    let mean_score = total as f64 / games.len().max(1) as f64;
    let best_score = games.iter().map(|g| g.score).max().unwrap_or(0);

    let mut max_tile_counts = BTreeMap::new();
    for game in &games {
        *max_tile_counts.entry(game.max_tile).or_insert(0) += 1;
    }

    AutoplaySummary {
        games,
        mean_score,
        best_score,
        max_tile_counts,
        elapsed,
    }
}

/// Report results as text or JSON
fn report_results(summary: &AutoplaySummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print_text_results(summary);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game with a uniformly random choice among effective moves
fn play_single_game(index: usize, seed: u64, max_moves: u32) -> GameReport {
    let mut tiles = GameRng::new(seed);
    let mut policy = ChaCha8Rng::seed_from_u64(seed ^ 0x2048);
    let mut game = Game::new(&mut tiles);
    let mut moves = 0;

    while !game.game_over && moves < max_moves {
        let Some(direction) = choose_direction(&game.grid, &mut policy) else {
            break;
        };
        game.play(direction, &mut tiles);
        moves += 1;
    }

    tracing::debug!("Game {} finished: score {} after {} moves", index, game.score, moves);

    GameReport {
        index,
        seed,
        score: game.score,
        max_tile: game.max_tile(),
        moves,
        game_over: game.game_over,
        grid: game.grid,
    }
}

/// Random direction among those that change the grid
fn choose_direction(grid: &Grid, rng: &mut ChaCha8Rng) -> Option<Direction> {
    let effective: Vec<Direction> = ALL_DIRECTIONS
        .iter()
        .copied()
        .filter(|dir| slide_left_and_merge(&grid.rotated(dir.quarter_turns()), 0).changed)
        .collect();
    effective.choose(rng).copied()
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn print_text_results(summary: &AutoplaySummary) {
    println!("{:>5} {:>20} {:>8} {:>6} {:>6}", "game", "seed", "score", "max", "moves");
    for game in &summary.games {
        println!(
            "{:>5} {:>20} {:>8} {:>6} {:>6}",
            game.index, game.seed, game.score, game.max_tile, game.moves
        );
    }
    println!();
    println!("Mean score: {:.1}", summary.mean_score);
    println!("Best score: {}", summary.best_score);
    for (tile, count) in &summary.max_tile_counts {
        println!("  reached {:>5}: {} game(s)", tile, count);
    }
    if let Some(best) = summary.games.iter().max_by_key(|g| g.score) {
        println!();
        println!("Best final grid (game {}):", best.index);
        print!("{}", best.grid);
    }
    println!("Elapsed: {:.2?}", summary.elapsed);
}

// ============================================================================
// TESTS
// ============================================================================
