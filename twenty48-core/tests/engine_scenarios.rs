//! Integration tests for twenty48-core
//!
//! Engine scenarios, full games and the session store through the public API

use twenty48_core::{
    apply_move, is_game_over, Direction, Game, GameError, GameRng, Grid, ScriptedTiles,
    SessionStore, ALL_DIRECTIONS,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn single_row(row: [u32; 4]) -> Grid {
    Grid::new([row, [0; 4], [0; 4], [0; 4]])
}

/// No zeros and no equal neighbours
fn alternating() -> Grid {
    Grid::new([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]])
}

// ============================================================================
// ENGINE SCENARIOS
// ============================================================================

#[test]
fn test_left_merge_scenario() {
    let mut rng = GameRng::new(2048);
    let outcome = apply_move(&single_row([2, 2, 0, 0]), 0, Direction::Left, &mut rng);

    assert!(outcome.changed);
    assert_eq!(outcome.score, 4);
    assert_eq!(outcome.grid.get(0, 0), 4);

    // Exactly one new tile, somewhere other than the merged cell
    assert_eq!(outcome.grid.tile_count(), 2);
    let (r, c) = outcome.spawned.unwrap();
    assert_ne!((r, c), (0, 0));
    assert!(matches!(outcome.grid.get(r, c), 2 | 4));
}

#[test]
fn test_right_slide_scenario() {
    let mut tiles = ScriptedTiles::new(vec![14], vec![2]);
    let outcome = apply_move(&single_row([2, 0, 0, 0]), 0, Direction::Right, &mut tiles);

    assert!(outcome.changed);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.grid.rows()[0], [0, 0, 0, 2]);
    // 15 empty cells after the slide; index 14 is the bottom-right corner
    assert_eq!(outcome.spawned, Some((3, 3)));
}

#[test]
fn test_right_wall_scenario() {
    let grid = single_row([0, 0, 0, 2]);
    let mut rng = GameRng::new(0);
    let outcome = apply_move(&grid, 0, Direction::Right, &mut rng);

    assert!(!outcome.changed);
    assert_eq!(outcome.grid, grid);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.spawned, None);
}

#[test]
fn test_game_over_detection() {
    assert!(is_game_over(&alternating()));

    let mut with_hole = alternating();
    with_hole.set(0, 0, 0);
    assert!(!is_game_over(&with_hole));
}

// ============================================================================
// FULL GAMES
// ============================================================================

#[test]
fn test_full_game_invariants() {
    let mut rng = GameRng::new(31337);
    let mut game = Game::new(&mut rng);
    let mut moves = 0;

    while !game.game_over && moves < 10_000 {
        let before = game;
        let dir = ALL_DIRECTIONS[moves % 4];
        let outcome = game.play(dir, &mut rng);

        assert!(game.score >= before.score);
        if outcome.changed {
            assert!(game.grid.tile_count() <= before.grid.tile_count() + 1);
        } else {
            assert_eq!(game.grid, before.grid);
        }
        for row in game.grid.rows() {
            for &v in row {
                assert!(v == 0 || v.is_power_of_two());
            }
        }
        moves += 1;
    }

    assert!(game.game_over);
    assert!(is_game_over(&game.grid));
}

// ============================================================================
// SESSIONS
// ============================================================================

#[test]
fn test_session_lifecycle() {
    let store = SessionStore::with_seed(8);
    let game = store.start_game();

    let moved = store.apply_move(&game.id, Direction::Down).unwrap();
    assert_eq!(moved.id, game.id);
    assert_eq!(store.snapshot(&game.id).unwrap(), moved);

    let err = store.apply_move("unknown", Direction::Up).unwrap_err();
    assert!(matches!(err, GameError::SessionNotFound(_)));
    assert_eq!(store.len(), 1);
}
