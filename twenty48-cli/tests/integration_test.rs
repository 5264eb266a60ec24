//! Integration tests for the twenty48 binary

use serde_json::Value;
use std::process::{Command, Output};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn twenty48(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_twenty48"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run twenty48")
}

fn autoplay_json(seed: &str) -> Value {
    let output = twenty48(&[
        "autoplay", "--games", "3", "--max-moves", "100", "--json", "--seed", seed,
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ============================================================================
// AUTOPLAY
// ============================================================================

#[test]
fn test_autoplay_json_report() {
    let report = autoplay_json("7");

    let games = report["games"].as_array().unwrap();
    assert_eq!(games.len(), 3);
    for (i, game) in games.iter().enumerate() {
        assert_eq!(game["index"], i);
        assert_eq!(game["seed"], 7 + i as u64);
        assert!(game["moves"].as_u64().unwrap() <= 100);

        let grid = game["grid"].as_array().unwrap();
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|row| row.as_array().unwrap().len() == 4));
    }

    let best = report["best_score"].as_u64().unwrap();
    assert!(games.iter().all(|g| g["score"].as_u64().unwrap() <= best));
    assert!(report["mean_score"].as_f64().unwrap() <= best as f64);
}

#[test]
fn test_autoplay_is_reproducible() {
    assert_eq!(autoplay_json("11"), autoplay_json("11"));
}

#[test]
fn test_autoplay_text_report() {
    let output = twenty48(&["autoplay", "--games", "2", "--max-moves", "20", "--seed", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mean score:"));
    assert!(stdout.contains("Best score:"));
}

#[test]
fn test_autoplay_zero_games_fails() {
    let output = twenty48(&["autoplay", "--games", "0"]);
    assert!(!output.status.success());
}

// ============================================================================
// SERVE
// ============================================================================

#[test]
fn test_serve_rejects_port_zero() {
    let output = twenty48(&["serve", "--port", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("non-zero"));
}
