//! End-to-end tests: scripts and config files on disk, and the CLI binaries.

use eight_puzzle::script::{ScriptRunner, ScriptSummary};
use eight_puzzle::utils::parse_board;
use eight_puzzle::{run_beam, run_best_first, Board, Heuristic, PuzzleError, SearchConfig};
use std::process::Command;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn seeded_config(seed: u64) -> SearchConfig {
    SearchConfig {
        seed: Some(seed),
        ..SearchConfig::default()
    }
}

fn run_script(config: SearchConfig, script: &str) -> (ScriptSummary, String) {
    let mut runner = ScriptRunner::new(config, Vec::new());
    let summary = runner.run_script(script).expect("script should run");
    (summary, String::from_utf8(runner.into_inner()).unwrap())
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

#[test]
fn test_goal_description_solves_immediately() {
    let board = parse_board("b12 345 678").unwrap();
    assert_eq!(board.blank(), (0, 0));
    assert_eq!(board.grid(), &[[0, 1, 2], [3, 4, 5], [6, 7, 8]]);

    let report = run_best_first(board, Heuristic::MisplacedTiles, 1).unwrap();
    assert_eq!(report.path_cost, 0);
    assert_eq!(report.boards.len(), 1);
}

#[test]
fn test_single_left_move_under_h1() {
    let board = parse_board("1b2 345 678").unwrap();
    let report = run_best_first(board, Heuristic::MisplacedTiles, 10).unwrap();
    assert_eq!(report.moves.len(), 1);
    assert_eq!(report.moves[0].to_string(), "left");
    assert_eq!(report.final_board(), Board::goal());
}

#[test]
fn test_scrambled_boards_solve_with_both_heuristics() {
    for seed in 100..106u64 {
        let start = Board::goal().scramble_with_seed(10, seed);
        for h in Heuristic::ALL {
            let report = run_best_first(start, h, 1_000_000).unwrap();
            assert!(report.final_board().is_goal());
            let replayed = report
                .moves
                .iter()
                .fold(start, |board, &dir| board.apply_move(dir));
            assert!(replayed.is_goal());
        }
    }
}

#[test]
fn test_beam_failure_is_recoverable() {
    let start = parse_board("876 543 21b").unwrap();
    let err = run_beam(start, Heuristic::ManhattanDistance, 1, 10).unwrap_err();
    assert!(matches!(err, PuzzleError::ResourceExceeded { limit: 10, .. }));
}

// ---------------------------------------------------------------------------
// Scripts and config files
// ---------------------------------------------------------------------------

#[test]
fn test_script_file_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("search.toml");
    std::fs::write(&config_path, "max_nodes = 500000\nheuristic = \"h2\"\nseed = 7\n").unwrap();

    let script_path = dir.path().join("commands.txt");
    std::fs::write(
        &script_path,
        "setState 142 3b5 678\nsolve A-star\nrandomizeState 12\nsolve A-star h1\nprintState\n",
    )
    .unwrap();

    let config = SearchConfig::load(&config_path).unwrap();
    let mut runner = ScriptRunner::new(config, Vec::new());
    let summary = runner.run_file(&script_path).unwrap();
    assert_eq!(summary.commands, 5);
    assert_eq!(summary.solved, 2);
    assert_eq!(summary.failed, 0);
    // The last solve leaves the runner at the goal.
    assert!(runner.board().is_goal());

    let out = String::from_utf8(runner.into_inner()).unwrap();
    assert!(out.starts_with("setState 142 3b5 678\n1 4 2\n3 b 5\n6 7 8\n"));
    assert!(out.contains("[up, left]"));
    assert!(out.trim_end().ends_with("printState\nb 1 2\n3 4 5\n6 7 8"));
}

#[test]
fn test_same_seed_same_transcript() {
    let script = "randomizeState 15\nsolve A-star h2\n";
    let (_, first) = run_script(seeded_config(3), script);
    let (_, second) = run_script(seeded_config(3), script);
    assert_eq!(first, second);
}

#[test]
fn test_script_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut runner = ScriptRunner::new(SearchConfig::default(), Vec::new());
    let err = runner.run_file(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, PuzzleError::Io(_)));
}

#[test]
fn test_script_bad_board_stops_run() {
    let mut runner = ScriptRunner::new(SearchConfig::default(), Vec::new());
    let err = runner
        .run_script("setState b12 345 678\nsetState b12 345 67\nprintState\n")
        .unwrap_err();
    match err {
        PuzzleError::InvalidArgument(msg) => assert!(msg.starts_with("line 2:"), "{}", msg),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Binaries
// ---------------------------------------------------------------------------

#[test]
fn test_solve_binary_one_move() {
    let output = Command::new(env!("CARGO_BIN_EXE_solve"))
        .args(["1b2 345 678", "--heuristic", "h2", "--max-nodes", "50"])
        .output()
        .expect("failed to run solve");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Moves (1):"), "{}", stdout);
    assert!(stdout.contains("Move 1: left"), "{}", stdout);
}

#[test]
fn test_solve_binary_rejects_bad_board() {
    let output = Command::new(env!("CARGO_BIN_EXE_solve"))
        .arg("b12 345 6")
        .output()
        .expect("failed to run solve");
    assert!(!output.status.success());
}

#[test]
fn test_puzzle_script_binary() {
    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("commands.txt");
    std::fs::write(&script_path, "setState 1b2 345 678\nsolve beam 2\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_puzzle_script"))
        .arg(&script_path)
        .args(["--seed", "1"])
        .output()
        .expect("failed to run puzzle_script");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Number of moves to solution: 1"), "{}", stdout);
}
