//! # 8-Puzzle Solver Library
//!
//! This library explores the state space of the 8-puzzle (a 3x3 sliding-tile
//! board with one blank) to find a move sequence from a start board to the
//! goal `b12 345 678`.
//!
//! It is used by three binaries:
//! - `puzzle_script`: runs a file of commands (`setState`, `move`, `solve`, ...).
//! - `solve`: solves a single board given on the command line.
//! - `heuristic_evaluator`: compares strategy/heuristic pairs over seeded scrambles.
//!
//! ## Modules
//! - `engine`: the `Board` and `Direction` types, move rules and scrambling.
//! - `heuristics`: misplaced-tiles (h1) and Manhattan-distance (h2) estimates.
//! - `node`: the search tree arena and path reconstruction.
//! - `frontier`: the priority frontier ordered by `g + h`.
//! - `solver`: best-first and beam search, and the `SolutionReport`.
//! - `config`: `SearchConfig`, loadable from TOML.
//! - `utils`: parsing of board descriptions and script commands.
//! - `script`: the command script runner.
//! - `error`: the `PuzzleError` type.

pub mod config;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod script;
pub mod solver;
pub mod utils;

pub use config::SearchConfig;
pub use engine::{Board, Direction};
pub use error::{PuzzleError, Result};
pub use heuristics::Heuristic;
pub use solver::{run_beam, run_best_first, SolutionReport, Solver, Strategy};
