use crate::engine::{Board, BOARD_SIZE, GOAL_GRID};
use crate::error::{PuzzleError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Counts the cells whose value differs from the goal value at that cell.
///
/// The blank is compared like any other tile, so the result ranges over 0-9
/// and is 0 only for the goal board.
///
/// # Arguments
/// * `board`: A reference to the `Board` to analyze.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::Board;
/// use eight_puzzle::heuristics::misplaced_tiles;
/// assert_eq!(misplaced_tiles(&Board::goal()), 0);
/// ```
pub fn misplaced_tiles(board: &Board) -> u32 {
    let mut misplaced = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if board.tile(r, c) != GOAL_GRID[r][c] {
                misplaced += 1;
            }
        }
    }
    misplaced
}

/// Sums, over every cell, the grid distance between where its value sits and
/// where that value belongs in the goal layout.
///
/// The goal cell of value `v` is `(v / 3, v % 3)`. The blank is included in the
/// sum, so the result ranges over 0-24.
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let value = board.tile(r, c) as usize;
            let goal_r = value / BOARD_SIZE;
            let goal_c = value % BOARD_SIZE;
            distance += goal_r.abs_diff(r) + goal_c.abs_diff(c);
        }
    }
    distance as u32
}

/// Heuristic used to estimate the remaining distance to the goal.
///
/// Deserializes through [`FromStr`], so config files accept the same
/// case-insensitive names as scripts and the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Heuristic {
    /// h1: number of misplaced cells.
    #[default]
    MisplacedTiles,
    /// h2: sum of Manhattan distances.
    ManhattanDistance,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::MisplacedTiles, Heuristic::ManhattanDistance];

    /// Estimates the distance from `board` to the goal.
    pub fn evaluate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(board),
            Heuristic::ManhattanDistance => manhattan_distance(board),
        }
    }

    /// Short script name, `h1` or `h2`.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::MisplacedTiles => "h1",
            Heuristic::ManhattanDistance => "h2",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "h1" | "misplaced" => Ok(Heuristic::MisplacedTiles),
            "h2" | "manhattan" => Ok(Heuristic::ManhattanDistance),
            _ => Err(PuzzleError::invalid(format!(
                "unsupported heuristic '{}', only h1 and h2 are supported",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Heuristic {
    type Error = PuzzleError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
