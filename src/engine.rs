//! Board representation and move rules for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Direction`: the four ways the blank can slide.
//! - `Board`: an immutable 3x3 grid of tiles with a cached blank position,
//!   plus move application, goal detection and scrambling.
use crate::error::{PuzzleError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Tile value used for the blank cell.
pub const BLANK: u8 = 0;

/// The fixed goal layout: blank top-left, then tiles in row-major order.
pub const GOAL_GRID: [[u8; BOARD_SIZE]; BOARD_SIZE] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// A direction the blank moves in.
///
/// `Up` moves the blank to the row above (the tile above slides down), and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the search engine expands them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column offset of the cell the blank moves into.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Direction;
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Lower-case name, matching the script syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Picks one of the four directions uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..4u8) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Right,
            _ => unreachable!("Generated value out of range"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PuzzleError;

    /// Parses `up`, `down`, `left` or `right` (any case). Anything else,
    /// including `none`, is an `InvalidArgument`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(PuzzleError::invalid(format!(
                "unknown direction '{}', expected one of up, down, left, right",
                s
            ))),
        }
    }
}

/// A 3x3 puzzle board.
///
/// Boards are small `Copy` values. Every operation that changes the layout
/// returns a new board, so a board held by a search node is never modified
/// after it is created.
///
/// Invariant: the values 0-8 each appear exactly once and `blank` always
/// points at the cell holding 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
    blank: (usize, usize),
}

impl Board {
    /// Returns the goal board.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Board;
    /// let goal = Board::goal();
    /// assert!(goal.is_goal());
    /// assert_eq!(goal.blank(), (0, 0));
    /// ```
    pub fn goal() -> Self {
        Board {
            grid: GOAL_GRID,
            blank: (0, 0),
        }
    }

    /// Builds a board from a raw grid.
    ///
    /// # Arguments
    /// * `grid`: tile values in row-major order, with 0 for the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` with the blank position located.
    /// * `Err(PuzzleError::InvalidArgument)` if a value is outside 0-8 or
    ///   appears more than once.
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        let mut seen = [false; BOARD_SIZE * BOARD_SIZE];
        let mut blank = None;

        for (r, row) in grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let idx = value as usize;
                if idx >= seen.len() {
                    return Err(PuzzleError::invalid(format!(
                        "tile value {} at ({}, {}) is out of range 0-8",
                        value, r, c
                    )));
                }
                if seen[idx] {
                    return Err(PuzzleError::invalid(format!(
                        "tile value {} appears more than once",
                        value
                    )));
                }
                seen[idx] = true;
                if value == BLANK {
                    blank = Some((r, c));
                }
            }
        }

        // Nine cells, nine distinct values in 0-8: the blank is always present here.
        let blank = blank.ok_or_else(|| PuzzleError::invalid("board has no blank"))?;
        Ok(Board { grid, blank })
    }

    /// Returns the tile at (`r`, `c`); 0 is the blank.
    ///
    /// # Panics
    /// Panics if `r` or `c` is 3 or more.
    pub fn tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    /// Row-major cell values, with [`BLANK`] marking the blank.
    ///
    /// ```
    /// use eight_puzzle::engine::{Board, GOAL_GRID};
    ///
    /// assert_eq!(Board::goal().grid(), &GOAL_GRID);
    /// ```
    pub fn grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Slides the blank one cell in `direction`.
    ///
    /// Returns a new board with the blank swapped with its neighbour. When the
    /// blank already sits on that edge the board is returned unchanged; this is
    /// a no-op, not an error.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::{Board, Direction};
    /// let goal = Board::goal();
    /// // Blank is top-left, so moving up or left does nothing.
    /// assert_eq!(goal.apply_move(Direction::Up), goal);
    /// let moved = goal.apply_move(Direction::Right);
    /// assert_eq!(moved.blank(), (0, 1));
    /// assert_eq!(moved.tile(0, 0), 1);
    /// ```
    pub fn apply_move(&self, direction: Direction) -> Board {
        let (r, c) = self.blank;
        let (dr, dc) = direction.offset();
        let nr = r as isize + dr;
        let nc = c as isize + dc;

        if nr < 0 || nr >= BOARD_SIZE as isize || nc < 0 || nc >= BOARD_SIZE as isize {
            return *self;
        }

        let (nr, nc) = (nr as usize, nc as usize);
        let mut next = *self;
        next.grid[r][c] = next.grid[nr][nc];
        next.grid[nr][nc] = BLANK;
        next.blank = (nr, nc);
        next
    }

    /// Applies `direction` only if it actually moves the blank.
    pub fn try_move(&self, direction: Direction) -> Option<Board> {
        let next = self.apply_move(direction);
        if next != *self {
            Some(next)
        } else {
            None
        }
    }

    /// True when every cell matches `b12 345 678`.
    ///
    /// ```
    /// use eight_puzzle::engine::{Board, Direction};
    ///
    /// assert!(Board::goal().is_goal());
    /// assert!(!Board::goal().apply_move(Direction::Right).is_goal());
    /// ```
    pub fn is_goal(&self) -> bool {
        self.grid == GOAL_GRID
    }

    /// Applies `moves` uniformly random directions drawn from `rng`.
    ///
    /// A direction that would push the blank off the board still counts as one
    /// of the `moves`, so the blank can end up fewer than `moves` steps away.
    /// Only legal slides are ever applied, which keeps the result solvable.
    pub fn scramble(&self, moves: usize, rng: &mut impl Rng) -> Board {
        (0..moves).fold(*self, |board, _| board.apply_move(Direction::random(rng)))
    }

    /// Same as [`Board::scramble`] with a `SmallRng` seeded from `seed`, so the
    /// same seed always produces the same board.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Board;
    /// let a = Board::goal().scramble_with_seed(30, 7);
    /// let b = Board::goal().scramble_with_seed(30, 7);
    /// assert_eq!(a, b);
    /// ```
    pub fn scramble_with_seed(&self, moves: usize, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.scramble(moves, &mut rng)
    }

    /// Renders the board in the description syntax accepted by
    /// [`crate::utils::parse_board`], e.g. `"b12 345 678"`.
    pub fn to_description(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().map(|&v| tile_char(v)).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::goal()
    }
}

fn tile_char(value: u8) -> char {
    if value == BLANK {
        'b'
    } else {
        (b'0' + value) as char
    }
}

impl fmt::Display for Board {
    /// Three rows of space-separated tiles with the blank shown as `b`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|&v| tile_char(v).to_string()).collect();
            write!(f, "{}", cells.join(" "))?;
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: [[u8; 3]; 3]) -> Board {
        Board::from_grid(grid).unwrap()
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal();
        assert!(goal.is_goal());
        assert_eq!(goal.blank(), (0, 0));
        assert_eq!(goal.grid(), &GOAL_GRID);
        assert_eq!(Board::default(), goal);
    }

    #[test]
    fn test_from_grid_locates_blank() {
        let b = board([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        assert_eq!(b.blank(), (1, 1));
        assert_eq!(b.tile(1, 1), BLANK);
        assert!(!b.is_goal());
    }

    #[test]
    fn test_from_grid_rejects_duplicates_and_out_of_range() {
        assert!(Board::from_grid([[1, 1, 2], [3, 4, 5], [6, 7, 8]]).is_err());
        assert!(Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 9]]).is_err());
    }

    #[test]
    fn test_apply_move_each_direction_from_center() {
        let center = board([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);

        let up = center.apply_move(Direction::Up);
        assert_eq!(up.blank(), (0, 1));
        assert_eq!(up.tile(1, 1), 2);

        let down = center.apply_move(Direction::Down);
        assert_eq!(down.blank(), (2, 1));
        assert_eq!(down.tile(1, 1), 7);

        let left = center.apply_move(Direction::Left);
        assert_eq!(left.blank(), (1, 0));
        assert_eq!(left.tile(1, 1), 4);

        let right = center.apply_move(Direction::Right);
        assert_eq!(right.blank(), (1, 2));
        assert_eq!(right.tile(1, 1), 5);

        // Original is untouched.
        assert_eq!(center.blank(), (1, 1));
    }

    #[test]
    fn test_apply_move_at_edge_is_noop() {
        let goal = Board::goal();
        assert_eq!(goal.apply_move(Direction::Up), goal);
        assert_eq!(goal.apply_move(Direction::Left), goal);
        assert!(goal.try_move(Direction::Up).is_none());
        assert!(goal.try_move(Direction::Down).is_some());

        let corner = board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(corner.apply_move(Direction::Down), corner);
        assert_eq!(corner.apply_move(Direction::Right), corner);
    }

    #[test]
    fn test_move_then_opposite_restores_board() {
        // Walk a few scrambled boards and check every direction from each.
        for seed in 0..20u64 {
            let start = Board::goal().scramble_with_seed(25, seed);
            for dir in Direction::ALL {
                let moved = start.apply_move(dir);
                if moved == start {
                    // Edge no-op: the inverse must not be applied from a different
                    // position, and repeating the no-op is idempotent.
                    assert_eq!(moved.apply_move(dir), start);
                } else {
                    assert_eq!(moved.apply_move(dir.opposite()), start);
                }
            }
        }
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("right".parse::<Direction>().unwrap(), Direction::Right);
        assert!(matches!(
            "none".parse::<Direction>(),
            Err(PuzzleError::InvalidArgument(_))
        ));
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn test_scramble_with_seed_determinism() {
        let a = Board::goal().scramble_with_seed(50, 514514);
        let b = Board::goal().scramble_with_seed(50, 514514);
        assert_eq!(a, b);
        // The blank cache must still agree with the grid.
        let (r, c) = a.blank();
        assert_eq!(a.tile(r, c), BLANK);
        assert_eq!(Board::from_grid(*a.grid()).unwrap(), a);
    }

    #[test]
    fn test_scramble_zero_moves_is_identity() {
        assert_eq!(Board::goal().scramble_with_seed(0, 1), Board::goal());
    }

    #[test]
    fn test_display_and_description() {
        let b = board([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(b.to_string(), "1 b 2\n3 4 5\n6 7 8");
        assert_eq!(b.to_description(), "1b2 345 678");
        assert_eq!(Board::goal().to_description(), "b12 345 678");
    }
}
