use crate::engine::{Board, Direction, BOARD_SIZE};
use crate::error::{PuzzleError, Result};
use crate::heuristics::Heuristic;
use crate::solver::Strategy;

/// Symbols a board description must contain, each exactly once.
const DESCRIPTION_SYMBOLS: [char; 9] = ['b', '1', '2', '3', '4', '5', '6', '7', '8'];

/// Parses a textual board description into a `Board`.
///
/// Whitespace is ignored. What remains must be exactly nine symbols, using
/// each of `b` (the blank) and `1`-`8` once, laid out row-major: the first
/// three symbols are row 0, and so on.
///
/// # Arguments
/// * `description`: e.g. `"b12 345 678"` or `"b12345678"`.
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(PuzzleError::InvalidArgument)` if:
///     - The description does not have exactly nine symbols.
///     - A symbol outside `b`, `1`-`8` is used.
///     - A symbol is missing or repeated.
///
/// # Examples
/// ```
/// use eight_puzzle::utils::parse_board;
///
/// let board = parse_board("b12 345 678").unwrap();
/// assert!(board.is_goal());
/// assert_eq!(board.blank(), (0, 0));
///
/// let board = parse_board("1b2 345 678").unwrap();
/// assert_eq!(board.blank(), (0, 1));
/// assert_eq!(board.tile(0, 0), 1);
///
/// assert!(parse_board("b12 345 67").is_err());
/// assert!(parse_board("b12 345 677").is_err());
/// ```
pub fn parse_board(description: &str) -> Result<Board> {
    let symbols: Vec<char> = description.chars().filter(|c| !c.is_whitespace()).collect();

    if symbols.len() != BOARD_SIZE * BOARD_SIZE {
        return Err(PuzzleError::invalid(format!(
            "board description '{}' has {} symbols, expected {}",
            description,
            symbols.len(),
            BOARD_SIZE * BOARD_SIZE
        )));
    }

    for required in DESCRIPTION_SYMBOLS {
        let count = symbols.iter().filter(|&&s| s == required).count();
        if count != 1 {
            return Err(PuzzleError::invalid(format!(
                "board description '{}' must contain '{}' exactly once, found {}",
                description, required, count
            )));
        }
    }

    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (i, symbol) in symbols.into_iter().enumerate() {
        // Every symbol is known to be 'b' or a digit 1-8 at this point.
        grid[i / BOARD_SIZE][i % BOARD_SIZE] = match symbol {
            'b' => 0,
            digit => digit.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                PuzzleError::invalid(format!("unrecognized symbol '{}'", digit))
            })?,
        };
    }

    Board::from_grid(grid)
}

/// One line of a command script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `setState b12 345 678`
    SetState(Board),
    /// `randomizeState 20`
    Randomize(usize),
    /// `printState`
    PrintState,
    /// `move up`
    Move(Direction),
    /// `solve A-star h2` or `solve beam 10 [h1]`. A missing heuristic means
    /// "use the configured default".
    Solve {
        strategy: Strategy,
        heuristic: Option<Heuristic>,
    },
    /// `maxNodes 5000`
    MaxNodes(u64),
}

/// Parses one script line.
///
/// Blank lines and lines starting with `#` yield `Ok(None)`. Command names are
/// matched case-insensitively.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let name = tokens[0];
    let args = &tokens[1..];

    let command = match name.to_ascii_lowercase().as_str() {
        "setstate" => {
            if args.is_empty() {
                return Err(PuzzleError::invalid("setState needs a board description"));
            }
            Command::SetState(parse_board(&args.join(" "))?)
        }
        "randomizestate" => Command::Randomize(parse_number(name, args)?),
        "printstate" => {
            expect_args(name, args, 0)?;
            Command::PrintState
        }
        "move" => {
            expect_args(name, args, 1)?;
            Command::Move(args[0].parse::<Direction>()?)
        }
        "solve" => parse_solve(args)?,
        "maxnodes" => Command::MaxNodes(parse_number(name, args)?),
        _ => {
            return Err(PuzzleError::invalid(format!("unknown command '{}'", name)));
        }
    };
    Ok(Some(command))
}

fn parse_solve(args: &[&str]) -> Result<Command> {
    let algorithm = args
        .first()
        .ok_or_else(|| PuzzleError::invalid("solve needs an algorithm: A-star or beam"))?;

    match algorithm.to_ascii_lowercase().as_str() {
        "a-star" | "astar" => {
            if args.len() > 2 {
                return Err(PuzzleError::invalid("usage: solve A-star [h1|h2]"));
            }
            let heuristic = args.get(1).map(|h| h.parse::<Heuristic>()).transpose()?;
            Ok(Command::Solve {
                strategy: Strategy::BestFirst,
                heuristic,
            })
        }
        "beam" => {
            if args.len() < 2 || args.len() > 3 {
                return Err(PuzzleError::invalid("usage: solve beam <k> [h1|h2]"));
            }
            let width: usize = args[1].parse().map_err(|_| {
                PuzzleError::invalid(format!("beam width '{}' is not a number", args[1]))
            })?;
            if width == 0 {
                return Err(PuzzleError::invalid("beam width must be at least 1"));
            }
            let heuristic = args.get(2).map(|h| h.parse::<Heuristic>()).transpose()?;
            Ok(Command::Solve {
                strategy: Strategy::Beam { width },
                heuristic,
            })
        }
        other => Err(PuzzleError::invalid(format!(
            "unknown search algorithm '{}', expected A-star or beam",
            other
        ))),
    }
}

fn expect_args(name: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() != count {
        return Err(PuzzleError::invalid(format!(
            "{} takes {} argument(s), found {}",
            name,
            count,
            args.len()
        )));
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(name: &str, args: &[&str]) -> Result<T> {
    expect_args(name, args, 1)?;
    args[0]
        .parse()
        .map_err(|_| PuzzleError::invalid(format!("{} expects a number, found '{}'", name, args[0])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_goal() {
        let board = parse_board("b12 345 678").unwrap();
        assert!(board.is_goal());
        assert_eq!(board.blank(), (0, 0));
        assert_eq!(board.grid(), &[[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
    }

    #[test]
    fn test_parse_board_row_major_layout() {
        let board = parse_board("123\n4b5\t678").unwrap();
        assert_eq!(board.grid(), &[[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        assert_eq!(board.blank(), (1, 1));
    }

    #[test]
    fn test_parse_board_wrong_length() {
        let err = parse_board("b12 345 67").unwrap_err();
        assert!(err.to_string().contains("has 8 symbols"));
        assert!(parse_board("b12 345 6781").is_err());
        assert!(parse_board("").is_err());
    }

    #[test]
    fn test_parse_board_missing_or_duplicate_symbol() {
        // Duplicate 7, missing 8.
        let err = parse_board("b12 345 677").unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidArgument(_)));
        // Two blanks.
        assert!(parse_board("bb2 345 678").is_err());
        // Tile 0 is not part of the alphabet.
        assert!(parse_board("012 345 678").is_err());
        assert!(parse_board("x12 345 678").is_err());
    }

    #[test]
    fn test_parse_board_matches_description() {
        let board = Board::goal().scramble_with_seed(20, 9);
        assert_eq!(parse_board(&board.to_description()).unwrap(), board);
    }

    #[test]
    fn test_parse_command_basic() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   # a comment").unwrap(), None);
        assert_eq!(
            parse_command("setState 1b2 345 678").unwrap(),
            Some(Command::SetState(parse_board("1b2345678").unwrap()))
        );
        assert_eq!(parse_command("randomizeState 20").unwrap(), Some(Command::Randomize(20)));
        assert_eq!(parse_command("printState").unwrap(), Some(Command::PrintState));
        assert_eq!(
            parse_command("move left").unwrap(),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(parse_command("maxNodes 5000").unwrap(), Some(Command::MaxNodes(5000)));
    }

    #[test]
    fn test_parse_command_solve() {
        assert_eq!(
            parse_command("solve A-star h2").unwrap(),
            Some(Command::Solve {
                strategy: Strategy::BestFirst,
                heuristic: Some(Heuristic::ManhattanDistance),
            })
        );
        assert_eq!(
            parse_command("solve beam 10").unwrap(),
            Some(Command::Solve {
                strategy: Strategy::Beam { width: 10 },
                heuristic: None,
            })
        );
        assert_eq!(
            parse_command("solve beam 3 h1").unwrap(),
            Some(Command::Solve {
                strategy: Strategy::Beam { width: 3 },
                heuristic: Some(Heuristic::MisplacedTiles),
            })
        );
    }

    #[test]
    fn test_parse_command_errors() {
        assert!(parse_command("jump").is_err());
        assert!(parse_command("move diagonal").is_err());
        assert!(parse_command("move").is_err());
        assert!(parse_command("setState").is_err());
        assert!(parse_command("solve").is_err());
        assert!(parse_command("solve dfs").is_err());
        assert!(parse_command("solve A-star h3").is_err());
        assert!(parse_command("solve beam").is_err());
        assert!(parse_command("solve beam 0").is_err());
        assert!(parse_command("solve beam ten").is_err());
        assert!(parse_command("maxNodes -1").is_err());
        assert!(parse_command("randomizeState").is_err());
        assert!(parse_command("printState now").is_err());
    }
}
