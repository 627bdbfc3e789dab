//! Line-oriented command scripts.
//!
//! A script is a text file with one command per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! maxNodes 50000
//! setState 142 3b5 678
//! solve A-star h2
//! randomizeState 20
//! solve beam 10 h1
//! ```
//!
//! The runner echoes every command, prints the board after each command that
//! changes or shows it, and prints the move trace after each successful solve.

use crate::config::SearchConfig;
use crate::engine::Board;
use crate::error::{PuzzleError, Result};
use crate::solver::{SolutionReport, Solver};
use crate::utils::{parse_command, Command};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::Path;

/// Counters for one script run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub commands: usize,
    pub solved: usize,
    /// Solves that hit the node limit or ran out of frontier.
    pub failed: usize,
}

/// Executes script commands against a current board, writing to `out`.
pub struct ScriptRunner<W: Write> {
    out: W,
    board: Board,
    solver: Solver,
    rng: SmallRng,
}

impl<W: Write> ScriptRunner<W> {
    /// Starts from the goal board. Scrambling uses `config.seed` when set.
    pub fn new(config: SearchConfig, out: W) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        ScriptRunner {
            out,
            board: Board::goal(),
            solver: Solver::new(config),
            rng,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn max_nodes(&self) -> u64 {
        self.solver.config().max_nodes
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs every line of `script`.
    ///
    /// Invalid commands stop the run with an `InvalidArgument` naming the line.
    /// A solve that exceeds the node limit is reported in the output and the
    /// script carries on.
    pub fn run_script(&mut self, script: &str) -> Result<ScriptSummary> {
        let mut summary = ScriptSummary::default();

        for (idx, line) in script.lines().enumerate() {
            let line_no = idx + 1;
            let command = match parse_command(line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(PuzzleError::InvalidArgument(msg)) => {
                    return Err(PuzzleError::InvalidArgument(format!("line {}: {}", line_no, msg)));
                }
                Err(e) => return Err(e),
            };

            writeln!(self.out, "{}", line.trim())?;
            summary.commands += 1;

            match self.execute(&command) {
                Ok(Some(_)) => summary.solved += 1,
                Ok(None) => {}
                Err(e @ PuzzleError::ResourceExceeded { .. })
                | Err(e @ PuzzleError::FrontierExhausted { .. }) => {
                    tracing::warn!(line = line_no, error = %e, "Solve failed");
                    writeln!(self.out, "Search failed: {}", e)?;
                    summary.failed += 1;
                }
                Err(PuzzleError::InvalidArgument(msg)) => {
                    return Err(PuzzleError::InvalidArgument(format!("line {}: {}", line_no, msg)));
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            commands = summary.commands,
            solved = summary.solved,
            failed = summary.failed,
            "Script finished"
        );
        Ok(summary)
    }

    /// Reads `path` and runs it with [`ScriptRunner::run_script`].
    pub fn run_file(&mut self, path: &Path) -> Result<ScriptSummary> {
        let script = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "Running script");
        self.run_script(&script)
    }

    /// Executes one command. Returns the report when the command was a solve.
    pub fn execute(&mut self, command: &Command) -> Result<Option<SolutionReport>> {
        match command {
            Command::SetState(board) => {
                self.board = *board;
                self.print_board()?;
            }
            Command::Randomize(moves) => {
                self.board = self.board.scramble(*moves, &mut self.rng);
                self.print_board()?;
            }
            Command::PrintState => self.print_board()?,
            Command::Move(direction) => {
                self.board = self.board.apply_move(*direction);
                self.print_board()?;
            }
            Command::MaxNodes(limit) => {
                if *limit == 0 {
                    return Err(PuzzleError::invalid("maxNodes must be at least 1"));
                }
                let mut config = self.solver.config().clone();
                config.max_nodes = *limit;
                self.solver = Solver::new(config);
            }
            Command::Solve {
                strategy,
                heuristic,
            } => {
                let heuristic = heuristic.unwrap_or(self.solver.config().heuristic);
                let report = self.solver.solve_with(self.board, *strategy, heuristic)?;
                self.print_report(&report)?;
                self.board = report.final_board();
                return Ok(Some(report));
            }
        }
        Ok(None)
    }

    fn print_board(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.board)?;
        Ok(())
    }

    fn print_report(&mut self, report: &SolutionReport) -> Result<()> {
        for (direction, board) in report.moves.iter().zip(report.boards.iter().skip(1)) {
            writeln!(self.out, "Move {}", direction)?;
            writeln!(self.out, "{}", board)?;
        }
        writeln!(self.out, "Number of moves to solution: {}", report.path_cost)?;
        writeln!(self.out, "Number of nodes considered: {}", report.nodes_examined)?;
        let names: Vec<&str> = report.moves.iter().map(|d| d.as_str()).collect();
        writeln!(self.out, "[{}]", names.join(", "))?;
        Ok(())
    }
}
