use crate::config::SearchConfig;
use crate::engine::{Board, Direction};
use crate::error::{PuzzleError, Result};
use crate::frontier::Frontier;
use crate::heuristics::Heuristic;
use crate::node::SearchTree;
use std::fmt;

/// Frontier policy for a search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Unbounded best-first search ordered by `g + h` (A*-style).
    BestFirst,
    /// Best-first search whose frontier is cut down to the `width` best nodes
    /// after every expansion. Incomplete: it can miss a reachable goal.
    Beam { width: usize },
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BestFirst => write!(f, "A-star"),
            Strategy::Beam { width } => write!(f, "beam({})", width),
        }
    }
}

/// Represents a solution found by the search engine.
#[derive(Clone, Debug)]
pub struct SolutionReport {
    /// Moves from the start board to the goal, in order.
    pub moves: Vec<Direction>,
    /// Board after each step, starting with the start board itself.
    /// Always one longer than `moves`.
    pub boards: Vec<Board>,
    /// Number of moves on the path (g of the goal node).
    pub path_cost: u32,
    /// Nodes popped from the frontier, the goal node included.
    pub nodes_examined: u64,
    /// Nodes created during the run, the root included.
    pub nodes_generated: usize,
    /// Largest frontier size seen during the run.
    pub peak_frontier: usize,
}

impl SolutionReport {
    pub fn start_board(&self) -> Board {
        self.boards[0]
    }

    pub fn final_board(&self) -> Board {
        self.boards[self.boards.len() - 1]
    }
}

/// Solves from `initial` with unbounded best-first search.
///
/// Fails with [`PuzzleError::ResourceExceeded`] once `node_bound` nodes have
/// been popped without reaching the goal. The goal test runs before the bound
/// check, so a start board that is already solved succeeds even with a bound
/// of 0.
///
/// # Examples
/// ```
/// use eight_puzzle::heuristics::Heuristic;
/// use eight_puzzle::solver::run_best_first;
/// use eight_puzzle::utils::parse_board;
///
/// let board = parse_board("1b2 345 678").unwrap();
/// let report = run_best_first(board, Heuristic::MisplacedTiles, 10).unwrap();
/// assert_eq!(report.path_cost, 1);
/// assert!(report.final_board().is_goal());
/// ```
pub fn run_best_first(initial: Board, heuristic: Heuristic, node_bound: u64) -> Result<SolutionReport> {
    search(initial, heuristic, None, node_bound)
}

/// Solves from `initial` with local beam search of width `beam_width`.
///
/// After each expansion the frontier keeps only its `beam_width` best nodes;
/// the rest are thrown away, so this can fail on solvable boards.
pub fn run_beam(
    initial: Board,
    heuristic: Heuristic,
    beam_width: usize,
    node_bound: u64,
) -> Result<SolutionReport> {
    if beam_width == 0 {
        return Err(PuzzleError::invalid("beam width must be at least 1"));
    }
    search(initial, heuristic, Some(beam_width), node_bound)
}

fn search(
    initial: Board,
    heuristic: Heuristic,
    beam_width: Option<usize>,
    node_bound: u64,
) -> Result<SolutionReport> {
    let mut tree = SearchTree::new();
    let mut frontier = Frontier::new();

    let root = tree.add_root(initial, heuristic.evaluate(&initial));
    frontier.push(root, tree[root].total_cost());

    let mut nodes_examined: u64 = 0;
    let mut peak_frontier = frontier.len();

    loop {
        let entry = frontier.pop().ok_or(PuzzleError::FrontierExhausted {
            examined: nodes_examined,
        })?;
        nodes_examined += 1;

        let current = entry.node;
        let board = tree[current].board;

        if board.is_goal() {
            let (moves, boards) = tree.reconstruct_path(current);
            let path_cost = tree[current].cost;
            tracing::info!(
                heuristic = %heuristic,
                beam_width = ?beam_width,
                cost = path_cost,
                examined = nodes_examined,
                generated = tree.len(),
                "Solution found"
            );
            return Ok(SolutionReport {
                moves,
                boards,
                path_cost,
                nodes_examined,
                nodes_generated: tree.len(),
                peak_frontier,
            });
        }

        // The goal test comes first, so a bound of 0 still accepts a solved start.
        if nodes_examined >= node_bound {
            tracing::info!(
                heuristic = %heuristic,
                beam_width = ?beam_width,
                examined = nodes_examined,
                generated = tree.len(),
                "Node limit reached without finding the goal"
            );
            return Err(PuzzleError::ResourceExceeded {
                limit: node_bound,
                examined: nodes_examined,
            });
        }

        // No closed set: a board can re-enter the frontier along another path.
        for direction in Direction::ALL {
            if let Some(next) = board.try_move(direction) {
                let child = tree.add_child(current, direction, next, heuristic.evaluate(&next));
                frontier.push(child, tree[child].total_cost());
            }
        }
        peak_frontier = peak_frontier.max(frontier.len());

        let discarded = match beam_width {
            Some(k) => frontier.truncate(k),
            None => 0,
        };

        tracing::debug!(
            examined = nodes_examined,
            total_cost = entry.total_cost,
            frontier = frontier.len(),
            discarded,
            "Expanded node"
        );
    }
}

/// Runs searches with the bound and defaults from a [`SearchConfig`].
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Self {
        Solver { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Solves with the configured default heuristic.
    pub fn solve(&self, initial: Board, strategy: Strategy) -> Result<SolutionReport> {
        self.solve_with(initial, strategy, self.config.heuristic)
    }

    pub fn solve_with(
        &self,
        initial: Board,
        strategy: Strategy,
        heuristic: Heuristic,
    ) -> Result<SolutionReport> {
        tracing::debug!(
            strategy = %strategy,
            heuristic = %heuristic,
            max_nodes = self.config.max_nodes,
            "Starting search"
        );
        match strategy {
            Strategy::BestFirst => run_best_first(initial, heuristic, self.config.max_nodes),
            Strategy::Beam { width } => run_beam(initial, heuristic, width, self.config.max_nodes),
        }
    }
}
