use anyhow::Context;
use clap::{Parser, ValueEnum};
use eight_puzzle::config::SearchConfig;
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::solver::{Solver, Strategy};
use eight_puzzle::utils::parse_board;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    /// Unbounded best-first (A*-style) search
    AStar,
    /// Local beam search
    Beam,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board description, e.g. "1b2 345 678" (b is the blank)
    board: String,

    /// Search algorithm
    #[clap(short, long, value_enum, default_value = "a-star")]
    algorithm: Algorithm,

    /// Heuristic: h1 (misplaced tiles) or h2 (Manhattan distance)
    #[clap(long)]
    heuristic: Option<Heuristic>,

    /// Beam width for --algorithm beam
    #[clap(short = 'k', long)]
    beam_width: Option<usize>,

    /// Maximum number of nodes to examine
    #[clap(short, long)]
    max_nodes: Option<u64>,

    /// TOML file with search defaults
    #[clap(long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[clap(short, long)]
    verbose: bool,
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn init_logging(verbose: bool) {
    let default_level = default_log_level(verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(max_nodes) = args.max_nodes {
        config.max_nodes = max_nodes;
    }
    if let Some(heuristic) = args.heuristic {
        config.heuristic = heuristic;
    }
    if let Some(width) = args.beam_width {
        config.beam_width = width;
    }
    config.validate()?;

    let board = parse_board(&args.board).context("Invalid board description")?;
    let strategy = match args.algorithm {
        Algorithm::AStar => Strategy::BestFirst,
        Algorithm::Beam => Strategy::Beam {
            width: config.beam_width,
        },
    };

    println!("Initial board state:\n{}\n", board);
    println!(
        "Searching with {} / {} (max {} nodes)...\n",
        strategy, config.heuristic, config.max_nodes
    );

    let solver = Solver::new(config);
    match solver.solve(board, strategy) {
        Ok(report) => {
            println!("Solution found:\n");
            println!("Moves ({}):", report.path_cost);
            if report.moves.is_empty() {
                println!("  No moves needed.");
            }
            for (i, (direction, board)) in report.moves.iter().zip(report.boards.iter().skip(1)).enumerate() {
                println!("  Move {}: {}\n{}\n", i + 1, direction, board);
            }
            println!("Nodes examined: {}", report.nodes_examined);
            println!("Nodes generated: {}", report.nodes_generated);
            println!("Peak frontier: {}", report.peak_frontier);
            Ok(())
        }
        Err(e) if e.is_resource_exceeded() => {
            println!("No solution found: {}", e);
            println!("Raise --max-nodes to search further.");
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_defaults_to_info() {
        let args = Args::parse_from(["solve", "1b2 345 678"]);
        assert!(!args.verbose);
        assert_eq!(default_log_level(args.verbose), "info");

        let args = Args::parse_from(["solve", "-v", "1b2 345 678"]);
        assert_eq!(default_log_level(args.verbose), "debug");
    }
}
