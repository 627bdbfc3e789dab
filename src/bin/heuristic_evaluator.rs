use clap::Parser;
use eight_puzzle::engine::Board;
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::solver::{Solver, Strategy};
use eight_puzzle::SearchConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare search strategies and heuristics over seeded scrambles")]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Random moves applied to the goal to build each board
    #[clap(long, default_value_t = 20)]
    moves: usize,

    /// Seed of the first board; board i uses start_seed + i (wrapping)
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Beam width for the beam strategies
    #[clap(short = 'k', long, default_value_t = 10)]
    beam_width: usize,

    /// Node limit per search
    #[clap(short, long, default_value_t = 200_000)]
    max_nodes: u64,

    /// Log at debug level
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Default)]
struct Tally {
    solved: usize,
    failed: usize,
    total_cost: u64,
    total_examined: u64,
}

/// Seed of board `idx`; wraps so a start seed near `u64::MAX` stays valid.
fn board_seed(start_seed: u64, idx: usize) -> u64 {
    start_seed.wrapping_add(idx as u64)
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let default_level = default_log_level(args.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = SearchConfig {
        max_nodes: args.max_nodes,
        beam_width: args.beam_width,
        ..SearchConfig::default()
    };
    config.validate()?;
    let solver = Solver::new(config);

    let mut strategies: Vec<(String, Strategy, Heuristic)> = Vec::new();
    for strategy in [Strategy::BestFirst, Strategy::Beam { width: args.beam_width }] {
        for heuristic in Heuristic::ALL {
            strategies.push((format!("{}/{}", strategy, heuristic), strategy, heuristic));
        }
    }
    let mut tallies: Vec<Tally> = strategies.iter().map(|_| Tally::default()).collect();

    println!("Starting heuristic evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = board_seed(args.start_seed, board_idx);
        let initial_board = Board::goal().scramble_with_seed(args.moves, current_seed);

        println!("\nEvaluating Board {} (Seed: {}): {}", board_idx, current_seed, initial_board.to_description());

        for ((name, strategy, heuristic), tally) in strategies.iter().zip(tallies.iter_mut()) {
            match solver.solve_with(initial_board, *strategy, *heuristic) {
                Ok(report) => {
                    println!(
                        "  Strategy: {:<14}, Cost: {:<4}, Examined: {}",
                        name, report.path_cost, report.nodes_examined
                    );
                    tally.solved += 1;
                    tally.total_cost += report.path_cost as u64;
                    tally.total_examined += report.nodes_examined;
                }
                Err(e) if e.is_resource_exceeded() => {
                    println!("  Strategy: {:<14}, gave up after {} nodes", name, args.max_nodes);
                    tally.failed += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages over solved boards ---");

    let mut rows: Vec<(&str, &Tally, f64, f64)> = strategies
        .iter()
        .zip(tallies.iter())
        .filter(|(_, t)| t.solved > 0)
        .map(|((name, _, _), t)| {
            let avg_cost = t.total_cost as f64 / t.solved as f64;
            let avg_examined = t.total_examined as f64 / t.solved as f64;
            (name.as_str(), t, avg_cost, avg_examined)
        })
        .collect();

    // Fewest nodes examined first.
    rows.sort_by(|a, b| a.3.partial_cmp(&b.3).unwrap_or(std::cmp::Ordering::Equal));

    for (name, tally, avg_cost, avg_examined) in rows {
        println!(
            "Strategy {:<14}: Solved {:>3}/{:<3} Avg Cost = {:.2}, Avg Examined = {:.1}",
            name,
            tally.solved,
            tally.solved + tally.failed,
            avg_cost,
            avg_examined
        );
    }
    for ((name, _, _), tally) in strategies.iter().zip(tallies.iter()) {
        if tally.solved == 0 {
            println!("Strategy {:<14}: No boards solved.", name);
        }
    }
    Ok(())
}
