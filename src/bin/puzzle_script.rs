use anyhow::Context;
use clap::Parser;
use eight_puzzle::config::SearchConfig;
use eight_puzzle::script::ScriptRunner;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the command script
    script: PathBuf,

    /// Seed for randomizeState (omit for a random seed)
    #[clap(long)]
    seed: Option<u64>,

    /// Initial node limit (a maxNodes command overrides it)
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
        .with_writer(io::stderr)
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
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(max_nodes) = args.max_nodes {
        config.max_nodes = max_nodes;
    }
    config.validate()?;

    let stdout = io::stdout();
    let mut runner = ScriptRunner::new(config, stdout.lock());
    let summary = runner
        .run_file(&args.script)
        .with_context(|| format!("Script {} failed", args.script.display()))?;
    runner.into_inner().flush()?;

    eprintln!(
        "{} commands, {} solved, {} failed",
        summary.commands, summary.solved, summary.failed
    );
    Ok(())
}
