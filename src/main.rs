// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Power set benchmark CLI
//!
//! Times each strategy on `[1, 2, 3]` and then on `1..=20`, logging every
//! duration to stderr and printing a summary table to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Every strategy, default fixtures
//! cargo run --release --bin power-set-bench
//!
//! # Two strategies, best of five, checking subset counts
//! cargo run --release --bin power-set-bench -- \
//!     --strategy doubling-fold,breadth-first-queue --repeat 5 --verify
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use power_set::bench::{self, BenchConfig, DEFAULT_LONG_LEN};
use power_set::Strategy;

/// Power set benchmark CLI
#[derive(Parser, Debug)]
#[command(name = "power-set-bench")]
#[command(about = "Time every power set strategy on a short and a long input")]
struct Args {
    /// Strategies to run (comma-separated, repeatable); all when omitted
    #[arg(short, long, value_delimiter = ',', value_parser = Strategy::parse, env = "POWER_SET_STRATEGY")]
    strategy: Vec<Strategy>,

    /// Length of the long fixture
    #[arg(short, long, default_value_t = DEFAULT_LONG_LEN, env = "POWER_SET_LONG_LEN")]
    long_len: usize,

    /// Runs per measurement; the fastest is reported
    #[arg(short, long, default_value_t = 1, env = "POWER_SET_REPEAT")]
    repeat: usize,

    /// Fail if a strategy returns the wrong number of subsets
    #[arg(long)]
    verify: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig {
        strategies: args.strategy,
        long_len: args.long_len,
        repeat: args.repeat,
        verify: args.verify,
    };

    tracing::info!(
        strategies = config.selected().len(),
        long_len = config.long_len,
        repeat = config.repeat,
        "Starting power set benchmark"
    );

    let measurements = bench::run(&config)?;
    print!("{}", bench::render_table(&measurements));
    Ok(())
}
