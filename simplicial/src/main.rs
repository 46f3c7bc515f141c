//! simplicial: mine frequent itemsets from a transaction table.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use simplicial::io::{read_table, write_results_file};
use simplicial::mining::{build_index, enumerate_with, rank_items_with};
use simplicial::MiningConfig;

/// Frequent itemset miner
#[derive(Parser, Debug)]
#[command(name = "simplicial")]
#[command(about = "Enumerate frequent itemsets from a table of transactions")]
struct Args {
    /// Transaction table, one `n i1 ... in` row per line
    #[arg(short, long, default_value = "Data.txt")]
    input: PathBuf,

    /// Where to write `[i1 ... ik] support` lines
    #[arg(short, long, default_value = "Results.txt")]
    output: PathBuf,

    /// Minimum support; overrides the config file
    #[arg(short = 's', long, allow_negative_numbers = true)]
    min_support: Option<i64>,

    /// JSON mining configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Partition the traversal by base item across threads
    #[arg(long)]
    parallel: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => MiningConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MiningConfig::default(),
    };
    if let Some(min_support) = args.min_support {
        config.min_support = MiningConfig::new(min_support)?.min_support;
    }
    if args.parallel {
        config.parallel = true;
    }
    config.validate()?;

    let start = Instant::now();
    let rows = read_table(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let reading = start.elapsed();

    let start = Instant::now();
    let index = build_index(&rows)?;
    let rank = rank_items_with(&index, config.min_support, config.rank_filter);
    let results = enumerate_with(&rank, &config)?;
    let mining = start.elapsed();

    let start = Instant::now();
    write_results_file(&args.output, &results)
        .with_context(|| format!("writing {}", args.output.display()))?;
    let writing = start.elapsed();

    info!(seconds = reading.as_secs_f64(), "time to read file");
    info!(seconds = mining.as_secs_f64(), "time to run algorithm");
    info!(seconds = writing.as_secs_f64(), "time to write to file");
    info!(
        transactions = index.num_transactions(),
        ranked_items = rank.len(),
        itemsets = results.len(),
        output = %args.output.display(),
        "mining complete"
    );

    Ok(())
}
