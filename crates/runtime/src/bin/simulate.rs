//! Runs a bot-versus-bot sector and prints the outcome.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tactics_runtime::{RuntimeConfig, Scenario, SectorRunner, logging};

/// Simulate a tactical sector with both sides controlled by bots
#[derive(Parser)]
#[command(name = "tactics-sim")]
#[command(about = "Simulate a tactical sector", long_about = None)]
#[command(version)]
struct Cli {
    /// Runtime config (TOML). Defaults apply to anything not set.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory with scheme tables and maps
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Map name inside the content directory
    #[arg(long)]
    map: Option<String>,

    /// Dice seed
    #[arg(long)]
    seed: Option<u64>,

    /// Turn limit
    #[arg(long)]
    max_turns: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }
    if let Some(map) = cli.map {
        config.map = map;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(max_turns) = cli.max_turns {
        config.max_turns = max_turns;
    }

    logging::try_init(&config.log_filter)?;

    let sector = Scenario::from_config(&config)?.create_sector(config.seed)?;
    let mut runner = SectorRunner::new(sector, config.max_turns);
    let summary = runner.run()?;

    println!(
        "{} after {} turns: {} deaths, {} failed tasks",
        summary.stop,
        summary.turns,
        summary.deaths.len(),
        summary.failures
    );
    Ok(())
}
