//! Cross - play tic-tac-toe against a memoized scoring engine.

use anyhow::Result;
use clap::Parser;
use cross_cli::{Cli, Command, CrossConfig, run_game, score_report};
use cross_engine::{CrossAi, Engine, RandomTieBreak};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            seed,
            config,
            show_scores,
        } => run_play(config, seed, show_scores),
        Command::Scores { moves, config } => run_scores(config, moves),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>, seed: Option<u64>, show_scores: bool) -> Result<()> {
    let config = CrossConfig::load(config.as_deref())?.with_overrides(seed, show_scores);
    let engine = Engine::shared(config.engine().clone());
    let tie = match config.seed() {
        Some(seed) => RandomTieBreak::seeded(seed),
        None => RandomTieBreak::from_entropy(),
    };

    info!(seed = ?config.seed(), "Starting interactive game");
    let mut ai = CrossAi::new(engine, tie);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let status = run_game(&mut ai, stdin.lock(), &mut stdout, config.show_scores())?;

    let stats = ai.engine().stats();
    info!(
        %status,
        scores = stats.scores(),
        hits = stats.hits(),
        misses = stats.misses(),
        "Game finished"
    );
    Ok(())
}

/// Print the scored replies after a sequence of moves
#[instrument]
fn run_scores(config: Option<PathBuf>, moves: Vec<usize>) -> Result<()> {
    let config = CrossConfig::load(config.as_deref())?;
    let engine = Engine::new(config.engine().clone());
    println!("{}", score_report(&engine, &moves)?);
    Ok(())
}
