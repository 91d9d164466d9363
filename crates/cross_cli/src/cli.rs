//! Command-line interface for cross.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cross - play tic-tac-toe against a memoized scoring engine
#[derive(Parser, Debug)]
#[command(name = "cross")]
#[command(about = "Play tic-tac-toe against a memoized scoring engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game as X
    Play {
        /// Seed for the engine's tie-breaks (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the score of every reply before the engine moves
        #[arg(long)]
        show_scores: bool,
    },

    /// Replay moves from an empty board and list the scores of the next replies
    Scores {
        /// Board indices (0-8) played alternately, X first
        moves: Vec<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
