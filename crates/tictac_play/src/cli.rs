//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;
use tictac_engine::{GameMode, Mark};

/// Tictac - tic-tac-toe against a friend or a random computer
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (ignored if missing)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Game mode: single (vs computer) or multiple (two players)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Mark for the human (active) player: X or O
    #[arg(short, long)]
    pub player: Option<Mark>,

    /// Delay before the computer replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible computer moves
    #[arg(long)]
    pub seed: Option<u64>,
}
