//! Tictac - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tictac_play::{Cli, Session, Settings};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::resolve(&cli)?;
    info!(?settings, "Starting tictac");

    let mut session = Session::new(&settings);
    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
