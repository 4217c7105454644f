//! oxo CLI - play Tic-Tac-Toe against a perfect minimax opponent
//!
//! The human plays O and opens; the AI plays X and searches the full game
//! tree before every move.

use anyhow::Result;
use clap::Parser;

use oxo::play::{self, GameConfig};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Play Tic-Tac-Toe against a perfect minimax opponent", long_about = None)]
struct Cli {
    /// Seed for the AI's tie-breaking among equally strong moves
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    play::run(&config)?;
    Ok(())
}
