//! Tic-tac-toe CLI
//!
//! Play against the alpha-beta engine in the terminal, or watch it play
//! itself.

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictactoe::{AIEngine, EngineConfig, GameSession, Player};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Play tic-tac-toe against an alpha-beta search", long_about = None)]
struct Cli {
    /// Your player number: 1 moves first, 0 moves second
    #[arg(short, long, default_value_t = 1)]
    player: u8,

    /// Let the engine play both sides
    #[arg(long, conflicts_with = "player")]
    self_play: bool,

    /// Seed for the engine's move shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the search this many plies deep and score heuristically
    #[arg(long)]
    depth: Option<u8>,

    /// Try moves in board order instead of shuffling them
    #[arg(long)]
    no_shuffle: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tictactoe=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let human = if cli.self_play {
        None
    } else {
        match Player::from_number(cli.player) {
            Some(player) => Some(player),
            None => bail!("player number must be 0 or 1, got {}", cli.player),
        }
    };

    let engine = AIEngine::with_config(EngineConfig {
        max_depth: cli.depth,
        shuffle: !cli.no_shuffle,
        seed: cli.seed,
    });

    let stdin = io::stdin();
    let mut session = GameSession::new(stdin.lock(), io::stdout(), engine, human);
    session.play()?;
    Ok(())
}
