//! Noughts - console tic-tac-toe
//!
//! Play against a minimax opponent, or ask it for the best move.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{BotKind, GameConfig, GameMode, Orchestrator, lineup, render};
use noughts_core::{Board, Side, search};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::{Mutex, mpsc};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            bot,
            second,
            seed,
        } => run_play(config, mode, bot, second, seed).await,
        Command::Hint { board, side, json } => run_hint(&board, side, json),
    }
}

/// Runs one console game.
#[instrument]
async fn run_play(
    config_path: Option<PathBuf>,
    mode: Option<GameMode>,
    bot: Option<BotKind>,
    second: bool,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = GameConfig::load(config_path.as_deref())?;
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(bot) = bot {
        config = config.with_bot(bot);
    }
    if second {
        config = config.with_start_first(false);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    info!(?config, "Starting game");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let input = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin())));
    let (player_o, player_x) = lineup(&config, input, &event_tx);
    let first = if *config.start_first() { Side::O } else { Side::X };

    let renderer = tokio::spawn(render::run(event_rx, tokio::io::stdout()));

    let mut orchestrator = Orchestrator::new(player_o, player_x, first, event_tx);
    let result = orchestrator.run().await;

    // Dropping the orchestrator closes the channel so the renderer drains and exits.
    drop(orchestrator);
    renderer.await.context("Renderer task panicked")??;

    let status = result?;
    info!(?status, "Game finished");
    Ok(())
}

/// Prints the best move for `board` with `side` to play.
#[instrument]
fn run_hint(board: &str, side: Side, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let report = search(&board, side)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", board);
    match report.score {
        Some(score) => println!(
            "Best move for {}: {} {} (score {}, {} nodes searched)",
            side,
            report.best.label(),
            report.best,
            score,
            report.nodes
        ),
        None => println!(
            "Best move for {}: {} {} (opening move)",
            side,
            report.best.label(),
            report.best
        ),
    }
    Ok(())
}
