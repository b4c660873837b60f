//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::{BotKind, GameMode};
use noughts_core::Side;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the console
    Play {
        /// Path to a TOML config file (defaults to ./noughts.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Who plays: pvp, pve or eve
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Bot used for automated seats
        #[arg(short, long, value_enum)]
        bot: Option<BotKind>,

        /// Let player two (X) open
        #[arg(long)]
        second: bool,

        /// Seed for the random bot
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the best move for a position
    Hint {
        /// Board as nine cells, rows optionally split by '/', e.g. "OX./.O./..."
        board: String,

        /// Side to move (o or x)
        #[arg(short, long, default_value = "o")]
        side: Side,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },
}
