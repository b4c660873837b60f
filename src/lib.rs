//! Noughts - console tic-tac-toe against a perfect opponent
//!
//! The game rules and the minimax search live in [`noughts_core`]; this
//! crate seats players and runs games on the console.
//!
//! # Architecture
//!
//! - **Players**: humans typing positions, a minimax bot, a random bot
//! - **Orchestrator**: alternates turns and reports [`GameEvent`]s
//! - **Render**: prints events to the console
//! - **Config**: game mode, bot kind and opening side from TOML or flags
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameConfig, GameMode, Orchestrator, lineup};
//! use noughts_core::Side;
//! use std::sync::Arc;
//! use tokio::io::BufReader;
//! use tokio::sync::{Mutex, mpsc};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::new().with_mode(GameMode::Eve);
//! let (tx, _rx) = mpsc::unbounded_channel();
//! let input = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin())));
//! let (player_o, player_x) = lineup(&config, input, &tx);
//!
//! let mut game = Orchestrator::new(player_o, player_x, Side::O, tx);
//! let status = game.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
pub mod render;

// Crate-level exports - Configuration
pub use config::{BotKind, ConfigError, DEFAULT_CONFIG_FILE, GameConfig, GameMode};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Players
pub use players::{
    HumanPlayer, InputError, MinimaxPlayer, Player, RandomPlayer, SharedInput, bot, lineup,
    parse_coord,
};
