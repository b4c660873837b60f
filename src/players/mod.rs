//! Player trait and implementations.

mod human;
mod minimax;
mod random;

pub use human::{HumanPlayer, InputError, SharedInput, parse_coord};
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

use crate::config::{BotKind, GameConfig, GameMode};
use crate::orchestrator::GameEvent;
use anyhow::Result;
use noughts_core::{Board, Coord, Side};
use tokio::io::AsyncBufRead;
use tokio::sync::mpsc;
use tracing::instrument;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player for `side` on `board`.
    async fn get_move(&mut self, board: &Board, side: Side) -> Result<Coord>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for bots. A bot naming an occupied cell is a bug, not a typo.
    fn is_automated(&self) -> bool {
        true
    }
}

/// Builds a bot of the given kind.
pub fn bot(kind: BotKind, name: impl Into<String>, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        BotKind::Minimax => Box::new(MinimaxPlayer::new(name)),
        BotKind::Random => Box::new(RandomPlayer::new(name, seed)),
    }
}

/// Seats the two players for `config`: returns `(player_o, player_x)`.
///
/// Humans share `input` and report typing mistakes through `events`. In
/// bot-only games a seeded random bot on X gets `seed + 1` so the two sides
/// do not mirror each other.
#[instrument(skip(input, events), fields(mode = %config.mode(), bot = %config.bot()))]
pub fn lineup<R>(
    config: &GameConfig,
    input: SharedInput<R>,
    events: &mpsc::UnboundedSender<GameEvent>,
) -> (Box<dyn Player>, Box<dyn Player>)
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let human = |name: &str| -> Box<dyn Player> {
        Box::new(HumanPlayer::new(name, input.clone(), events.clone()))
    };
    let kind = *config.bot();
    let seed = *config.seed();

    match config.mode() {
        GameMode::Pvp => (human("Player one"), human("Player two")),
        GameMode::Pve => (human("Human"), bot(kind, format!("{} bot", kind), seed)),
        GameMode::Eve => (
            bot(kind, format!("{} bot O", kind), seed),
            bot(kind, format!("{} bot X", kind), seed.map(|s| s.wrapping_add(1))),
        ),
    }
}
