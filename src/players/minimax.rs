//! Bot that plays the exhaustive minimax search.

use super::Player;
use anyhow::Result;
use noughts_core::{Board, Coord, Side, search};
use tracing::debug;

/// Perfect player backed by [`noughts_core::search`].
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax bot.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn get_move(&mut self, board: &Board, side: Side) -> Result<Coord> {
        debug!(ai = %self.name, side = %side, "AI making move");

        // CPU-bound; runs on the blocking pool.
        let board = *board;
        let report = tokio::task::spawn_blocking(move || search(&board, side)).await??;

        debug!(
            ai = %self.name,
            position = %report.best,
            score = ?report.score,
            nodes = report.nodes,
            "AI chose position"
        );
        Ok(report.best)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
