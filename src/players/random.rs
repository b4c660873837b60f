//! Bot that picks uniformly among the free cells.

use super::Player;
use anyhow::Result;
use noughts_core::{Board, Coord, Side};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Random legal-move player.
pub struct RandomPlayer {
    name: String,
    rng: SmallRng,
}

impl RandomPlayer {
    /// Creates a random bot; a seed makes its games reproducible.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn get_move(&mut self, board: &Board, side: Side) -> Result<Coord> {
        let position = board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        debug!(ai = %self.name, side = %side, position = %position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
