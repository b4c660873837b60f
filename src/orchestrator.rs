//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Result, bail};
use noughts_core::{Board, Coord, GameStatus, Side, status};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the game to whatever displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board state updated.
    BoardChanged(Board),
    /// A human is being asked for a move.
    AwaitingInput {
        /// Player name.
        player: String,
        /// Side the player holds.
        side: Side,
    },
    /// A human typed something that is not a position.
    InputRejected {
        /// Player name.
        player: String,
        /// What was wrong with it.
        reason: String,
    },
    /// A bot is computing its move.
    Thinking {
        /// Player name.
        player: String,
        /// Side the player holds.
        side: Side,
    },
    /// Move was made.
    MoveMade {
        /// Player name.
        player: String,
        /// Side the player holds.
        side: Side,
        /// Cell that was taken.
        position: Coord,
    },
    /// Move named a cell that is already taken; the same player goes again.
    MoveRejected {
        /// Player name.
        player: String,
        /// Side the player holds.
        side: Side,
        /// Cell that was asked for.
        position: Coord,
    },
    /// Game ended.
    GameOver {
        /// Final status, never `InProgress`.
        status: GameStatus,
        /// Name of the winning player, if any.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_o: Box<dyn Player>,
    player_x: Box<dyn Player>,
    to_move: Side,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator on an empty board with `first` to move.
    pub fn new(
        player_o: Box<dyn Player>,
        player_x: Box<dyn Player>,
        first: Side,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            board: Board::new(),
            player_o,
            player_x,
            to_move: first,
            event_tx,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::O => &*self.player_o,
            Side::X => &*self.player_x,
        }
    }

    fn emit(&self, event: GameEvent) -> Result<()> {
        self.event_tx.send(event)?;
        Ok(())
    }

    /// Runs the game loop until the board is won or drawn.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move, if a bot names an occupied
    /// cell, or if the event receiver has gone away.
    #[instrument(skip(self), fields(first = %self.to_move))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        self.emit(GameEvent::BoardChanged(self.board))?;

        loop {
            let current = status(&self.board);
            if current.is_over() {
                let winner = current
                    .winner()
                    .map(|side| self.player(side).name().to_string());
                info!(status = ?current, winner = ?winner, "Game over");
                self.emit(GameEvent::GameOver {
                    status: current,
                    winner,
                })?;
                return Ok(current);
            }

            let side = self.to_move;
            let player_name = self.player(side).name().to_string();
            let automated = self.player(side).is_automated();

            if automated {
                self.emit(GameEvent::Thinking {
                    player: player_name.clone(),
                    side,
                })?;
            }

            debug!(player = %player_name, side = %side, "Waiting for move");
            let board = self.board;
            let player = match side {
                Side::O => &mut self.player_o,
                Side::X => &mut self.player_x,
            };
            let position = player.get_move(&board, side).await?;

            match self.board.place(side, position) {
                Ok(next) => {
                    self.board = next;
                    self.emit(GameEvent::MoveMade {
                        player: player_name,
                        side,
                        position,
                    })?;
                    self.emit(GameEvent::BoardChanged(self.board))?;
                    self.to_move = side.opponent();
                }
                Err(e) if automated => {
                    bail!("{} ({}) chose an illegal move: {}", player_name, side, e);
                }
                Err(e) => {
                    warn!(player = %player_name, error = %e, "Move rejected");
                    self.emit(GameEvent::MoveRejected {
                        player: player_name,
                        side,
                        position,
                    })?;
                }
            }
        }
    }
}
