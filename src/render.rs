//! Console rendering of game events.

use crate::orchestrator::GameEvent;
use anyhow::Result;
use noughts_core::GameStatus;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

/// Text shown for one event.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::BoardChanged(board) => board.to_string(),
        GameEvent::AwaitingInput { side, .. } => format!(
            "Player {} please input the position you want to take, for example, \"a 0\"",
            side
        ),
        GameEvent::InputRejected { reason, .. } => reason.clone(),
        GameEvent::Thinking { player, side } => format!("{} ({}) is thinking...", player, side),
        GameEvent::MoveMade {
            player,
            side,
            position,
        } => format!("{} ({}) played {}", player, side, position.label()),
        GameEvent::MoveRejected { .. } => "The place has already been taken!".to_string(),
        GameEvent::GameOver { status, winner } => match (status, winner) {
            (GameStatus::Won(side), Some(name)) => {
                format!("Player {} has won!! Congratulations, {}.", side, name)
            }
            (GameStatus::Won(side), None) => format!("Player {} has won!!", side),
            _ => "Draw!".to_string(),
        },
    }
}

/// Writes every event to `out` until the sender side closes.
pub async fn run<W>(mut events: mpsc::UnboundedReceiver<GameEvent>, mut out: W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(event) = events.recv().await {
        let mut text = describe(&event);
        if !text.ends_with('\n') {
            text.push('\n');
        }
        out.write_all(text.as_bytes()).await?;
        out.flush().await?;
    }
    debug!("Event stream closed");
    Ok(())
}
