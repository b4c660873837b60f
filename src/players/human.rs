//! Human player that types moves on the console.

use super::Player;
use crate::orchestrator::GameEvent;
use anyhow::{Result, bail};
use noughts_core::{Board, Coord, Side};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, instrument};

/// Line input shared by every human at the same console.
pub type SharedInput<R> = Arc<Mutex<R>>;

/// Why a typed position was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Not two tokens.
    #[display("Invalid input position command! Try again!")]
    Format,
    /// Row token is not `a`, `b` or `c`.
    #[display("Wrong input! The index of rows should be 'a', 'b', or 'c'")]
    Row,
    /// Column token is not `0`, `1` or `2`.
    #[display("Wrong input! The index of columns should be '0', '1', or '2'")]
    Column,
}

impl std::error::Error for InputError {}

/// Parses a position such as `a 0` (row letter, then column digit).
#[instrument]
pub fn parse_coord(input: &str) -> Result<Coord, InputError> {
    let mut tokens = input.split_whitespace();
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(InputError::Format);
    };

    let row = match row {
        "a" => 0,
        "b" => 1,
        "c" => 2,
        _ => return Err(InputError::Row),
    };
    let col = match col {
        "0" => 0,
        "1" => 1,
        "2" => 2,
        _ => return Err(InputError::Column),
    };

    Coord::new(row, col).map_err(|_| InputError::Format)
}

/// Human player reading one position per line.
///
/// Prompts and typing mistakes go out as [`GameEvent`]s so they reach the
/// screen in order with everything else.
pub struct HumanPlayer<R> {
    name: String,
    input: SharedInput<R>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl<R> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        input: SharedInput<R>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            input,
            events,
        }
    }
}

#[async_trait::async_trait]
impl<R> Player for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    async fn get_move(&mut self, _board: &Board, side: Side) -> Result<Coord> {
        loop {
            self.events.send(GameEvent::AwaitingInput {
                player: self.name.clone(),
                side,
            })?;

            let mut raw = Vec::new();
            let read = self.input.lock().await.read_until(b'\n', &mut raw).await?;
            if read == 0 {
                bail!("Input closed while waiting for {}", self.name);
            }

            let parsed = match String::from_utf8(raw) {
                Ok(line) => parse_coord(&line).inspect_err(|e| {
                    debug!(player = %self.name, input = %line.trim(), error = %e, "Bad input");
                }),
                Err(_) => {
                    debug!(player = %self.name, "Input is not UTF-8");
                    Err(InputError::Format)
                }
            };

            match parsed {
                Ok(position) => return Ok(position),
                Err(e) => {
                    self.events.send(GameEvent::InputRejected {
                        player: self.name.clone(),
                        reason: e.to_string(),
                    })?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_coord("a 0"), Ok(at(0, 0)));
        assert_eq!(parse_coord("b 1\n"), Ok(at(1, 1)));
        assert_eq!(parse_coord("  c   2 "), Ok(at(2, 2)));
    }

    #[test]
    fn test_parse_bad_row() {
        assert_eq!(parse_coord("d 0"), Err(InputError::Row));
        assert_eq!(parse_coord("1 0"), Err(InputError::Row));
    }

    #[test]
    fn test_parse_bad_column() {
        assert_eq!(parse_coord("a 3"), Err(InputError::Column));
        assert_eq!(parse_coord("a x"), Err(InputError::Column));
    }

    #[test]
    fn test_parse_bad_shape() {
        assert_eq!(parse_coord(""), Err(InputError::Format));
        assert_eq!(parse_coord("a0"), Err(InputError::Format));
        assert_eq!(parse_coord("a 0 1"), Err(InputError::Format));
    }

    #[tokio::test]
    async fn test_reprompts_until_valid() {
        let input = Arc::new(Mutex::new(BufReader::new(&b"zz\nd 1\nb 2\n"[..])));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut human = HumanPlayer::new("tester", input, tx);

        let position = human.get_move(&Board::new(), Side::O).await.unwrap();
        assert_eq!(position, at(1, 2));

        let mut prompts = 0;
        let mut rejections = Vec::new();
        while let Ok(event) = rx.try_recv() {
            match event {
                GameEvent::AwaitingInput { .. } => prompts += 1,
                GameEvent::InputRejected { reason, .. } => rejections.push(reason),
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(prompts, 3);
        assert_eq!(
            rejections,
            vec![InputError::Format.to_string(), InputError::Row.to_string()]
        );
    }

    #[tokio::test]
    async fn test_reprompts_after_non_utf8_line() {
        let input = Arc::new(Mutex::new(BufReader::new(&b"\xff\xfe\nb 1\n"[..])));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut human = HumanPlayer::new("tester", input, tx);

        let position = human.get_move(&Board::new(), Side::O).await.unwrap();
        assert_eq!(position, at(1, 1));

        let mut prompts = 0;
        let mut rejections = Vec::new();
        while let Ok(event) = rx.try_recv() {
            match event {
                GameEvent::AwaitingInput { .. } => prompts += 1,
                GameEvent::InputRejected { reason, .. } => rejections.push(reason),
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(prompts, 2);
        assert_eq!(rejections, vec![InputError::Format.to_string()]);
    }

    #[tokio::test]
    async fn test_closed_input_is_an_error() {
        let input = Arc::new(Mutex::new(BufReader::new(&b""[..])));
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut human = HumanPlayer::new("tester", input, tx);

        assert!(human.get_move(&Board::new(), Side::X).await.is_err());
    }
}
