//! Tests for whole games run by the orchestrator.

use anyhow::Result;
use noughts::{
    BotKind, GameConfig, GameEvent, GameMode, MinimaxPlayer, Orchestrator, Player, RandomPlayer,
    lineup,
};
use noughts_core::{Board, Coord, GameStatus, Side};
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::{Mutex, mpsc};

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn no_input() -> Arc<Mutex<BufReader<&'static [u8]>>> {
    Arc::new(Mutex::new(BufReader::new(&b""[..])))
}

#[tokio::test]
async fn test_minimax_self_play_draws_for_either_opener() {
    for first in [Side::O, Side::X] {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut game = Orchestrator::new(
            Box::new(MinimaxPlayer::new("Minimax O")),
            Box::new(MinimaxPlayer::new("Minimax X")),
            first,
            tx,
        );

        let status = game.run().await.unwrap();
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(game.board().legal_moves(), Vec::<Coord>::new());

        let events = drain(&mut rx);
        let first_move = events.iter().find_map(|e| match e {
            GameEvent::MoveMade { side, position, .. } => Some((*side, *position)),
            _ => None,
        });
        assert_eq!(first_move, Some((first, Coord::CENTER)));
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameOver {
                status: GameStatus::Draw,
                winner: None
            })
        );
    }
}

#[tokio::test]
async fn test_minimax_never_loses_to_random() {
    for seed in 0..6 {
        for first in [Side::O, Side::X] {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut game = Orchestrator::new(
                Box::new(RandomPlayer::new("Random", Some(seed))),
                Box::new(MinimaxPlayer::new("Minimax")),
                first,
                tx,
            );

            let status = game.run().await.unwrap();
            assert_ne!(status, GameStatus::Won(Side::O), "seed {seed}, first {first}");
        }
    }
}

#[tokio::test]
async fn test_human_is_reprompted_until_a_free_cell() {
    // The human tries every cell in row-major order, plus a taken cell and
    // two typos early on. Minimax answers a corner with the center.
    let script = b"a 0\nb 1\nzz\nd 1\na 1\na 2\nb 0\nb 2\nc 0\nc 1\nc 2\n";
    let input = Arc::new(Mutex::new(BufReader::new(&script[..])));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let config = GameConfig::new().with_mode(GameMode::Pve);
    let (player_o, player_x) = lineup(&config, input, &tx);
    let mut game = Orchestrator::new(player_o, player_x, Side::O, tx);

    let status = game.run().await.unwrap();
    assert_ne!(status, GameStatus::Won(Side::O));

    let events = drain(&mut rx);
    let moves: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MoveMade { side, position, .. } => Some((*side, *position)),
            _ => None,
        })
        .collect();
    assert_eq!(moves[0], (Side::O, Coord::new(0, 0).unwrap()));
    assert_eq!(moves[1], (Side::X, Coord::CENTER));

    let rejected = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveRejected { position, .. } if *position == Coord::CENTER))
        .count();
    assert_eq!(rejected, 1);

    let typos = events
        .iter()
        .filter(|e| matches!(e, GameEvent::InputRejected { .. }))
        .count();
    assert_eq!(typos, 2);
}

#[tokio::test]
async fn test_closed_input_aborts_the_game() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let config = GameConfig::new().with_mode(GameMode::Pvp);
    let (player_o, player_x) = lineup(&config, no_input(), &tx);
    let mut game = Orchestrator::new(player_o, player_x, Side::O, tx);

    assert!(game.run().await.is_err());
    assert!(game.board().is_blank());
}

/// Bot that always answers the same cell.
struct StubbornBot(Coord);

#[async_trait::async_trait]
impl Player for StubbornBot {
    async fn get_move(&mut self, _board: &Board, _side: Side) -> Result<Coord> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "Stubborn"
    }
}

#[tokio::test]
async fn test_bot_choosing_taken_cell_is_an_error() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut game = Orchestrator::new(
        Box::new(StubbornBot(Coord::CENTER)),
        Box::new(StubbornBot(Coord::CENTER)),
        Side::O,
        tx,
    );

    let err = game.run().await.unwrap_err();
    assert!(err.to_string().contains("illegal move"));
    assert_eq!(game.to_move(), Side::X);
}

#[test]
fn test_lineup_seats_players_by_mode() {
    let (tx, _rx) = mpsc::unbounded_channel();

    let (o, x) = lineup(&GameConfig::new().with_mode(GameMode::Pvp), no_input(), &tx);
    assert!(!o.is_automated() && !x.is_automated());

    let (o, x) = lineup(&GameConfig::new(), no_input(), &tx);
    assert!(!o.is_automated() && x.is_automated());
    assert_eq!(x.name(), "minimax bot");

    let config = GameConfig::new()
        .with_mode(GameMode::Eve)
        .with_bot(BotKind::Random)
        .with_seed(1);
    let (o, x) = lineup(&config, no_input(), &tx);
    assert!(o.is_automated() && x.is_automated());
    assert_eq!(o.name(), "random bot O");
}
