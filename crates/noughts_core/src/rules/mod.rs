//! Game rules for tic-tac-toe.
//!
//! Pure functions deciding whether a board is finished. Rules are kept
//! apart from board storage so the search can take them as a parameter
//! through [`TerminalEvaluator`].

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner};

use crate::board::Board;
use crate::types::{GameStatus, Side};
use tracing::instrument;

/// Decides whether a board is terminal.
///
/// The search engine is generic over this trait; [`StandardRules`] is the
/// implementation used everywhere outside of tests.
pub trait TerminalEvaluator {
    /// Returns the side holding a complete line, if any.
    fn winner(&self, board: &Board) -> Option<Side>;

    /// True when no cell is empty. Callers check [`Self::winner`] first.
    fn is_draw(&self, board: &Board) -> bool;
}

/// The standard eight-line rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl TerminalEvaluator for StandardRules {
    fn winner(&self, board: &Board) -> Option<Side> {
        winner(board)
    }

    fn is_draw(&self, board: &Board) -> bool {
        is_draw(board)
    }
}

/// Combines win and draw detection; a win takes precedence over a full board.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    if let Some(side) = winner(board) {
        GameStatus::Won(side)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
