//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Coord, Side};
use strum::IntoEnumIterator;
use tracing::instrument;

const fn c(row: usize, col: usize) -> Coord {
    Coord::ALL[row * 3 + col]
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [c(0, 0), c(0, 1), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 0), c(2, 1), c(2, 2)],
    // Columns
    [c(0, 0), c(1, 0), c(2, 0)],
    [c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 2), c(1, 2), c(2, 2)],
    // Diagonals
    [c(0, 0), c(1, 1), c(2, 2)],
    [c(0, 2), c(1, 1), c(2, 0)],
];

/// True if `side` holds all three cells of any line.
pub fn has_line(board: &Board, side: Side) -> bool {
    let mark = Cell::Occupied(side);
    LINES
        .iter()
        .any(|line| line.iter().all(|coord| board.get(*coord) == mark))
}

/// Checks if there is a winner on the board.
///
/// All of O's lines are checked before any of X's, so on a constructed
/// board where both sides hold a line, O is reported.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Side> {
    Side::iter().find(|side| has_line(board, *side))
}
