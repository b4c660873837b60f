//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Cell;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}

/// True iff no cell is empty.
///
/// This does not look at lines: a full board may also be won, so callers
/// must ask [`super::winner`] first.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}
