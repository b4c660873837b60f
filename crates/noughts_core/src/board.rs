//! The 3x3 board and legal-move enumeration.

use crate::types::{Cell, Coord, MoveError, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// A plain `Copy` value: every hypothetical placement works on its own copy,
/// so callers never observe each other's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// True when no side has played yet.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c == Cell::Empty)
    }

    /// Iterates over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of marks placed by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells().filter(|c| *c == Cell::Occupied(side)).count()
    }

    /// Returns every empty cell, scanning rows 0..2 then columns 0..2.
    ///
    /// The order is fixed; search tie-breaking depends on it.
    pub fn legal_moves(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|coord| self.is_empty(*coord))
            .collect()
    }

    /// Returns a copy of this board with `side` placed at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the cell already holds a mark; the
    /// board is never overwritten.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&self, side: Side, coord: Coord) -> Result<Board, MoveError> {
        if !self.is_empty(coord) {
            return Err(MoveError::Occupied(coord));
        }
        let mut next = *self;
        next.cells[coord.row()][coord.col()] = Cell::Occupied(side);
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns every empty cell of `board` in row-major order.
pub fn legal_moves(board: &Board) -> Vec<Coord> {
    board.legal_moves()
}

/// Renders the board the way the console game shows it.
///
/// ```text
///     0   1   2
/// a | O |   | X |
/// ---------------
/// b |   | O |   |
/// ...
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0   1   2  ")?;
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---------------")?;
            }
            let letter = (b'a' + i as u8) as char;
            writeln!(
                f,
                "{} | {} | {} | {} |",
                letter,
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Not exactly nine cells.
    #[display("board must have 9 cells, got {} in '{}'", got, context)]
    Length {
        /// Cells found.
        got: usize,
        /// The input text.
        context: String,
    },

    /// A character that is not a cell symbol.
    #[display("invalid character '{}' at cell {} in '{}'", character, position, context)]
    Character {
        /// Offending character.
        character: char,
        /// Cell index it would have filled.
        position: usize,
        /// The input text.
        context: String,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `O`/`X` (any case) are marks; `.`, `-` and `_` are empty. Row
    /// separators `/` and `|` and whitespace are skipped, so `"OX./.O./..X"`
    /// and `"OX. .O. ..X"` read the same.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut position = 0;
        for character in s.chars() {
            if character.is_whitespace() || character == '/' || character == '|' {
                continue;
            }
            let cell = match character {
                'o' | 'O' => Cell::Occupied(Side::O),
                'x' | 'X' => Cell::Occupied(Side::X),
                '.' | '-' | '_' => Cell::Empty,
                _ => {
                    return Err(BoardParseError::Character {
                        character,
                        position,
                        context: s.to_string(),
                    });
                }
            };
            if position < 9 {
                board.cells[position / 3][position % 3] = cell;
            }
            position += 1;
        }
        if position != 9 {
            return Err(BoardParseError::Length {
                got: position,
                context: s.to_string(),
            });
        }
        Ok(board)
    }
}
