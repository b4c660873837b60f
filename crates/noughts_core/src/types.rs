//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side in the game.
///
/// `O` is player one and `X` is player two. Which of them opens is decided
/// by whoever runs the game, not by the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Player one.
    O,
    /// Player two.
    X,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::O => Side::X,
            Side::X => Side::O,
        }
    }

    /// Board symbol for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::O => 'O',
            Side::X => 'X',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell taken by a side.
    Occupied(Side),
}

impl Cell {
    /// Symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(side) => side.symbol(),
        }
    }
}

/// A `(row, col)` coordinate on the 3x3 grid.
///
/// Always in bounds: the only constructors are [`Coord::new`], which checks,
/// and the [`Coord::ALL`] table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// The center cell.
    pub const CENTER: Coord = Coord { row: 1, col: 1 };

    /// Every cell in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, rejecting rows or columns outside 0..=2.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a coordinate from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Console label, e.g. `b 1` for the center.
    pub fn label(self) -> String {
        let letter = (b'a' + self.row as u8) as char;
        format!("{} {}", letter, self.col)
    }
}

/// Error raised when a move cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside the grid.
    #[display("Position ({}, {}) is out of bounds (must be 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Coord),
}

impl std::error::Error for MoveError {}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// A side completed a line.
    Won(Side),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// True once the game is decided.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }
}
