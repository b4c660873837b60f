//! Tic-tac-toe board model, rules and exhaustive minimax search.
//!
//! This crate holds no I/O. It provides:
//!
//! - **Board model**: [`Board`], [`Coord`], [`Cell`], [`Side`], legal-move
//!   enumeration and placement
//! - **Rules**: [`winner`], [`is_draw`] and [`status`], plus the
//!   [`TerminalEvaluator`] seam the search is generic over
//! - **Search**: [`best_move`], which walks the whole game tree and plays
//!   perfectly
//!
//! # Example
//!
//! ```
//! use noughts_core::{best_move, Board, Coord, Side};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! // O completes the middle row.
//! assert_eq!(best_move(&board, Side::O).unwrap(), Coord::new(1, 2).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod rules;
pub mod search;
mod types;

pub use board::{Board, BoardParseError, legal_moves};
pub use rules::{StandardRules, TerminalEvaluator, is_draw, status, winner};
pub use search::{
    OPENING_MOVE, SearchError, SearchNode, SearchReport, best_move, best_move_with, build_tree,
    search, search_with,
};
pub use types::{Cell, Coord, GameStatus, MoveError, Side};
