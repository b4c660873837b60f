//! Exhaustive minimax search.
//!
//! Every call builds the complete game tree below the given position as an
//! explicit [`SearchNode`] tree, scores the leaves, backs the scores up in
//! post-order and reads the best move off the root. Nothing is cached
//! between calls and the caller's board is never touched.
//!
//! Leaf scores are depth-adjusted: a win for the searching side is worth
//! `10 - depth` and a loss `depth - 10`, so the engine prefers the fastest
//! win and the slowest loss. Draws score `0`.

use crate::board::Board;
use crate::rules::{StandardRules, TerminalEvaluator};
use crate::types::{Coord, GameStatus, MoveError, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Opening played on an empty board without searching.
///
/// The empty board is the most expensive position to search and the
/// answer is fixed, so it is a named policy rather than a search result.
pub const OPENING_MOVE: Coord = Coord::CENTER;

/// Score of a win at depth zero.
pub const WIN_SCORE: i32 = 10;

/// A node in the transient search tree.
///
/// Lifecycle: created unscored when its parent is expanded, scored at once
/// if its board is terminal, otherwise scored after every child has a
/// score. The whole tree is dropped when the search returns.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    mover: Side,
    last_move: Option<Coord>,
    depth: i32,
    score: Option<i32>,
    children: Vec<SearchNode>,
}

impl SearchNode {
    fn root(board: Board, mover: Side) -> Self {
        Self {
            board,
            mover,
            last_move: None,
            depth: 0,
            score: None,
            children: Vec::new(),
        }
    }

    /// Child reached by the side to move playing `coord`.
    fn child(&self, coord: Coord) -> Result<Self, MoveError> {
        Ok(Self {
            board: self.board.place(self.mover, coord)?,
            mover: self.mover.opponent(),
            last_move: Some(coord),
            depth: self.depth + 1,
            score: None,
            children: Vec::new(),
        })
    }

    /// Snapshot of the board at this node.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move at this node.
    pub fn mover(&self) -> Side {
        self.mover
    }

    /// Placement that produced this node; `None` at the root.
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Plies from the root.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Backed-up score, `None` until computed.
    pub fn score(&self) -> Option<i32> {
        self.score
    }

    /// Children in generation order.
    pub fn children(&self) -> &[SearchNode] {
        &self.children
    }

    /// Number of nodes in this subtree, itself included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(SearchNode::size).sum::<usize>()
    }

    /// First child with the strictly largest score.
    pub fn best_child(&self) -> Option<&SearchNode> {
        let mut best: Option<&SearchNode> = None;
        for child in &self.children {
            let Some(score) = child.score else { continue };
            if best.and_then(|b| b.score).is_none_or(|top| score > top) {
                best = Some(child);
            }
        }
        best
    }
}

/// Error returned when no move can be searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already won or drawn.
    #[display("cannot search a finished game ({:?})", _0)]
    Finished(GameStatus),

    /// The evaluator says the game is on but no cell is free.
    #[display("no legal moves available")]
    NoLegalMoves,

    /// A generated child could not be placed.
    #[display("illegal move generated during search: {}", _0)]
    IllegalMove(MoveError),
}

impl std::error::Error for SearchError {}

impl From<MoveError> for SearchError {
    fn from(err: MoveError) -> Self {
        Self::IllegalMove(err)
    }
}

/// Outcome of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move.
    pub best: Coord,
    /// Backed-up score of the chosen move; `None` for the opening shortcut.
    pub score: Option<i32>,
    /// Nodes in the search tree, root included.
    pub nodes: usize,
    /// True if the opening shortcut answered without searching.
    pub opening: bool,
}

struct Expander<'a, E> {
    evaluator: &'a E,
    maximizer: Side,
}

impl<E: TerminalEvaluator> Expander<'_, E> {
    fn leaf_score(&self, node: &SearchNode) -> Option<i32> {
        match self.evaluator.winner(&node.board) {
            Some(side) if side == self.maximizer => Some(WIN_SCORE - node.depth),
            Some(_) => Some(node.depth - WIN_SCORE),
            None if self.evaluator.is_draw(&node.board) => Some(0),
            None => None,
        }
    }

    /// Expands a non-terminal node and scores it after all its children.
    fn expand(&self, node: &mut SearchNode) -> Result<(), SearchError> {
        for coord in node.board.legal_moves() {
            let mut child = node.child(coord)?;
            match self.leaf_score(&child) {
                Some(score) => child.score = Some(score),
                None => self.expand(&mut child)?,
            }
            node.children.push(child);
        }

        let scores = node.children.iter().filter_map(|c| c.score);
        let backed_up = if node.mover == self.maximizer {
            scores.max()
        } else {
            scores.min()
        };
        // A node the evaluator keeps open with no free cell has nothing to gain.
        node.score = Some(backed_up.unwrap_or(0));
        Ok(())
    }
}

/// Builds and scores the complete tree below `board` with `mover` to play.
///
/// Scores are relative to `mover`. Returns the scored root.
///
/// # Errors
///
/// [`SearchError::Finished`] if `board` is already terminal,
/// [`SearchError::NoLegalMoves`] if it has no empty cell.
#[instrument(skip_all, fields(mover = %mover))]
pub fn build_tree<E: TerminalEvaluator>(
    board: &Board,
    mover: Side,
    evaluator: &E,
) -> Result<SearchNode, SearchError> {
    if let Some(side) = evaluator.winner(board) {
        return Err(SearchError::Finished(GameStatus::Won(side)));
    }
    if evaluator.is_draw(board) {
        return Err(SearchError::Finished(GameStatus::Draw));
    }
    if board.legal_moves().is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let expander = Expander {
        evaluator,
        maximizer: mover,
    };
    let mut root = SearchNode::root(*board, mover);
    expander.expand(&mut root)?;
    Ok(root)
}

/// Searches for the best move, using `evaluator` to detect finished boards.
#[instrument(skip_all, fields(mover = %mover))]
pub fn search_with<E: TerminalEvaluator>(
    board: &Board,
    mover: Side,
    evaluator: &E,
) -> Result<SearchReport, SearchError> {
    if board.is_blank() {
        debug!(best = %OPENING_MOVE, "Empty board, playing opening move");
        return Ok(SearchReport {
            best: OPENING_MOVE,
            score: None,
            nodes: 0,
            opening: true,
        });
    }

    let root = build_tree(board, mover, evaluator)?;
    let best = root.best_child().ok_or(SearchError::NoLegalMoves)?;
    let best_move = best.last_move.ok_or(SearchError::NoLegalMoves)?;

    let report = SearchReport {
        best: best_move,
        score: best.score,
        nodes: root.size(),
        opening: false,
    };
    debug!(
        best = %report.best,
        score = ?report.score,
        nodes = report.nodes,
        "Search complete"
    );
    Ok(report)
}

/// Searches for the best move under the standard rules.
pub fn search(board: &Board, mover: Side) -> Result<SearchReport, SearchError> {
    search_with(board, mover, &StandardRules)
}

/// Returns the best move for `mover` under the standard rules.
///
/// # Errors
///
/// Fails if the game on `board` is already over.
pub fn best_move(board: &Board, mover: Side) -> Result<Coord, SearchError> {
    search(board, mover).map(|report| report.best)
}

/// Returns the best move for `mover`, detecting terminal boards with
/// `evaluator`.
pub fn best_move_with<E: TerminalEvaluator>(
    board: &Board,
    mover: Side,
    evaluator: &E,
) -> Result<Coord, SearchError> {
    search_with(board, mover, evaluator).map(|report| report.best)
}
