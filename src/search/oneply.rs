//! One-ply greedy move selection
//!
//! Every empty cell is tried for Black, the resulting position is scored with
//! [`evaluate`], and the best cell wins. Ties go to the first cell in
//! row-major order.

use std::ops::Deref;

use tracing::trace;

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::eval::evaluate;

/// Side the engine plays
pub const ENGINE_STONE: Stone = Stone::Black;

/// A stone placed for probing only. The cell is emptied again when the
/// guard is dropped, on every exit path.
pub struct TentativeStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TentativeStone<'a> {
    pub fn place(board: &'a mut Board, pos: Pos, stone: Stone) -> Result<Self, GameError> {
        board.place(pos, stone)?;
        Ok(Self { board, pos })
    }
}

impl Deref for TentativeStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for TentativeStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

/// Result of a one-ply search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Pos,
    /// Evaluation after playing `best_move`
    pub score: i32,
    /// Candidate positions evaluated
    pub nodes: u64,
}

/// Centre cell, the opening move on an empty board
#[inline]
pub fn center(board: &Board) -> Pos {
    Pos::new(board.size() / 2, board.size() / 2)
}

/// Score every empty cell for Black and keep the first maximum.
///
/// The board is only borrowed mutably to probe; it is unchanged on return.
pub fn search(board: &mut Board) -> Result<SearchResult, GameError> {
    let candidates: Vec<Pos> = board.empty_positions().collect();
    let mut best: Option<(Pos, i32)> = None;

    for &pos in &candidates {
        let score = {
            let probe = TentativeStone::place(board, pos, ENGINE_STONE)?;
            evaluate(&probe)
        };
        trace!(row = pos.row, col = pos.col, score, "candidate");

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    let (best_move, score) = best.ok_or(GameError::NoLegalMove)?;
    Ok(SearchResult {
        best_move,
        score,
        nodes: candidates.len() as u64,
    })
}

/// Book move played without evaluation: the centre of an empty board.
#[inline]
pub fn opening_move(board: &Board) -> Option<Pos> {
    board.is_board_empty().then(|| center(board))
}

/// Pick Black's move: the opening move if there is one, otherwise the best
/// one-ply reply.
pub fn select_move(board: &mut Board) -> Result<Pos, GameError> {
    if let Some(pos) = opening_move(board) {
        return Ok(pos);
    }
    search(board).map(|result| result.best_move)
}
