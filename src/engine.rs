//! Engine front end with search statistics
//!
//! Wraps the one-ply selector and reports how the move was found:
//!
//! 1. **Opening**: empty board, play the centre without evaluating
//! 2. **One-ply**: score every empty cell for Black and take the best
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Engine, Pos, Stone};
//!
//! let engine = Engine::new();
//! let mut board = Board::new(8).unwrap();
//! board.place(Pos::new(3, 3), Stone::White).unwrap();
//!
//! let result = engine.get_move_with_stats(&mut board).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos};
use crate::error::GameError;
use crate::search::{opening_move, search};

/// Which path produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Centre of an empty board
    Opening,
    /// Exhaustive one-ply lookahead
    OnePly,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Evaluation of the position after the move (0 for the opening)
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Candidate positions evaluated
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }
}

/// Move-selection engine for the Black side.
///
/// Holds no state; one engine can serve any number of boards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Best move for Black, or `NoLegalMove` on a full board.
    pub fn get_move(&self, board: &mut Board) -> Result<Pos, GameError> {
        self.get_move_with_stats(board).map(|r| r.best_move)
    }

    /// Best move for Black with search statistics.
    ///
    /// The board is probed in place and restored before returning.
    pub fn get_move_with_stats(&self, board: &mut Board) -> Result<MoveResult, GameError> {
        let start = Instant::now();

        let result = if let Some(pos) = opening_move(board) {
            MoveResult::opening(pos, elapsed_ms(start))
        } else {
            let found = search(board)?;
            MoveResult {
                best_move: found.best_move,
                score: found.score,
                search_type: SearchType::OnePly,
                time_ms: elapsed_ms(start),
                nodes: found.nodes,
            }
        };

        debug!(
            row = result.best_move.row,
            col = result.best_move.col,
            score = result.score,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "engine move"
        );
        Ok(result)
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::eval::MAX_SCORE;

    #[test]
    fn test_engine_opening() {
        let engine = Engine::new();
        let mut board = Board::new(8).unwrap();
        let result = engine.get_move_with_stats(&mut board).unwrap();
        assert_eq!(result.best_move, Pos::new(4, 4));
        assert_eq!(result.search_type, SearchType::Opening);
        assert_eq!(result.nodes, 0);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new(8).unwrap();
        for c in 2..6 {
            board.place(Pos::new(5, c), Stone::Black).unwrap();
        }
        board.place(Pos::new(0, 0), Stone::White).unwrap();

        let engine = Engine::new();
        let result = engine.get_move_with_stats(&mut board).unwrap();
        assert_eq!(result.best_move, Pos::new(5, 1));
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.search_type, SearchType::OnePly);
        assert_eq!(result.nodes, 64 - 5);
    }

    #[test]
    fn test_engine_full_board() {
        let mut board = Board::new(5).unwrap();
        for pos in board.positions().collect::<Vec<_>>() {
            let stone = if pos.col % 2 == 0 { Stone::Black } else { Stone::White };
            board.place(pos, stone).unwrap();
        }
        let engine = Engine::new();
        assert_eq!(engine.get_move(&mut board), Err(GameError::NoLegalMove));
    }
}
