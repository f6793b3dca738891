//! Terminal position detection
//!
//! A side wins with an open or semi-open run of exactly five. Closed fives
//! and overlines do not count. A full board with no winner is a draw.

use std::fmt;

use crate::board::{Board, Stone};
use crate::eval::{detect_runs, heuristic::WIN_RUN};

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalResult {
    Continue,
    BlackWins,
    WhiteWins,
    Draw,
}

impl TerminalResult {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != TerminalResult::Continue
    }

    #[inline]
    pub fn winner(self) -> Option<Stone> {
        match self {
            TerminalResult::BlackWins => Some(Stone::Black),
            TerminalResult::WhiteWins => Some(Stone::White),
            TerminalResult::Continue | TerminalResult::Draw => None,
        }
    }
}

impl fmt::Display for TerminalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TerminalResult::Continue => "Continue",
            TerminalResult::BlackWins => "Black won",
            TerminalResult::WhiteWins => "White won",
            TerminalResult::Draw => "Draw",
        };
        f.write_str(text)
    }
}

/// Check if `stone` has a winning five
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    detect_runs(board, stone, WIN_RUN).any()
}

/// Check for a winner, then for a draw.
///
/// Black is checked first; both sides winning at once cannot arise from
/// alternating legal moves.
pub fn terminal_result(board: &Board) -> TerminalResult {
    if has_five_in_row(board, Stone::Black) {
        return TerminalResult::BlackWins;
    }
    if has_five_in_row(board, Stone::White) {
        return TerminalResult::WhiteWins;
    }
    if board.is_full() {
        return TerminalResult::Draw;
    }
    TerminalResult::Continue
}
