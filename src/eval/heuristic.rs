//! Heuristic evaluation of board positions
//!
//! Scores are always from Black's point of view (the engine side). The
//! evaluation folds the run counts for lengths 2 through 5 of both colors
//! into one number, with sentinel values for decided positions.

use std::fmt;

use crate::board::{Board, Stone};

use super::patterns::{detect_runs, RunCounts};

/// Score of a won position. Lost positions score `-MAX_SCORE`.
pub const MAX_SCORE: i32 = 100_000;

/// Score when White has an open four: lost unless Black wins first.
pub const NEAR_LOSS_SCORE: i32 = -MAX_SCORE + 1;

/// Shortest run length that is tracked
pub const MIN_RUN: usize = 2;
/// Winning run length
pub const WIN_RUN: usize = 5;

/// Pattern weights for the linear part of the evaluation
pub struct PatternScore;

impl PatternScore {
    /// Any White four, open or semi-open: must be answered at once
    pub const OPP_FOUR: i32 = -10_000;
    pub const OPEN_FOUR: i32 = 500;
    pub const SEMI_OPEN_FOUR: i32 = 50;
    pub const OPP_OPEN_THREE: i32 = -100;
    pub const OPP_SEMI_OPEN_THREE: i32 = -30;
    pub const OPEN_THREE: i32 = 50;
    pub const SEMI_OPEN_THREE: i32 = 10;
    /// Twos only break ties
    pub const TWO: i32 = 1;
    pub const OPP_TWO: i32 = -1;
}

/// Run counts of one color for every tracked length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub stone: Stone,
    by_length: [RunCounts; WIN_RUN - MIN_RUN + 1],
}

impl Analysis {
    /// Counts for `length`, or `None` outside 2..=5.
    pub fn get(&self, length: usize) -> Option<RunCounts> {
        if (MIN_RUN..=WIN_RUN).contains(&length) {
            Some(self.by_length[length - MIN_RUN])
        } else {
            None
        }
    }

    /// `(length, counts)` pairs in increasing length
    pub fn iter(&self) -> impl Iterator<Item = (usize, RunCounts)> + '_ {
        self.by_length
            .iter()
            .enumerate()
            .map(|(i, &counts)| (i + MIN_RUN, counts))
    }

    #[inline]
    fn at(&self, length: usize) -> RunCounts {
        self.by_length[length - MIN_RUN]
    }
}

/// Per-length run counts of `stone`, for display next to the board.
pub fn analyze(board: &Board, stone: Stone) -> Analysis {
    let mut by_length = [RunCounts::default(); WIN_RUN - MIN_RUN + 1];
    for (i, counts) in by_length.iter_mut().enumerate() {
        *counts = detect_runs(board, stone, i + MIN_RUN);
    }
    Analysis { stone, by_length }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (length, counts) in self.iter() {
            writeln!(f, "Open rows of length {length}: {}", counts.open)?;
            writeln!(f, "Semi-open rows of length {length}: {}", counts.semi_open)?;
        }
        Ok(())
    }
}

/// Evaluate the board from Black's perspective.
///
/// Returns:
/// - `MAX_SCORE` if Black has an open or semi-open five
/// - `-MAX_SCORE` if White has one (Black is checked first)
/// - `NEAR_LOSS_SCORE` if White has an open four
/// - otherwise the weighted pattern sum, strictly between
///   `NEAR_LOSS_SCORE` and `MAX_SCORE`
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let black = analyze(board, Stone::Black);
    let white = analyze(board, Stone::White);

    if black.at(5).any() {
        return MAX_SCORE;
    }
    if white.at(5).any() {
        return -MAX_SCORE;
    }
    if white.at(4).open >= 1 {
        return NEAR_LOSS_SCORE;
    }

    pattern_score(&black, &white).clamp(NEAR_LOSS_SCORE + 1, MAX_SCORE - 1)
}

/// Weighted sum of the non-terminal patterns
fn pattern_score(black: &Analysis, white: &Analysis) -> i32 {
    let n = |c: u32| i32::try_from(c).unwrap_or(i32::MAX);
    let (b4, b3, b2) = (black.at(4), black.at(3), black.at(2));
    let (w4, w3, w2) = (white.at(4), white.at(3), white.at(2));

    let terms = [
        PatternScore::OPP_FOUR.saturating_mul(n(w4.total())),
        PatternScore::OPEN_FOUR.saturating_mul(n(b4.open)),
        PatternScore::SEMI_OPEN_FOUR.saturating_mul(n(b4.semi_open)),
        PatternScore::OPP_OPEN_THREE.saturating_mul(n(w3.open)),
        PatternScore::OPP_SEMI_OPEN_THREE.saturating_mul(n(w3.semi_open)),
        PatternScore::OPEN_THREE.saturating_mul(n(b3.open)),
        PatternScore::SEMI_OPEN_THREE.saturating_mul(n(b3.semi_open)),
        PatternScore::TWO.saturating_mul(n(b2.total())),
        PatternScore::OPP_TWO.saturating_mul(n(w2.total())),
    ];
    terms.iter().fold(0i32, |acc, &t| acc.saturating_add(t))
}
