//! Run detection along board lines
//!
//! A run is a maximal stretch of same-colored stones along one direction.
//! Runs are matched by exact length: a six never counts as a five, and a
//! four inside a five is not a four.

use std::ops::{Add, AddAssign};

use crate::board::{Board, Direction, Pos, Stone};

/// How many ends of a run can still be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunClass {
    /// Both neighbors on the board and empty: `_OOO_`
    Open,
    /// Exactly one such neighbor: `XOOO_`, `|OOO_`
    SemiOpen,
    /// Neither: `XOOOX`, `|OOOX`
    Closed,
}

/// Open and semi-open run counts for one color and one length.
/// Closed runs are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounts {
    pub open: u32,
    pub semi_open: u32,
}

impl RunCounts {
    #[inline]
    pub const fn new(open: u32, semi_open: u32) -> Self {
        Self { open, semi_open }
    }

    /// Open plus semi-open
    #[inline]
    pub fn total(self) -> u32 {
        self.open + self.semi_open
    }

    #[inline]
    pub fn any(self) -> bool {
        self.total() > 0
    }

    #[inline]
    fn record(&mut self, class: RunClass) {
        match class {
            RunClass::Open => self.open += 1,
            RunClass::SemiOpen => self.semi_open += 1,
            RunClass::Closed => {}
        }
    }
}

impl Add for RunCounts {
    type Output = RunCounts;

    fn add(self, rhs: RunCounts) -> RunCounts {
        RunCounts::new(self.open + rhs.open, self.semi_open + rhs.semi_open)
    }
}

impl AddAssign for RunCounts {
    fn add_assign(&mut self, rhs: RunCounts) {
        *self = *self + rhs;
    }
}

/// Classify a run by the cells just outside it.
///
/// `first` and `last` are the run's end stones, `first` nearer the negative
/// side of `dir`.
pub fn classify_run(board: &Board, first: Pos, last: Pos, dir: Direction) -> RunClass {
    let size = board.size();
    let is_free = |p: Option<Pos>| p.is_some_and(|p| board.is_empty(p));

    let before = is_free(first.offset(dir, -1, size));
    let after = is_free(last.offset(dir, 1, size));

    match (before, after) {
        (true, true) => RunClass::Open,
        (true, false) | (false, true) => RunClass::SemiOpen,
        (false, false) => RunClass::Closed,
    }
}

/// Walk one line from `start` along `dir` and count runs of `color` that are
/// exactly `length` long.
pub fn scan_line(
    board: &Board,
    color: Stone,
    start: Pos,
    dir: Direction,
    length: usize,
) -> RunCounts {
    let mut counts = RunCounts::default();
    if color == Stone::Empty || length == 0 || !board.contains(start) {
        return counts;
    }

    let size = board.size();
    let mut run_len = 0usize;
    let mut run_start = start;
    let mut prev = start;
    let mut cursor = Some(start);

    while let Some(pos) = cursor {
        if board.get(pos) == Some(color) {
            if run_len == 0 {
                run_start = pos;
            }
            run_len += 1;
        } else {
            if run_len == length {
                counts.record(classify_run(board, run_start, prev, dir));
            }
            run_len = 0;
        }
        prev = pos;
        cursor = pos.offset(dir, 1, size);
    }

    // Run touching the far edge
    if run_len == length {
        counts.record(classify_run(board, run_start, prev, dir));
    }

    counts
}

/// Starting cell of every line along `dir`, each line exactly once.
pub fn line_starts(size: usize, dir: Direction) -> Vec<Pos> {
    let last = size.saturating_sub(1);
    match dir {
        Direction::Horizontal => (0..size).map(|row| Pos::new(row, 0)).collect(),
        Direction::Vertical => (0..size).map(|col| Pos::new(0, col)).collect(),
        Direction::DiagonalSE => (0..size)
            .map(|col| Pos::new(0, col))
            .chain((1..size).map(|row| Pos::new(row, 0)))
            .collect(),
        Direction::DiagonalSW => (0..size)
            .map(|col| Pos::new(0, col))
            .chain((1..size).map(|row| Pos::new(row, last)))
            .collect(),
    }
}

/// Count runs of `color` of exactly `length` over every row, column and
/// diagonal of the board.
pub fn detect_runs(board: &Board, color: Stone, length: usize) -> RunCounts {
    let mut total = RunCounts::default();
    for dir in Direction::ALL {
        for start in line_starts(board.size(), dir) {
            total += scan_line(board, color, start, dir, length);
        }
    }
    total
}
