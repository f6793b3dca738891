//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Smallest side length that can still hold a five-in-a-row
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest side length; the console grid labels up to two-digit indices
pub const MAX_BOARD_SIZE: usize = 99;
/// Side length used by the console game when nothing else is configured
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Cell contents. Black is the engine side, White the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character form used when printing a board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `n` cells along `dir`, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dir: Direction, n: isize, size: usize) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = self.row as isize + dr * n;
        let c = self.col as isize + dc * n;
        if r >= 0 && c >= 0 && (r as usize) < size && (c as usize) < size {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order, matching the order the move selector visits cells.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// The four line orientations. Each line on the board runs along exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (0, 1)
    Horizontal,
    /// (1, 0)
    Vertical,
    /// (1, 1), top-left to bottom-right
    DiagonalSE,
    /// (1, -1), top-right to bottom-left
    DiagonalSW,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalSE,
        Direction::DiagonalSW,
    ];

    /// (row step, column step)
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalSE => (1, 1),
            Direction::DiagonalSW => (1, -1),
        }
    }
}
