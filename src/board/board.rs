//! Board structure with bounds-checked placement

use std::fmt;

use super::{Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, IllegalMoveReason};

/// Square game board of a fixed side length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells, `size * size` long
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board. Fails if a five-in-a-row would not fit or the
    /// side exceeds [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos));
        pos.row * self.size + pos.col
    }

    /// Stone at an on-board position. Callers check `contains` first.
    #[inline]
    fn at(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Get stone at position, `None` off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.contains(pos).then(|| self.at(pos))
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Place a stone on an empty cell.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        let reason = if !self.contains(pos) {
            Some(IllegalMoveReason::OutOfBounds { size: self.size })
        } else if stone == Stone::Empty {
            Some(IllegalMoveReason::EmptyStone)
        } else {
            match self.at(pos) {
                Stone::Empty => None,
                occupant => Some(IllegalMoveReason::Occupied(occupant)),
            }
        };

        if let Some(reason) = reason {
            return Err(GameError::IllegalMove { pos, reason });
        }

        let idx = self.index(pos);
        self.cells[idx] = stone;
        Ok(())
    }

    /// Clear a cell. Used to revert tentative placements.
    #[inline]
    pub(crate) fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
    }

    /// Empty every cell, keeping the size
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::new(idx / size, idx % size))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|&pos| self.is_empty(pos))
    }

    /// Same position with Black and White exchanged
    pub fn swap_colors(&self) -> Board {
        Board {
            size: self.size,
            cells: self.cells.iter().map(|s| s.opponent()).collect(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:>3}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:>3}")?;
            for col in 0..self.size {
                write!(f, "{:>3}", self.at(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
