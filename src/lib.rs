//! One-ply Gomoku engine
//!
//! Analyzes five-in-a-row positions on an N x N board and picks moves by
//! scoring every legal placement one ply deep:
//! - Runs are matched by exact length and classified by their open ends
//! - Black (the engine) wins with an open or semi-open five
//! - A full board with no such five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board, stones, positions and line directions
//! - [`eval`]: Run detection and position evaluation
//! - [`rules`]: Terminal position detection
//! - [`search`]: One-ply move selection
//! - [`engine`]: Move selection with statistics
//! - [`game`]: Turn-by-turn session state machine
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{apply_move, new_game, select_move, terminal_result, Pos, Stone, TerminalResult};
//!
//! let mut board = new_game(8).unwrap();
//!
//! // Engine opens in the centre
//! let pos = select_move(&mut board).unwrap();
//! assert_eq!(pos, Pos::new(4, 4));
//! apply_move(&mut board, pos, Stone::Black).unwrap();
//!
//! apply_move(&mut board, Pos::new(3, 3), Stone::White).unwrap();
//! assert_eq!(terminal_result(&board), TerminalResult::Continue);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::AppConfig;
pub use engine::{Engine, MoveResult, SearchType};
pub use error::{ConfigError, GameError, IllegalMoveReason};
pub use eval::{Analysis, RunClass, RunCounts, MAX_SCORE};
pub use game::{GamePhase, GameSession};
pub use rules::TerminalResult;

/// Start a game on an empty `size` x `size` board. `size` must be at least 5.
pub fn new_game(size: usize) -> Result<Board, GameError> {
    Board::new(size)
}

/// Place `stone` at `pos`. Out-of-range, occupied or empty placements fail.
pub fn apply_move(board: &mut Board, pos: Pos, stone: Stone) -> Result<(), GameError> {
    board.place(pos, stone)
}

/// Win, draw or continue
pub fn terminal_result(board: &Board) -> TerminalResult {
    rules::terminal_result(board)
}

/// Black's best one-ply move. The board is left unchanged.
pub fn select_move(board: &mut Board) -> Result<Pos, GameError> {
    search::select_move(board)
}

/// Open and semi-open run counts of `stone` for lengths 2 through 5
pub fn analysis_snapshot(board: &Board, stone: Stone) -> Analysis {
    eval::analyze(board, stone)
}
