//! Game session: board, turn order and outcome
//!
//! The engine plays Black and moves first. A session moves through
//!
//! ```text
//! ComputerThinking --play_engine_move--> AwaitingPlayerMove
//! AwaitingPlayerMove --play_human_move--> ComputerThinking
//! either --move ends the game--> Finished(result)
//! ```
//!
//! and `restart` returns it to `ComputerThinking` on an empty board.

use std::fmt;

use tracing::info;

use crate::board::{Board, Pos, Stone};
use crate::engine::{Engine, MoveResult};
use crate::error::GameError;
use crate::eval::{analyze, Analysis};
use crate::rules::{terminal_result, TerminalResult};
use crate::search::ENGINE_STONE;

/// Side the human plays
pub const HUMAN_STONE: Stone = Stone::White;

/// Where a session is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingPlayerMove,
    ComputerThinking,
    Finished(TerminalResult),
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::AwaitingPlayerMove => f.write_str("awaiting player move"),
            GamePhase::ComputerThinking => f.write_str("computer is thinking"),
            GamePhase::Finished(result) => write!(f, "finished ({result})"),
        }
    }
}

/// One game between the engine and a human
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    engine: Engine,
    phase: GamePhase,
    last_move: Option<Pos>,
    move_history: Vec<(Pos, Stone)>,
    last_ai_result: Option<MoveResult>,
}

impl GameSession {
    /// Fresh game on an empty `size` x `size` board, engine to move.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            engine: Engine::new(),
            phase: GamePhase::ComputerThinking,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_history(&self) -> &[(Pos, Stone)] {
        &self.move_history
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Outcome so far; `Continue` while the game is running
    pub fn result(&self) -> TerminalResult {
        match self.phase {
            GamePhase::Finished(result) => result,
            GamePhase::AwaitingPlayerMove | GamePhase::ComputerThinking => {
                TerminalResult::Continue
            }
        }
    }

    /// Run counts of `stone` on the current board
    pub fn analysis(&self, stone: Stone) -> Analysis {
        analyze(&self.board, stone)
    }

    /// Let the engine choose and play Black's move.
    pub fn play_engine_move(&mut self) -> Result<MoveResult, GameError> {
        self.expect_phase(GamePhase::ComputerThinking)?;

        let result = self.engine.get_move_with_stats(&mut self.board)?;
        self.execute_move(result.best_move, ENGINE_STONE)?;
        self.last_ai_result = Some(result);
        Ok(result)
    }

    /// Play White's move at `pos`. An illegal move changes nothing.
    pub fn play_human_move(&mut self, pos: Pos) -> Result<TerminalResult, GameError> {
        self.expect_phase(GamePhase::AwaitingPlayerMove)?;
        self.execute_move(pos, HUMAN_STONE)
    }

    /// Clear the board and hand the first move back to the engine.
    pub fn restart(&mut self) {
        self.board.clear();
        self.phase = GamePhase::ComputerThinking;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        info!(size = self.board.size(), "game restarted");
    }

    #[cfg(test)]
    fn from_position(board: Board, phase: GamePhase) -> Self {
        Self {
            board,
            engine: Engine::new(),
            phase,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
        }
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Finished(result) => Err(GameError::GameOver(result)),
            phase if phase == expected => Ok(()),
            phase => Err(GameError::OutOfTurn { phase }),
        }
    }

    /// Place, record, then either finish the game or pass the turn.
    fn execute_move(&mut self, pos: Pos, stone: Stone) -> Result<TerminalResult, GameError> {
        self.board.place(pos, stone)?;
        self.move_history.push((pos, stone));
        self.last_move = Some(pos);
        info!(row = pos.row, col = pos.col, stone = ?stone, "move applied");

        let result = terminal_result(&self.board);
        self.phase = if result.is_terminal() {
            info!(%result, moves = self.move_history.len(), "game finished");
            GamePhase::Finished(result)
        } else if stone == ENGINE_STONE {
            GamePhase::AwaitingPlayerMove
        } else {
            GamePhase::ComputerThinking
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_engine_first() {
        let session = GameSession::new(8).unwrap();
        assert_eq!(session.phase(), GamePhase::ComputerThinking);
        assert!(session.board().is_board_empty());
        assert_eq!(session.result(), TerminalResult::Continue);
        assert!(GameSession::new(4).is_err());
    }

    #[test]
    fn test_turn_cycle() {
        let mut session = GameSession::new(8).unwrap();

        let first = session.play_engine_move().unwrap();
        assert_eq!(first.best_move, Pos::new(4, 4));
        assert_eq!(session.phase(), GamePhase::AwaitingPlayerMove);
        assert_eq!(session.last_move(), Some(Pos::new(4, 4)));

        let result = session.play_human_move(Pos::new(3, 3)).unwrap();
        assert_eq!(result, TerminalResult::Continue);
        assert_eq!(session.phase(), GamePhase::ComputerThinking);
        assert_eq!(
            session.move_history(),
            &[(Pos::new(4, 4), Stone::Black), (Pos::new(3, 3), Stone::White)]
        );

        session.play_engine_move().unwrap();
        assert_eq!(session.phase(), GamePhase::AwaitingPlayerMove);
        assert_eq!(session.board().stone_count(), 3);
        assert!(session.last_ai_result().is_some());
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut session = GameSession::new(8).unwrap();
        assert_eq!(
            session.play_human_move(Pos::new(0, 0)),
            Err(GameError::OutOfTurn {
                phase: GamePhase::ComputerThinking
            })
        );

        session.play_engine_move().unwrap();
        assert_eq!(
            session.play_engine_move(),
            Err(GameError::OutOfTurn {
                phase: GamePhase::AwaitingPlayerMove
            })
        );
        assert_eq!(session.board().stone_count(), 1);
    }

    #[test]
    fn test_illegal_human_move_keeps_turn() {
        let mut session = GameSession::new(8).unwrap();
        session.play_engine_move().unwrap();

        let err = session.play_human_move(Pos::new(4, 4)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
        let err = session.play_human_move(Pos::new(8, 0)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));

        assert_eq!(session.phase(), GamePhase::AwaitingPlayerMove);
        assert_eq!(session.move_history().len(), 1);
    }

    #[test]
    fn test_engine_win_finishes_game() {
        let mut board = Board::new(8).unwrap();
        for c in 1..5 {
            board.place(Pos::new(0, c), Stone::Black).unwrap();
        }
        for c in 1..4 {
            board.place(Pos::new(5, c), Stone::White).unwrap();
        }
        let mut session = GameSession::from_position(board, GamePhase::ComputerThinking);

        let result = session.play_engine_move().unwrap();
        assert_eq!(result.best_move, Pos::new(0, 0));
        assert_eq!(
            session.phase(),
            GamePhase::Finished(TerminalResult::BlackWins)
        );
        assert_eq!(session.result(), TerminalResult::BlackWins);
        assert_eq!(
            session.play_human_move(Pos::new(7, 7)),
            Err(GameError::GameOver(TerminalResult::BlackWins))
        );
        assert_eq!(
            session.play_engine_move(),
            Err(GameError::GameOver(TerminalResult::BlackWins))
        );
    }

    #[test]
    fn test_human_win_finishes_game() {
        let mut board = Board::new(8).unwrap();
        for c in 0..4 {
            board.place(Pos::new(7, c), Stone::White).unwrap();
        }
        board.place(Pos::new(3, 3), Stone::Black).unwrap();
        let mut session = GameSession::from_position(board, GamePhase::AwaitingPlayerMove);

        let result = session.play_human_move(Pos::new(7, 4)).unwrap();
        assert_eq!(result, TerminalResult::WhiteWins);
        assert_eq!(
            session.phase(),
            GamePhase::Finished(TerminalResult::WhiteWins)
        );
    }

    #[test]
    fn test_restart() {
        let mut session = GameSession::new(6).unwrap();
        session.play_engine_move().unwrap();
        session.play_human_move(Pos::new(0, 0)).unwrap();

        session.restart();
        assert_eq!(session.phase(), GamePhase::ComputerThinking);
        assert!(session.board().is_board_empty());
        assert_eq!(session.board().size(), 6);
        assert!(session.move_history().is_empty());
        assert!(session.last_move().is_none());
        assert!(session.last_ai_result().is_none());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(
            GamePhase::AwaitingPlayerMove.to_string(),
            "awaiting player move"
        );
        assert_eq!(
            GamePhase::Finished(TerminalResult::BlackWins).to_string(),
            "finished (Black won)"
        );
    }
}
