//! Game rules
//!
//! Placement legality lives on [`crate::board::Board::place`]; this module
//! decides when a game is over.

pub mod win;

// Re-exports for convenient access
pub use win::{has_five_in_row, terminal_result, TerminalResult};
