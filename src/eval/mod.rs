//! Evaluation module for Gomoku positions
//!
//! - [`patterns`]: line scanning and run classification
//! - [`heuristic`]: per-length analysis and the scalar evaluation

pub mod heuristic;
pub mod patterns;

pub use heuristic::{analyze, evaluate, Analysis, PatternScore, MAX_SCORE, NEAR_LOSS_SCORE};
pub use patterns::{classify_run, detect_runs, line_starts, scan_line, RunClass, RunCounts};
