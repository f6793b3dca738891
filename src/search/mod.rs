//! Search module for Gomoku AI
//!
//! Contains the one-ply greedy selector and the scoped placement guard it
//! probes with.

pub mod oneply;

pub use oneply::{
    center, opening_move, search, select_move, SearchResult, TentativeStone, ENGINE_STONE,
};
