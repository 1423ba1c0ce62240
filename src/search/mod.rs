//! Search module for the Dama AI
//!
//! Contains:
//! - Fixed-depth minimax with alpha-beta pruning, scored from one side's perspective
//! - Root move ordering by immediate tactical score

pub mod alphabeta;
pub mod ordering;

pub use alphabeta::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, WIN_SCORE};
pub use ordering::{order_moves, ScoredMove};
