//! Filipino Dama rules engine and AI
//!
//! A checkers engine implementing the Filipino Dama ruleset and its common variants:
//! - 8x8 board by default (configurable), pieces on dark squares
//! - Mandatory capture with multi-jump chains that must be taken to the end
//! - Flying kings that slide and capture at any distance
//! - Men capture backward as well as forward
//! - Optional "take the most pieces" rule and mid-chain promotion
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Pieces, positions, board grid and moves
//! - [`rules`]: Rule variants and legal move generation
//! - [`engine`]: Game state, move application and terminal detection
//! - [`record`]: Persisted move records and replay
//! - [`eval`]: Position evaluation and move scoring
//! - [`search`]: Alpha-beta minimax
//! - [`ai`]: Computer opponent with three difficulty tiers
//!
//! # Quick Start
//!
//! ```
//! use dama::{apply_move, AiEngine, Difficulty, GameState, RulesConfig};
//!
//! let cfg = RulesConfig::default();
//! let mut state = GameState::initial(&cfg);
//! let mut ai = AiEngine::seeded(7);
//!
//! // Black opens, red answers
//! for _ in 0..2 {
//!     let mv = ai.choose_move(&state, state.turn, Difficulty::Medium, &cfg).unwrap();
//!     state = apply_move(&state, &mv, &cfg);
//! }
//! assert!(!state.is_finished());
//! ```
//!
//! Every function is pure: positions go in by reference and new values come
//! out. Rejected moves return the input state unchanged, so callers detect a
//! refusal by comparing states (or use [`try_apply_move`] for the reason).

pub mod ai;
pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod record;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use ai::{choose_move, AiEngine, Difficulty, MoveChoice, Strategy};
pub use board::{Board, Color, Move, Piece, PieceKind, Pos};
pub use engine::{
    apply_move, compute_result, count_pieces, try_apply_move, FinishReason, GameResult, GameState,
    PieceCounts,
};
pub use error::{BoardError, ConfigError, DifficultyParseError, MoveRejection, ReplayError};
pub use eval::{material_counts, MaterialCounts};
pub use record::{pick_move_from_to, replay, resolve_move, MoveRecord};
pub use rules::{legal_moves, CapturePriority, RulesConfig};
