//! Game rules for Filipino Dama
//!
//! This module implements the rule set:
//! - Quiet moves for men and (step or flying) kings
//! - Capture chains with mandatory continuation
//! - Capture obligation and selection policy
//! - Promotion on the back rank, mid-chain or at the end of the turn

pub mod capture;
pub mod config;
pub mod movegen;
pub mod quiet;

// Re-exports for convenient access
pub use capture::{can_capture, generate_captures};
pub use config::{CapturePriority, RulesConfig};
pub use movegen::{has_capture, has_legal_move, is_promotion_square, legal_moves, would_promote};
pub use quiet::{generate_quiet_moves, has_quiet_move};
