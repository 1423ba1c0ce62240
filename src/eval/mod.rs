//! Position evaluation for the Dama AI
//!
//! Contains:
//! - Material + mobility evaluation of a position from one side's perspective
//! - Immediate tactical scoring of single moves (captures, promotion)
//! - Material tallies by color and rank

pub mod material;
pub mod tactics;

pub use material::{evaluate, material_counts, MaterialCounts, MaterialWeights};
pub use tactics::{score_immediate, tactical_value, CAPTURE_WEIGHT, PROMOTION_BONUS};
