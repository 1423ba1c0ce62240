//! Material and mobility evaluation
//!
//! Scores are always from one fixed side's perspective: positive is good for
//! that side whoever is to move.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Piece};
use crate::engine::{count_pieces, GameState};
use crate::rules::{legal_moves, RulesConfig};

/// Value of a man
pub const MAN_VALUE: f64 = 3.0;

/// Value of a king that only steps
pub const KING_VALUE: f64 = 5.0;

/// Value of a flying king
pub const FLYING_KING_VALUE: f64 = 7.0;

/// Weight of each legal move of difference between the sides
pub const MOBILITY_WEIGHT: f64 = 0.1;

/// Piece values under a ruleset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialWeights {
    pub man: f64,
    pub king: f64,
}

impl MaterialWeights {
    /// Kings are worth more when they fly
    pub fn for_rules(cfg: &RulesConfig) -> Self {
        Self {
            man: MAN_VALUE,
            king: if cfg.flying_kings {
                FLYING_KING_VALUE
            } else {
                KING_VALUE
            },
        }
    }

    #[inline]
    pub fn value(&self, piece: Piece) -> f64 {
        if piece.is_king() {
            self.king
        } else {
            self.man
        }
    }
}

/// Evaluate `state` for `color`: material balance plus a small mobility term.
///
/// Finished positions are not special-cased here; the searcher scores those
/// before reaching a leaf.
#[must_use]
pub fn evaluate(state: &GameState, color: Color, cfg: &RulesConfig) -> f64 {
    let weights = MaterialWeights::for_rules(cfg);

    let material: f64 = state
        .board
        .pieces()
        .map(|(_, piece)| {
            let value = weights.value(piece);
            if piece.color == color {
                value
            } else {
                -value
            }
        })
        .sum();

    let own = legal_moves(&state.board, color, cfg).len() as f64;
    let theirs = legal_moves(&state.board, color.opponent(), cfg).len() as f64;

    material + MOBILITY_WEIGHT * (own - theirs)
}

/// Pieces per color, with kings broken out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCounts {
    /// All red pieces, kings included
    pub red: usize,
    /// All black pieces, kings included
    pub black: usize,
    pub red_kings: usize,
    pub black_kings: usize,
}

impl MaterialCounts {
    pub fn kings(&self, color: Color) -> usize {
        match color {
            Color::Red => self.red_kings,
            Color::Black => self.black_kings,
        }
    }

    pub fn men(&self, color: Color) -> usize {
        match color {
            Color::Red => self.red - self.red_kings,
            Color::Black => self.black - self.black_kings,
        }
    }
}

pub fn material_counts(board: &Board) -> MaterialCounts {
    let pieces = count_pieces(board);
    let mut counts = MaterialCounts {
        red: pieces.red,
        black: pieces.black,
        ..MaterialCounts::default()
    };
    for (_, piece) in board.pieces().filter(|(_, p)| p.is_king()) {
        match piece.color {
            Color::Red => counts.red_kings += 1,
            Color::Black => counts.black_kings += 1,
        }
    }
    counts
}
