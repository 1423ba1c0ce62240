//! Legal move generation for the side to move

use crate::board::{promotion_row, Board, Color, Move, Piece, Pos};

use super::capture::{can_capture, generate_captures};
use super::config::{CapturePriority, RulesConfig};
use super::quiet::{generate_quiet_moves, has_quiet_move};

/// Every legal move for `player`.
///
/// Pieces are visited in row-major order. A piece with a capture contributes its
/// capture chains only; the rest contribute quiet moves. With mandatory capture,
/// any capture on the board removes all quiet moves, and `CapturePriority::Max`
/// then keeps only the chains taking the most pieces. Captures come before quiet
/// moves in the result, but callers should rely on membership, not order.
///
/// An empty result means `player` is stuck.
pub fn legal_moves(board: &Board, player: Color, cfg: &RulesConfig) -> Vec<Move> {
    let mut capture_moves = Vec::new();
    let mut quiet_moves = Vec::new();

    for (from, piece) in board.pieces_of(player) {
        let captures = generate_captures(board, from, piece, cfg);
        if captures.is_empty() {
            quiet_moves.extend(generate_quiet_moves(board, from, piece, cfg));
        } else {
            capture_moves.extend(captures);
        }
    }

    if cfg.mandatory_capture && !capture_moves.is_empty() {
        if cfg.capture_priority == CapturePriority::Max {
            let max = capture_moves.iter().map(|m| m.captures.len()).max().unwrap_or(0);
            capture_moves.retain(|m| m.captures.len() == max);
        }
        return capture_moves;
    }

    capture_moves.extend(quiet_moves);
    capture_moves
}

/// Whether `player` has at least one legal move, without enumerating chains
pub fn has_legal_move(board: &Board, player: Color, cfg: &RulesConfig) -> bool {
    board
        .pieces_of(player)
        .any(|(from, piece)| has_quiet_move(board, from, piece) || can_capture(board, from, piece, cfg))
}

/// Whether any piece of `player` has a capture available
pub fn has_capture(board: &Board, player: Color, cfg: &RulesConfig) -> bool {
    board
        .pieces_of(player)
        .any(|(from, piece)| can_capture(board, from, piece, cfg))
}

/// A man landing on its promotion row is crowned; kings never are
#[inline]
pub fn would_promote(piece: Piece, landing: Pos, size: u8) -> bool {
    !piece.is_king() && landing.row == promotion_row(piece.color, size)
}

#[inline]
pub fn is_promotion_square(color: Color, pos: Pos, size: u8) -> bool {
    pos.row == promotion_row(color, size)
}
