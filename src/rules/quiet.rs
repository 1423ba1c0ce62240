//! Non-capturing moves

use crate::board::{forward_directions, Board, Move, Piece, Pos, DIAGONALS};

use super::config::RulesConfig;
use super::movegen::would_promote;

/// Quiet moves for the piece on `from`.
///
/// Men step one square diagonally forward. Kings step one square in any
/// direction, or slide along empty diagonals with `flying_kings`.
pub fn generate_quiet_moves(board: &Board, from: Pos, piece: Piece, cfg: &RulesConfig) -> Vec<Move> {
    let size = board.size();
    let mut moves = Vec::new();

    if !piece.is_king() {
        for dir in forward_directions(piece.color) {
            if let Some(to) = from.offset(dir, 1, size).filter(|&to| board.is_empty(to)) {
                moves.push(Move::quiet(piece.color, from, to, would_promote(piece, to, size)));
            }
        }
        return moves;
    }

    let reach = if cfg.flying_kings { i32::from(size) } else { 1 };
    for dir in DIAGONALS {
        for step in 1..=reach {
            match from.offset(dir, step, size) {
                Some(to) if board.is_empty(to) => {
                    moves.push(Move::quiet(piece.color, from, to, false));
                }
                _ => break,
            }
        }
    }
    moves
}

/// Whether the piece on `from` has any quiet move
pub fn has_quiet_move(board: &Board, from: Pos, piece: Piece) -> bool {
    let size = board.size();
    let empty_neighbor = |dir| from.offset(dir, 1, size).is_some_and(|to| board.is_empty(to));
    if piece.is_king() {
        DIAGONALS.into_iter().any(empty_neighbor)
    } else {
        forward_directions(piece.color).into_iter().any(empty_neighbor)
    }
}
