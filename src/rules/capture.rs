//! Capture-chain search
//!
//! A capture jumps one opposing piece diagonally. After each jump the captured
//! piece is lifted immediately and the search continues from the landing square;
//! a chain is only complete once no further jump exists from where it stands.
//!
//! - Men jump an adjacent piece onto the empty square right behind it, forward
//!   only or in all four directions depending on `men_capture_backward`.
//! - Kings scan outward to the first occupied square; if that is an opponent,
//!   every empty square beyond it (until blocked) is a separate landing option.
//!
//! The search works on one scratch board, making each jump and unmaking it on
//! the way back, so callers only ever see completed moves.

use crate::board::{forward_directions, Board, Color, Dir, Move, Piece, Pos, DIAGONALS};

use super::config::RulesConfig;
use super::movegen::would_promote;

/// Every maximal capture sequence for the piece standing on `from`.
///
/// Returns an empty vector when the piece has no capture.
pub fn generate_captures(board: &Board, from: Pos, piece: Piece, cfg: &RulesConfig) -> Vec<Move> {
    if !can_capture(board, from, piece, cfg) {
        return Vec::new();
    }

    let mut search = ChainSearch {
        board: board.clone(),
        cfg,
        player: piece.color,
        started_as_king: piece.is_king(),
        path: vec![from],
        captures: Vec::new(),
        moves: Vec::new(),
    };
    search.extend(from, piece);
    search.moves
}

/// Whether the piece on `pos` has at least one jump available.
///
/// A chain exists exactly when its first jump does, so this is the cheap test
/// used for terminal detection.
pub fn can_capture(board: &Board, pos: Pos, piece: Piece, cfg: &RulesConfig) -> bool {
    let size = board.size();
    if piece.is_king() {
        DIAGONALS.iter().any(|&dir| king_target(board, pos, piece.color, dir).is_some())
    } else {
        man_capture_directions(piece.color, cfg).iter().any(|&dir| {
            matches!(
                (pos.offset(dir, 1, size), pos.offset(dir, 2, size)),
                (Some(mid), Some(landing))
                    if is_opponent(board, mid, piece.color) && board.is_empty(landing)
            )
        })
    }
}

/// Directions a man may capture in
fn man_capture_directions(color: Color, cfg: &RulesConfig) -> Vec<Dir> {
    if cfg.men_capture_backward {
        DIAGONALS.to_vec()
    } else {
        forward_directions(color).to_vec()
    }
}

#[inline]
fn is_opponent(board: &Board, pos: Pos, color: Color) -> bool {
    board.get(pos).is_some_and(|p| p.color != color)
}

/// First occupied square along `dir` from `pos`, with its distance, if it holds an opponent
/// that has at least one empty square right behind it.
fn king_target(board: &Board, pos: Pos, color: Color, dir: Dir) -> Option<(Pos, i32)> {
    let size = board.size();
    let mut step = 1;
    while let Some(cur) = pos.offset(dir, step, size) {
        match board.get(cur) {
            None => step += 1,
            Some(p) if p.color != color => {
                let behind = pos.offset(dir, step + 1, size)?;
                return board.is_empty(behind).then_some((cur, step));
            }
            Some(_) => return None,
        }
    }
    None
}

/// Depth-first search state for one piece's capture chains
struct ChainSearch<'a> {
    board: Board,
    cfg: &'a RulesConfig,
    player: Color,
    started_as_king: bool,
    path: Vec<Pos>,
    captures: Vec<Pos>,
    moves: Vec<Move>,
}

impl ChainSearch<'_> {
    /// Extend the chain from `pos`; emit a move when it cannot be extended.
    fn extend(&mut self, pos: Pos, piece: Piece) {
        let extended = if piece.is_king() {
            self.extend_king(pos, piece)
        } else {
            self.extend_man(pos, piece)
        };

        if !extended && !self.captures.is_empty() {
            self.finish(piece);
        }
    }

    fn extend_man(&mut self, pos: Pos, piece: Piece) -> bool {
        let size = self.board.size();
        let mut extended = false;

        for dir in man_capture_directions(piece.color, self.cfg) {
            let (Some(mid), Some(landing)) = (pos.offset(dir, 1, size), pos.offset(dir, 2, size))
            else {
                continue;
            };
            if !is_opponent(&self.board, mid, piece.color) || !self.board.is_empty(landing) {
                continue;
            }

            extended = true;
            let next = if self.cfg.promote_mid_turn && would_promote(piece, landing, size) {
                piece.crowned()
            } else {
                piece
            };
            self.jump(pos, mid, landing, piece, next);
        }

        extended
    }

    fn extend_king(&mut self, pos: Pos, piece: Piece) -> bool {
        let size = self.board.size();
        let mut extended = false;

        for dir in DIAGONALS {
            let Some((victim, distance)) = king_target(&self.board, pos, piece.color, dir) else {
                continue;
            };

            let mut landing_step = distance + 1;
            while let Some(landing) = pos.offset(dir, landing_step, size) {
                if !self.board.is_empty(landing) {
                    break;
                }
                extended = true;
                self.jump(pos, victim, landing, piece, piece);
                landing_step += 1;
            }
        }

        extended
    }

    /// Make one jump, search on from the landing square, then unmake it.
    fn jump(&mut self, pos: Pos, victim: Pos, landing: Pos, piece: Piece, next: Piece) {
        let taken = self.board.remove(victim);
        self.board.remove(pos);
        self.board.place(landing, next);
        self.path.push(landing);
        self.captures.push(victim);

        self.extend(landing, next);

        self.captures.pop();
        self.path.pop();
        self.board.remove(landing);
        self.board.place(pos, piece);
        if let Some(taken) = taken {
            self.board.place(victim, taken);
        }
    }

    /// Record the current chain as a complete move
    fn finish(&mut self, piece: Piece) {
        let to = self.path.last().copied().unwrap_or(self.path[0]);
        let promotes = !self.started_as_king
            && (piece.is_king()
                || (!self.cfg.promote_mid_turn && would_promote(piece, to, self.board.size())));

        self.moves.push(Move::capture(
            self.player,
            self.path.clone(),
            self.captures.clone(),
            promotes,
        ));
    }
}
