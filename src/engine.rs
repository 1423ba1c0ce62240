//! Game state transitions
//!
//! A [`GameState`] is the unit of truth passed between caller and engine:
//! board, side to move and result. Every transition returns a new state and
//! leaves its input untouched.
//!
//! # Example
//!
//! ```
//! use dama::{apply_move, legal_moves, GameState, RulesConfig};
//!
//! let cfg = RulesConfig::default();
//! let state = GameState::initial(&cfg);
//! let mv = legal_moves(&state.board, state.turn, &cfg).remove(0);
//!
//! let next = apply_move(&state, &mv, &cfg);
//! assert_ne!(next, state);
//! assert_eq!(next.turn, state.turn.opponent());
//! ```
//!
//! Submitting a move that is not legal (stale, wrong side, game over) is not an
//! error: [`apply_move`] returns the input state unchanged, and
//! [`try_apply_move`] says why.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Color, Move, PieceKind};
use crate::error::MoveRejection;
use crate::rules::{has_legal_move, legal_moves, RulesConfig};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The side to move has no pieces left
    NoPieces,
    /// The side to move has pieces but cannot move any of them
    NoMoves,
}

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameResult {
    Waiting,
    Active,
    Finished { winner: Color, reason: FinishReason },
}

impl GameResult {
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, GameResult::Finished { .. })
    }

    /// Winner of a finished game
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Finished { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// Board, side to move and result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub result: GameResult,
}

impl GameState {
    /// Standard starting position; black moves first.
    pub fn initial(cfg: &RulesConfig) -> Self {
        Self::from_position(cfg.initial_board(), Color::Black, cfg)
    }

    /// Arbitrary position with its result computed for `turn`
    pub fn from_position(board: Board, turn: Color, cfg: &RulesConfig) -> Self {
        let result = compute_result(&board, turn, cfg);
        Self { board, turn, result }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.result.is_finished()
    }
}

/// Pieces per color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PieceCounts {
    pub red: usize,
    pub black: usize,
}

impl PieceCounts {
    #[inline]
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
        }
    }
}

impl std::ops::Index<Color> for PieceCounts {
    type Output = usize;

    fn index(&self, color: Color) -> &usize {
        match color {
            Color::Red => &self.red,
            Color::Black => &self.black,
        }
    }
}

/// Tally pieces by color
pub fn count_pieces(board: &Board) -> PieceCounts {
    let mut counts = PieceCounts::default();
    for (_, piece) in board.pieces() {
        match piece.color {
            Color::Red => counts.red += 1,
            Color::Black => counts.black += 1,
        }
    }
    counts
}

/// Result of a position with `turn` to move: the side to move loses when it has
/// no pieces or no legal move.
pub fn compute_result(board: &Board, turn: Color, cfg: &RulesConfig) -> GameResult {
    if count_pieces(board).get(turn) == 0 {
        return GameResult::Finished {
            winner: turn.opponent(),
            reason: FinishReason::NoPieces,
        };
    }
    if !has_legal_move(board, turn, cfg) {
        return GameResult::Finished {
            winner: turn.opponent(),
            reason: FinishReason::NoMoves,
        };
    }
    GameResult::Active
}

/// Apply `mv` if it is legal, otherwise return `state` unchanged.
///
/// The move is matched against the current legal set by its signature
/// ([`Move::key`]), so hand-built or stale moves are only accepted when they
/// are structurally identical to a generated one.
pub fn apply_move(state: &GameState, mv: &Move, cfg: &RulesConfig) -> GameState {
    match try_apply_move(state, mv, cfg) {
        Ok(next) => next,
        Err(reason) => {
            debug!(%reason, key = %mv.key(), "move rejected");
            state.clone()
        }
    }
}

/// Apply `mv`, or explain why it cannot be applied
pub fn try_apply_move(
    state: &GameState,
    mv: &Move,
    cfg: &RulesConfig,
) -> Result<GameState, MoveRejection> {
    if state.is_finished() {
        return Err(MoveRejection::GameFinished);
    }
    if mv.player != state.turn {
        return Err(MoveRejection::NotYourTurn {
            expected: state.turn,
            got: mv.player,
        });
    }

    let key = mv.key();
    let legal = legal_moves(&state.board, state.turn, cfg)
        .into_iter()
        .find(|m| m.key() == key)
        .ok_or(MoveRejection::IllegalMove { key })?;

    Ok(play(state, &legal, cfg))
}

/// Apply a move already known to be legal in `state`.
///
/// Search code uses this to skip re-validating moves it just generated.
pub(crate) fn play(state: &GameState, mv: &Move, cfg: &RulesConfig) -> GameState {
    let mut board = state.board.clone();
    let moving = board.remove(mv.from);
    for &cap in &mv.captures {
        board.remove(cap);
    }
    if let Some(piece) = moving {
        let piece = if mv.promotes && piece.kind == PieceKind::Man {
            piece.crowned()
        } else {
            piece
        };
        board.place(mv.to, piece);
    }

    let turn = state.turn.opponent();
    let result = compute_result(&board, turn, cfg);
    GameState { board, turn, result }
}
